//! Integration tests for the command line

use std::path::PathBuf;

use hyperfixi_runtime::cli::{Action, CliError, parse_args, run};

fn args(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

fn snippet_file(name: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("hyperfixi-{}-{name}.json", std::process::id()));
    std::fs::write(&path, json).unwrap();
    path
}

fn run_to_string(line: &str) -> (Result<(), CliError>, String) {
    let config = parse_args(&args(line)).unwrap();
    let mut out = Vec::new();
    let result = run(&config, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn compile_in_another_language() {
    let (result, out) = run_to_string("--lang es compile en clic alternar .active");
    result.unwrap();
    assert!(out.contains("classList.toggle('active')"));
}

#[test]
fn failing_compile_is_an_error() {
    let (result, _) = run_to_string("compile %%% ???");
    assert!(matches!(result, Err(CliError::Compile(_))));
}

#[test]
fn batch_writes_a_bundle() {
    let path = snippet_file(
        "ok",
        r#"[{"domain": "hyperscript", "code": "on click toggle .active", "file": "index.html", "line": 2, "column": 7}]"#,
    );
    let (result, out) = run_to_string(&format!("--format cjs batch {}", path.display()));
    std::fs::remove_file(&path).ok();
    result.unwrap();
    assert!(out.contains("module.exports = { handlers };"));
    assert!(out.contains("// index.html:2:7"));
}

#[test]
fn batch_json_reports_errors() {
    let path = snippet_file(
        "mixed",
        r#"[{"domain": "hyperscript", "code": "toggle .a"}, {"domain": "hyperscript", "code": "%%% ???"}]"#,
    );
    let (result, out) = run_to_string(&format!("--json batch {}", path.display()));
    std::fs::remove_file(&path).ok();
    assert!(matches!(result, Err(CliError::Compile(_))));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["stats"]["compiledCount"], 1);
    assert_eq!(json["stats"]["errorCount"], 1);
}

#[test]
fn version_and_help() {
    let (result, out) = run_to_string("--version");
    result.unwrap();
    assert!(out.starts_with("hyperfixi "));
    assert_eq!(parse_args(&args("-h")).unwrap().action, Action::Help);
}
