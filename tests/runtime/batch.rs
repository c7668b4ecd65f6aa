//! Integration tests for batch compilation and bundling

use hyperfixi_compiler::OutputMode;
use hyperfixi_runtime::{BatchCompiler, BundleOptions, CompileOptions, ExtractedSnippet, bundle};

fn page() -> Vec<ExtractedSnippet> {
    vec![
        ExtractedSnippet::new("hyperscript", "on click toggle .active").at("index.html", 4, 12),
        ExtractedSnippet::new("hyperscript", "on click toggle .active").at("index.html", 9, 12),
        ExtractedSnippet::new("hyperscript", "クリックで.activeを切り替え")
            .at("ja/index.html", 4, 12)
            .in_language("ja"),
        ExtractedSnippet::new("hyperscript", "on load repeat 2 times increment :n end")
            .at("about.html", 1, 1),
    ]
}

// =============================================================================
// Batch
// =============================================================================

#[test]
fn ids_are_unique_across_the_batch() {
    let result = BatchCompiler::new(CompileOptions::default()).compile(&page());
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let ids: Vec<_> = result
        .compiled
        .iter()
        .map(|c| c.result.metadata.handler_id.as_str())
        .collect();
    assert_eq!(
        &ids[..3],
        ["_hf_click_toggle_active", "_hf_click_toggle_active_2", "_hf_click_toggle_active_3"]
    );
}

#[test]
fn stats_and_usage() {
    let mut snippets = page();
    snippets.push(ExtractedSnippet::new("bdd", "%%% ???").at("spec.html", 2, 3));
    let result = BatchCompiler::new(CompileOptions::default()).compile(&snippets);
    assert_eq!(result.stats.total_snippets, 5);
    assert_eq!(result.stats.compiled_count, 4);
    assert_eq!(result.stats.error_count, 1);
    assert_eq!(result.stats.domain_breakdown["hyperscript"], 4);
    assert_eq!(result.stats.domain_breakdown["bdd"], 1);

    let error = &result.errors[0];
    assert_eq!((error.file.as_str(), error.line, error.column), ("spec.html", 2, 3));

    assert_eq!(result.usage.snippets, 4);
    assert!(result.usage.total.commands.contains("toggle"));
    assert!(result.usage.files["about.html"].blocks.contains("repeat"));
    assert!(!result.usage.files.contains_key("spec.html"));
}

#[test]
fn stop_at_first_error() {
    let snippets = vec![
        ExtractedSnippet::new("hyperscript", "%%% ???"),
        ExtractedSnippet::new("hyperscript", "toggle .a"),
    ];
    let options = CompileOptions::default().with_continue_on_error(false);
    let result = BatchCompiler::new(options).compile(&snippets);
    assert_eq!(result.stats.error_count, 1);
    assert!(result.compiled.is_empty());
    assert_eq!(result.stats.total_snippets, 2);
}

#[test]
fn snippets_load_from_json() {
    let json = r#"[
        {"domain": "hyperscript", "code": "on click toggle .a", "file": "a.html", "line": 3, "column": 5},
        {"domain": "hyperscript", "code": "クリックで.aを切り替え", "language": "ja", "elementId": "btn"}
    ]"#;
    let snippets = ExtractedSnippet::list_from_json(json).unwrap();
    assert_eq!(snippets[0].location(), "a.html:3:5");
    assert_eq!(snippets[1].element_id.as_deref(), Some("btn"));
    let result = BatchCompiler::new(CompileOptions::default()).compile(&snippets);
    assert_eq!(result.stats.compiled_count, 2, "{:?}", result.errors);
    assert!(ExtractedSnippet::list_from_json("{}").is_err());
}

// =============================================================================
// Bundle
// =============================================================================

#[test]
fn bundle_registers_every_handler() {
    let result = BatchCompiler::new(CompileOptions::default()).compile(&page());
    let out = bundle(&result.compiled, &BundleOptions::default());
    for compiled in &result.compiled {
        let id = &compiled.result.metadata.handler_id;
        assert!(out.contains(&format!("function {id}(event)")), "{id}");
        assert!(out.contains(&format!("bind: {id}_bind")), "{id}");
    }
    assert!(out.contains("// ja/index.html:4:12"));
    assert!(out.starts_with("import * as runtime from '@hyperfixi/runtime';"));
}

#[test]
fn bundle_formats() {
    let result = BatchCompiler::new(CompileOptions::default()).compile(&page());
    let cjs = bundle(&result.compiled, &BundleOptions::default().with_format(OutputMode::Cjs));
    assert!(cjs.contains("require('@hyperfixi/runtime')"));
    assert!(!cjs.contains("import "));
    let iife = bundle(&result.compiled, &BundleOptions::default().with_format(OutputMode::Iife));
    assert!(iife.trim_end().ends_with("})(globalThis.hyperfixi);"));
}

#[test]
fn empty_bundle_is_still_a_module() {
    let out = bundle(&[], &BundleOptions::default());
    assert!(out.contains("const handlers = {"));
    assert!(out.ends_with("export default handlers;\n"));
}
