//! Command-line front end for the `hyperfixi` binary.

use std::io;
use std::path::PathBuf;

use hyperfixi_compiler::{CodegenTarget, OutputMode};
use thiserror::Error;

use crate::batch::{BatchCompiler, ExtractedSnippet};
use crate::bundle::{BundleOptions, bundle};
use crate::compiler::AotCompiler;
use crate::options::{CompileOptions, MAX_OPTIMIZATION_LEVEL};
use crate::repl::Repl;

/// CLI failures.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad arguments.
    #[error("{0}")]
    Usage(String),
    /// A pipeline error.
    #[error(transparent)]
    Hyperfixi(#[from] hyperfixi_foundation::Error),
    /// An input file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// The file.
        path: PathBuf,
        /// Why.
        #[source]
        source: io::Error,
    },
    /// Writing output failed.
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
    /// Source did not compile.
    #[error("{0}")]
    Compile(String),
}

/// What to do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Action {
    /// Compile the text.
    Compile(String),
    /// Render the text in another language.
    Translate {
        /// Source language; `--lang` when absent.
        from: Option<String>,
        /// Target language.
        to: String,
        /// Source text.
        text: String,
    },
    /// Compile a JSON list of snippets into one module.
    Batch(PathBuf),
    /// Start the REPL.
    #[default]
    Repl,
    /// Print usage.
    Help,
    /// Print the version.
    Version,
}

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CliConfig {
    /// The subcommand.
    pub action: Action,
    /// Compilation options from flags.
    pub options: CompileOptions,
    /// Print JSON results.
    pub json: bool,
    /// Number of `-v` flags.
    pub verbosity: u8,
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, CliError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("{flag} requires a value")))
}

/// Parses arguments, program name excluded.
///
/// # Errors
///
/// Returns `Usage` for unknown flags, missing values, or missing text.
pub fn parse_args(args: &[String]) -> Result<CliConfig, CliError> {
    let mut config = CliConfig::default();
    let mut from = None;
    let mut to = None;
    let mut positional = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => config.action = Action::Help,
            "-V" | "--version" => config.action = Action::Version,
            "--json" => config.json = true,
            "--minify" => config.options.codegen.minify = true,
            "--lang" | "-l" => config.options.language = value(args, &mut i, arg)?.to_string(),
            "--from" => from = Some(value(args, &mut i, arg)?.to_string()),
            "--to" => to = Some(value(args, &mut i, arg)?.to_string()),
            "--format" => {
                let text = value(args, &mut i, arg)?;
                config.options.codegen.mode = OutputMode::parse(text)
                    .ok_or_else(|| CliError::Usage(format!("unknown format: {text}")))?;
            }
            "--target" => {
                config.options.codegen.target = match value(args, &mut i, arg)? {
                    "es2017" => CodegenTarget::Es2017,
                    "es2020" => CodegenTarget::Es2020,
                    other => return Err(CliError::Usage(format!("unknown target: {other}"))),
                };
            }
            "--threshold" => {
                let text = value(args, &mut i, arg)?;
                config.options.confidence_threshold = text
                    .parse()
                    .map_err(|_| CliError::Usage(format!("invalid --threshold value: {text}")))?;
            }
            _ if arg.starts_with("-O") => {
                let level = arg[2..]
                    .parse::<u8>()
                    .ok()
                    .filter(|l| *l <= MAX_OPTIMIZATION_LEVEL)
                    .ok_or_else(|| CliError::Usage(format!("invalid optimization level: {arg}")))?;
                config.options.optimization_level = level;
            }
            _ if arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v') => {
                let count = u8::try_from(arg.len() - 1).unwrap_or(u8::MAX);
                config.verbosity = config.verbosity.saturating_add(count);
            }
            _ if arg.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option: {arg}")));
            }
            _ => positional.push(arg.to_string()),
        }
        i += 1;
    }

    if matches!(config.action, Action::Help | Action::Version) {
        return Ok(config);
    }
    let mut positional = positional.into_iter();
    let text = |rest: std::vec::IntoIter<String>, command: &str| {
        let text = rest.collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            Err(CliError::Usage(format!("{command} needs source text")))
        } else {
            Ok(text)
        }
    };
    config.action = match positional.next().as_deref() {
        None | Some("repl") => Action::Repl,
        Some("compile") => Action::Compile(text(positional, "compile")?),
        Some("translate") => Action::Translate {
            from,
            to: to.ok_or_else(|| CliError::Usage("translate needs --to".to_string()))?,
            text: text(positional, "translate")?,
        },
        Some("batch") => Action::Batch(
            positional
                .next()
                .map(PathBuf::from)
                .ok_or_else(|| CliError::Usage("batch needs a snippets file".to_string()))?,
        ),
        Some(other) => return Err(CliError::Usage(format!("unknown command: {other}"))),
    };
    Ok(config)
}

/// Runs a parsed command, writing results to `out`.
///
/// # Errors
///
/// Returns the first failure; a batch with failed snippets is an error
/// after its output is written.
pub fn run(config: &CliConfig, out: &mut impl io::Write) -> Result<(), CliError> {
    match &config.action {
        Action::Help => write!(out, "{HELP}")?,
        Action::Version => writeln!(out, "hyperfixi {}", env!("CARGO_PKG_VERSION"))?,
        Action::Compile(text) => {
            let result = AotCompiler::new().compile_one(text, &config.options);
            if config.json {
                writeln!(out, "{}", to_json(&result)?)?;
            } else if let Some(code) = &result.code {
                writeln!(out, "{code}")?;
            }
            for warning in &result.warnings {
                tracing::warn!("{warning}");
            }
            if !result.success {
                return Err(CliError::Compile(result.errors.join("\n")));
            }
        }
        Action::Translate { from, to, text } => {
            let from = from.as_deref().unwrap_or(&config.options.language);
            let rendered = AotCompiler::new().translate(text, from, to)?;
            writeln!(out, "{rendered}")?;
        }
        Action::Batch(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            let snippets = ExtractedSnippet::list_from_json(&text)?;
            let result = BatchCompiler::new(config.options.clone()).compile(&snippets);
            if config.json {
                writeln!(out, "{}", to_json(&result)?)?;
            } else {
                let options = BundleOptions::from_codegen(&config.options.codegen);
                write!(out, "{}", bundle(&result.compiled, &options))?;
            }
            for error in &result.errors {
                tracing::error!(
                    "{}:{}:{} [{}] {}",
                    error.file,
                    error.line,
                    error.column,
                    error.domain,
                    error.message
                );
            }
            if result.stats.error_count > 0 {
                return Err(CliError::Compile(format!(
                    "{} of {} snippets failed",
                    result.stats.error_count, result.stats.total_snippets
                )));
            }
        }
        Action::Repl => {
            Repl::new()?
                .with_options(config.options.clone())
                .with_json(config.json)
                .run()?;
        }
    }
    Ok(())
}

fn to_json(value: &impl serde::Serialize) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        CliError::Hyperfixi(hyperfixi_foundation::Error::new(
            hyperfixi_foundation::ErrorKind::Json(e.to_string()),
        ))
    })
}

const HELP: &str = "\x1b[1mhyperfixi\x1b[0m - multilingual hyperscript to JavaScript compiler

\x1b[1mUSAGE:\x1b[0m
    hyperfixi [OPTIONS] [COMMAND]

\x1b[1mCOMMANDS:\x1b[0m
    compile <text>                    Compile one snippet and print the code
    translate --to <L> <text>         Render a snippet in another language
    batch <snippets.json>             Compile extracted snippets into one module
    repl                              Start the interactive REPL (default)

\x1b[1mOPTIONS:\x1b[0m
    -l, --lang <L>        Source language (en es it ja ko tr ar)
        --from <L>        Source language for translate
        --to <L>          Target language for translate
    -O<n>                 Optimization level 0, 1, or 2 (default 2)
        --format <F>      esm, cjs, or iife (default esm)
        --target <T>      es2017 or es2020 (default es2020)
        --minify          Minify generated code
        --threshold <N>   Semantic confidence threshold (default 0.7)
        --json            Print results as JSON
    -v, -vv, -vvv         More logging (HYPERFIXI_LOG overrides)
    -h, --help            Print help information
    -V, --version         Print version information

\x1b[1mEXAMPLES:\x1b[0m
    hyperfixi compile 'on click toggle .active'
    hyperfixi --lang ja compile 'クリック で .active を 切り替え'
    hyperfixi translate --from en --to ko 'toggle .active on #button'
    hyperfixi --format cjs batch snippets.json > handlers.js
";

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn compile_with_flags() {
        let config = parse_args(&args("--lang es -O1 --format iife -vv compile alternar .active")).unwrap();
        assert_eq!(config.action, Action::Compile("alternar .active".to_string()));
        assert_eq!(config.options.language, "es");
        assert_eq!(config.options.optimization_level, 1);
        assert_eq!(config.options.codegen.mode, OutputMode::Iife);
        assert_eq!(config.verbosity, 2);
    }

    #[test]
    fn translate_needs_target() {
        assert!(matches!(
            parse_args(&args("translate toggle .a")),
            Err(CliError::Usage(_))
        ));
        let config = parse_args(&args("translate --from en --to ja toggle .a")).unwrap();
        assert_eq!(
            config.action,
            Action::Translate {
                from: Some("en".to_string()),
                to: "ja".to_string(),
                text: "toggle .a".to_string(),
            }
        );
    }

    #[test]
    fn defaults_and_errors() {
        assert_eq!(parse_args(&[]).unwrap().action, Action::Repl);
        assert_eq!(parse_args(&args("--help compile")).unwrap().action, Action::Help);
        assert!(parse_args(&args("-O7 compile x")).is_err());
        assert!(parse_args(&args("--bogus")).is_err());
        assert!(parse_args(&args("compile")).is_err());
        assert!(parse_args(&args("batch")).is_err());
    }

    #[test]
    fn run_compile() {
        let config = parse_args(&args("compile on click toggle .active")).unwrap();
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("function _hf_click_toggle_active(event) {"));
    }

    #[test]
    fn run_compile_json() {
        let config = parse_args(&args("--json compile toggle .active")).unwrap();
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["metadata"]["parserUsed"], "semantic");
    }

    #[test]
    fn run_translate() {
        let config = parse_args(&args("translate --to es toggle .active")).unwrap();
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains(".active"));
    }

    #[test]
    fn missing_batch_file() {
        let config = parse_args(&args("batch /nonexistent/snippets.json")).unwrap();
        let err = run(&config, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}
