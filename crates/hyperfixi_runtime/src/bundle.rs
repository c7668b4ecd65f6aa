//! Combined output for a batch.
//!
//! Every compiled snippet lands in one module. Generated code calls helpers
//! as `_rt.<name>`, so the module binds exactly the helpers the batch uses
//! onto a local `_rt` object and exports a table of handlers.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use hyperfixi_compiler::codegen::{DEFAULT_RUNTIME_IMPORT, js_string};
use hyperfixi_compiler::{CodegenOptions, OutputMode};
use serde::{Deserialize, Serialize};

use crate::batch::CompiledSnippet;

/// Global the IIFE form reads the runtime from and writes handlers to.
pub const GLOBAL_RUNTIME: &str = "hyperfixi";

/// How to lay out the combined module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BundleOptions {
    /// Module format.
    pub format: OutputMode,
    /// Module the runtime is imported from.
    pub runtime_import: String,
    /// Emit a `// file:line:column` comment above each snippet.
    pub source_comments: bool,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            format: OutputMode::Esm,
            runtime_import: DEFAULT_RUNTIME_IMPORT.to_string(),
            source_comments: true,
        }
    }
}

impl BundleOptions {
    /// Takes format and import from code generation options. Comments
    /// follow `minify`.
    #[must_use]
    pub fn from_codegen(options: &CodegenOptions) -> Self {
        Self {
            format: options.mode,
            runtime_import: options.runtime_import.clone(),
            source_comments: !options.minify || options.preserve_comments,
        }
    }

    /// Sets the format.
    #[must_use]
    pub const fn with_format(mut self, format: OutputMode) -> Self {
        self.format = format;
        self
    }

    /// Turns location comments on or off.
    #[must_use]
    pub const fn with_source_comments(mut self, enabled: bool) -> Self {
        self.source_comments = enabled;
        self
    }
}

/// Builds the combined module.
#[must_use]
pub fn bundle(compiled: &[CompiledSnippet], options: &BundleOptions) -> String {
    let helpers: BTreeSet<&str> = compiled
        .iter()
        .flat_map(|c| c.result.metadata.runtime_helpers.iter().map(String::as_str))
        .collect();

    let mut by_domain: BTreeMap<&str, Vec<&CompiledSnippet>> = BTreeMap::new();
    for snippet in compiled {
        by_domain.entry(snippet.snippet.domain.as_str()).or_default().push(snippet);
    }

    let mut body = String::new();
    let _ = writeln!(body, "const _rt = {{");
    for helper in &helpers {
        let _ = writeln!(body, "  {helper}: runtime.{helper},");
    }
    let _ = writeln!(body, "}};");

    for (domain, snippets) in &by_domain {
        let _ = writeln!(body, "\n// {domain}");
        for compiled in snippets {
            let Some(code) = &compiled.result.code else {
                continue;
            };
            if options.source_comments {
                let _ = writeln!(body, "// {}", compiled.snippet.location());
            }
            let _ = writeln!(body, "{code}\n");
        }
    }

    let _ = writeln!(body, "const handlers = {{");
    for compiled in compiled {
        for handler in &compiled.result.handlers {
            let _ = writeln!(
                body,
                "  {id}: {{ event: {event}, domain: {domain}, handler: {id}, bind: {id}_bind }},",
                id = handler.id,
                event = js_string(&handler.event),
                domain = js_string(&compiled.snippet.domain),
            );
        }
    }
    let _ = writeln!(body, "}};");

    let import = js_string(&options.runtime_import);
    match options.format {
        OutputMode::Esm => format!(
            "import * as runtime from {import};\n\n{body}\nexport {{ handlers }};\nexport default handlers;\n"
        ),
        OutputMode::Cjs => format!(
            "'use strict';\n\nconst runtime = require({import});\n\n{body}\nmodule.exports = {{ handlers }};\n"
        ),
        OutputMode::Iife => {
            let mut out = String::from("(function (runtime) {\n  'use strict';\n\n");
            for line in body.lines() {
                if line.is_empty() {
                    out.push('\n');
                } else {
                    let _ = writeln!(out, "  {line}");
                }
            }
            let _ = write!(
                out,
                "\n  runtime.handlers = Object.assign(runtime.handlers || {{}}, handlers);\n}})(globalThis.{GLOBAL_RUNTIME});\n"
            );
            out
        }
    }
}
