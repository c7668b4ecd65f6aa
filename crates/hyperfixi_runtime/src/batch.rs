//! Batch compilation of extracted snippets.

use std::collections::BTreeMap;

use hyperfixi_foundation::{Error, ErrorKind, Result};
use serde::{Deserialize, Serialize};

use crate::compiler::{AotCompiler, CompileResult, HandlerIdRegistry};
use crate::options::CompileOptions;
use crate::usage::UsageReport;

/// One piece of source found in a document by an external scanner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedSnippet {
    /// Which DSL the snippet belongs to (`hyperscript`, ...).
    pub domain: String,
    /// Source text.
    pub code: String,
    /// Language code; empty means the batch default.
    pub language: String,
    /// Document path.
    pub file: String,
    /// 1-based line of the snippet.
    pub line: u32,
    /// 1-based column of the snippet.
    pub column: u32,
    /// `id` of the element carrying the snippet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
}

impl ExtractedSnippet {
    /// A snippet with only code set.
    #[must_use]
    pub fn new(domain: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            code: code.into(),
            line: 1,
            column: 1,
            ..Self::default()
        }
    }

    /// Sets the location.
    #[must_use]
    pub fn at(mut self, file: impl Into<String>, line: u32, column: u32) -> Self {
        self.file = file.into();
        self.line = line;
        self.column = column;
        self
    }

    /// Sets the language.
    #[must_use]
    pub fn in_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Reads a JSON array of snippets.
    ///
    /// # Errors
    ///
    /// Returns a `Json` error if the text is not such an array.
    pub fn list_from_json(text: &str) -> Result<Vec<Self>> {
        serde_json::from_str(text).map_err(|e| Error::new(ErrorKind::Json(e.to_string())))
    }

    /// `file:line:column`.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A snippet that compiled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledSnippet {
    /// The input.
    pub snippet: ExtractedSnippet,
    /// The compilation outcome.
    pub result: CompileResult,
}

/// A snippet that did not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchError {
    /// Snippet domain.
    pub domain: String,
    /// Document path.
    pub file: String,
    /// Snippet line.
    pub line: u32,
    /// Snippet column.
    pub column: u32,
    /// What went wrong.
    pub message: String,
}

/// Counts for a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStats {
    /// Snippets submitted.
    pub total_snippets: usize,
    /// Snippets compiled.
    pub compiled_count: usize,
    /// Snippets that failed.
    pub error_count: usize,
    /// Snippets submitted per domain.
    pub domain_breakdown: BTreeMap<String, usize>,
}

/// Everything a batch produced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    /// Successful compilations, in input order.
    pub compiled: Vec<CompiledSnippet>,
    /// Failures, in input order.
    pub errors: Vec<BatchError>,
    /// Counts.
    pub stats: BatchStats,
    /// Features used by the compiled snippets.
    pub usage: UsageReport,
}

/// Compiles many snippets with one handler id registry.
#[derive(Debug, Default)]
pub struct BatchCompiler {
    compiler: AotCompiler,
    options: CompileOptions,
}

impl BatchCompiler {
    /// Creates a batch compiler with the default compiler.
    #[must_use]
    pub fn new(options: CompileOptions) -> Self {
        Self::with_compiler(AotCompiler::new(), options)
    }

    /// Creates a batch compiler around a configured compiler.
    #[must_use]
    pub const fn with_compiler(compiler: AotCompiler, options: CompileOptions) -> Self {
        Self { compiler, options }
    }

    /// The compiler.
    #[must_use]
    pub const fn compiler(&self) -> &AotCompiler {
        &self.compiler
    }

    /// The default options.
    #[must_use]
    pub const fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compiles every snippet. With `continue_on_error` off, stops at the
    /// first failure.
    #[must_use]
    pub fn compile(&self, snippets: &[ExtractedSnippet]) -> BatchResult {
        let mut registry = HandlerIdRegistry::new();
        let mut batch = BatchResult::default();
        batch.stats.total_snippets = snippets.len();
        for snippet in snippets {
            *batch
                .stats
                .domain_breakdown
                .entry(snippet.domain.clone())
                .or_default() += 1;
        }

        for snippet in snippets {
            let options = if snippet.language.is_empty() || snippet.language == self.options.language {
                None
            } else {
                Some(self.options.clone().with_language(&snippet.language))
            };
            let options = options.as_ref().unwrap_or(&self.options);
            let result = self.compiler.compile(&snippet.code, options, &mut registry);

            if result.success {
                batch.usage.record(&snippet.file, &result.usage);
                batch.compiled.push(CompiledSnippet {
                    snippet: snippet.clone(),
                    result,
                });
                continue;
            }

            tracing::warn!(
                domain = %snippet.domain,
                location = %snippet.location(),
                "snippet failed to compile"
            );
            batch.errors.push(BatchError {
                domain: snippet.domain.clone(),
                file: snippet.file.clone(),
                line: snippet.line,
                column: snippet.column,
                message: result.errors.join("; "),
            });
            if !self.options.continue_on_error {
                break;
            }
        }

        batch.stats.compiled_count = batch.compiled.len();
        batch.stats.error_count = batch.errors.len();
        tracing::info!(
            total = batch.stats.total_snippets,
            compiled = batch.stats.compiled_count,
            errors = batch.stats.error_count,
            "batch compiled"
        );
        batch
    }
}
