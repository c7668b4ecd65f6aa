//! Compilation options.

use hyperfixi_compiler::CodegenOptions;
use hyperfixi_semantic::DEFAULT_CONFIDENCE_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Highest optimization level.
pub const MAX_OPTIMIZATION_LEVEL: u8 = 2;

/// Options for one compilation or a batch.
///
/// Deserializes from camelCase JSON; missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileOptions {
    /// Source language code.
    pub language: String,
    /// Minimum semantic match confidence.
    pub confidence_threshold: f64,
    /// 0 (none), 1 (folding and caching), or 2 (all passes).
    pub optimization_level: u8,
    /// Output options.
    pub codegen: CodegenOptions,
    /// Keep compiling a batch after a snippet fails.
    pub continue_on_error: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            optimization_level: MAX_OPTIMIZATION_LEVEL,
            codegen: CodegenOptions::default(),
            continue_on_error: true,
        }
    }
}

impl CompileOptions {
    /// Sets the source language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the confidence threshold.
    #[must_use]
    pub const fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Sets the optimization level, clamped to 0..=2.
    #[must_use]
    pub fn with_optimization_level(mut self, level: u8) -> Self {
        self.optimization_level = level.min(MAX_OPTIMIZATION_LEVEL);
        self
    }

    /// Sets the output options.
    #[must_use]
    pub fn with_codegen(mut self, codegen: CodegenOptions) -> Self {
        self.codegen = codegen;
        self
    }

    /// Sets the batch error policy.
    #[must_use]
    pub const fn with_continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }
}
