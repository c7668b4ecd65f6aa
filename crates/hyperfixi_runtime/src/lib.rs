//! Compilation driver, REPL, and CLI for hyperfixi.
//!
//! This crate provides:
//! - [`AotCompiler`] - The compile entry point and its parser fallback chain
//! - [`BatchCompiler`] - Many snippets, one handler id space
//! - [`bundle()`] - One module from a batch
//! - [`UsageReport`] - Feature usage per file and overall
//! - [`Repl`] - Interactive compile and translate loop
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use hyperfixi_runtime::{AotCompiler, CompileOptions};
//!
//! let options = CompileOptions::default().with_language("ja");
//! let result = AotCompiler::new().compile_one("クリック で .active を 切り替え", &options);
//! assert!(result.success);
//! assert!(result.code.unwrap().contains("classList.toggle('active')"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod bundle;
pub mod cli;
pub mod compiler;
pub mod editor;
pub mod fallback;
pub mod logging;
pub mod options;
pub mod repl;
pub mod usage;

pub use batch::{BatchCompiler, BatchError, BatchResult, BatchStats, CompiledSnippet, ExtractedSnippet};
pub use bundle::{BundleOptions, bundle};
pub use compiler::{
    AotCompiler, CompileMetadata, CompileResult, HandlerIdRegistry, ParserUsed, TraditionalParser,
};
pub use fallback::RegexRecognizer;
pub use hyperfixi_foundation::{Error, ErrorKind, Result};
pub use options::{CompileOptions, MAX_OPTIMIZATION_LEVEL};
pub use repl::{Outcome, Repl};
pub use usage::{Usage, UsageReport};
