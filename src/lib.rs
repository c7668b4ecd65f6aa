//! hyperfixi - multilingual hyperscript front end and JavaScript compiler
//!
//! This crate re-exports all layers of the hyperfixi system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: hyperfixi_runtime    - Compile driver, batch, bundle, REPL, CLI
//! Layer 3: hyperfixi_compiler   - AST, analyzer, optimizer, code generator
//! Layer 2: hyperfixi_semantic   - Schemas, patterns, matcher, renderer
//! Layer 1: hyperfixi_i18n       - Tokenizer, keywords, morphology, locales
//! Layer 0: hyperfixi_foundation - Core types (Error, Span, Value)
//! ```

pub use hyperfixi_compiler as compiler;
pub use hyperfixi_foundation as foundation;
pub use hyperfixi_i18n as i18n;
pub use hyperfixi_runtime as runtime;
pub use hyperfixi_semantic as semantic;
