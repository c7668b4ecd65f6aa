//! Ahead-of-time compilation of hyperfixi programs to JavaScript.
//!
//! This crate provides:
//! - [`AstNode`] - The compilation AST and its JSON interchange form
//! - [`AstBuilder`] - Semantic nodes, explicit syntax, and JSON to AST
//! - [`Analyzer`] - One-pass static analysis
//! - [`Optimizer`] - Pluggable optimization passes
//! - [`CodeGenerator`] - Handler and binding emission
//!
//! # Example
//!
//! ```
//! use hyperfixi_compiler::{Analyzer, AstBuilder, CodeGenerator, Optimizer, handler_id_base};
//!
//! let ast = AstBuilder::new().build_explicit("[toggle patient:.active]").unwrap();
//! let analysis = Analyzer::analyze(&ast);
//! let optimized = Optimizer::new(2).optimize(ast, &analysis);
//! let analysis = Analyzer::analyze(&optimized.root);
//! let id = handler_id_base(&optimized.root);
//! let code = CodeGenerator::default().generate(&optimized.root, &analysis, &id).unwrap();
//! assert!(code.code.contains("classList.toggle('active')"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analyzer;
pub mod ast;
pub mod builder;
pub mod codegen;
pub mod expression;
pub mod optimizer;
pub mod visitor;

pub use analyzer::{AnalysisResult, Analyzer, ControlFlow, Dependencies, SelectorInfo};
pub use ast::{AstNode, VarScope};
pub use builder::{AstBuilder, DEFAULT_EVENT, normalize};
pub use codegen::{
    CodeGenerator, CodegenOptions, CodegenTarget, GeneratedCode, GeneratedHandler, OutputMode,
    handler_id_base, sanitize_identifier,
};
pub use expression::ExpressionParser;
pub use hyperfixi_foundation::{Error, ErrorKind, Result};
pub use optimizer::{OptimizationPass, OptimizedAst, Optimizer};
