//! Integration tests for Layer 3: Compiler
//!
//! Tests the pipeline from semantic nodes through analysis, optimization,
//! and JavaScript generation.

mod codegen;
mod optimizer;

use hyperfixi_compiler::{AstBuilder, AstNode, Analyzer, CodeGenerator, CodegenOptions, GeneratedCode, Optimizer};
use hyperfixi_semantic::SemanticParser;

/// Builds the AST for English source.
pub fn build(source: &str) -> AstNode {
    let node = SemanticParser::new().parse(source, "en").unwrap();
    AstBuilder::new().build(&node).unwrap()
}

/// Runs the whole pipeline at `level` with `options`.
pub fn compile_with(source: &str, level: u8, options: CodegenOptions) -> (GeneratedCode, Vec<String>) {
    let ast = build(source);
    let analysis = Analyzer::analyze(&ast);
    let optimized = Optimizer::new(level).optimize(ast, &analysis);
    let analysis = Analyzer::analyze(&optimized.root);
    let code = CodeGenerator::new(options)
        .generate(&optimized.root, &analysis, "_hf_test")
        .unwrap();
    (code, optimized.applied_passes)
}

/// Runs the whole pipeline with default options.
pub fn compile(source: &str) -> GeneratedCode {
    compile_with(source, 2, CodegenOptions::default()).0
}
