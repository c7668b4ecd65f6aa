//! Optimization pipeline.
//!
//! Passes run in a fixed order, each gated by [`OptimizationPass::should_run`]
//! on the analysis of the input AST. The level picks which built-in passes
//! take part:
//!
//! | Level | Passes |
//! |---|---|
//! | 0 | none |
//! | 1 | constant folding, selector caching |
//! | 2 | all four |
//!
//! Custom passes appended with [`Optimizer::register`] run after the
//! built-ins at every level above 0.

mod constant_folding;
mod dead_code;
mod loop_unrolling;
mod selector_caching;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analyzer::AnalysisResult;
use crate::ast::AstNode;

pub use constant_folding::{ConstantFolding, fold_binary};
pub use dead_code::DeadCodeElimination;
pub use loop_unrolling::{LOOP_INDEX, LoopUnrolling, MAX_UNROLL_BODY, MAX_UNROLL_COUNT};
pub use selector_caching::{CACHE_KEY_PREFIX, MAX_CACHE_KEY_LEN, SelectorCaching, cache_key};

/// A rewrite over the AST.
///
/// Passes must be total: a node the pass does not understand is returned
/// unchanged.
pub trait OptimizationPass: fmt::Debug + Send + Sync {
    /// Name recorded in the applied-pass list.
    fn name(&self) -> &str;

    /// Returns true if the pass has anything to do.
    fn should_run(&self, analysis: &AnalysisResult) -> bool;

    /// Rewrites the AST.
    fn transform(&self, ast: AstNode, analysis: &AnalysisResult) -> AstNode;
}

/// An optimized AST and the passes that ran on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedAst {
    /// The rewritten tree.
    pub root: AstNode,
    /// Names of the passes applied, in order.
    pub applied_passes: Vec<String>,
}

/// The ordered pass list.
#[derive(Debug)]
pub struct Optimizer {
    level: u8,
    passes: Vec<Box<dyn OptimizationPass>>,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Optimizer {
    /// Creates the built-in pipeline for a level (clamped to 0..=2).
    #[must_use]
    pub fn new(level: u8) -> Self {
        let level = level.min(2);
        let mut passes: Vec<Box<dyn OptimizationPass>> = Vec::new();
        if level >= 1 {
            passes.push(Box::new(ConstantFolding));
            passes.push(Box::new(SelectorCaching));
        }
        if level >= 2 {
            passes.push(Box::new(DeadCodeElimination));
            passes.push(Box::new(LoopUnrolling));
        }
        Self { level, passes }
    }

    /// The optimization level.
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Appends a custom pass.
    pub fn register(&mut self, pass: Box<dyn OptimizationPass>) {
        if self.level > 0 {
            self.passes.push(pass);
        }
    }

    /// Names of the passes in order.
    #[must_use]
    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Runs every pass whose gate opens.
    #[must_use]
    pub fn optimize(&self, ast: AstNode, analysis: &AnalysisResult) -> OptimizedAst {
        let mut root = ast;
        let mut applied_passes = Vec::new();
        for pass in &self.passes {
            if !pass.should_run(analysis) {
                tracing::trace!(pass = pass.name(), "pass skipped");
                continue;
            }
            root = pass.transform(root, analysis);
            tracing::debug!(pass = pass.name(), "pass applied");
            applied_passes.push(pass.name().to_string());
        }
        OptimizedAst {
            root,
            applied_passes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;

    fn body_names(ast: &AstNode) -> Vec<&str> {
        ast.body().iter().filter_map(AstNode::command_name).collect()
    }

    #[test]
    fn levels_select_passes() {
        assert!(Optimizer::new(0).pass_names().is_empty());
        assert_eq!(
            Optimizer::new(1).pass_names(),
            vec!["constant-folding", "selector-caching"]
        );
        assert_eq!(Optimizer::new(9).pass_names().len(), 4);
    }

    #[test]
    fn terminator_truncates_body() {
        let ast = AstNode::event(
            "click",
            vec![
                AstNode::command("toggle").with_role("patient", AstNode::selector(".a")),
                AstNode::command("halt"),
                AstNode::command("log").with_role("patient", AstNode::string("never")),
            ],
        );
        let analysis = Analyzer::analyze(&ast);
        let out = Optimizer::new(2).optimize(ast, &analysis);
        assert_eq!(body_names(&out.root), vec!["toggle", "halt"]);
        assert!(out.applied_passes.contains(&"dead-code-elimination".to_string()));
    }

    #[derive(Debug)]
    struct Marker;

    impl OptimizationPass for Marker {
        fn name(&self) -> &str {
            "marker"
        }

        fn should_run(&self, _analysis: &AnalysisResult) -> bool {
            true
        }

        fn transform(&self, ast: AstNode, _analysis: &AnalysisResult) -> AstNode {
            ast
        }
    }

    #[test]
    fn custom_pass_is_recorded() {
        let ast = AstNode::event("click", vec![AstNode::command("toggle")]);
        let analysis = Analyzer::analyze(&ast);
        let mut optimizer = Optimizer::new(1);
        optimizer.register(Box::new(Marker));
        let out = optimizer.optimize(ast, &analysis);
        assert_eq!(out.applied_passes, vec!["marker"]);

        let mut off = Optimizer::new(0);
        off.register(Box::new(Marker));
        assert!(off.pass_names().is_empty());
    }
}
