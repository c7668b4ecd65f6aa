//! Dead code elimination.

use super::OptimizationPass;
use crate::analyzer::AnalysisResult;
use crate::ast::AstNode;
use crate::visitor::AstTransform;

/// Drops statements after an unconditional terminator.
///
/// Each body is cut independently, so a `halt` inside an `if` branch only
/// shortens that branch.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeadCodeElimination;

impl OptimizationPass for DeadCodeElimination {
    fn name(&self) -> &str {
        "dead-code-elimination"
    }

    fn should_run(&self, analysis: &AnalysisResult) -> bool {
        analysis.control_flow.can_throw
    }

    fn transform(&self, ast: AstNode, _analysis: &AnalysisResult) -> AstNode {
        Truncate.transform_node(ast)
    }
}

struct Truncate;

impl AstTransform for Truncate {
    fn transform_body(&mut self, body: Vec<AstNode>) -> Vec<AstNode> {
        let mut out = Vec::with_capacity(body.len());
        for node in body {
            let stop = node.is_terminator();
            out.push(self.transform_node(node));
            if stop {
                break;
            }
        }
        out
    }
}
