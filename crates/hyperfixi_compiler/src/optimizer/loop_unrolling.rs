//! Loop unrolling.

use super::OptimizationPass;
use crate::analyzer::AnalysisResult;
use crate::ast::AstNode;
use crate::visitor::{AstTransform, any_node, transform_children};

/// Largest count unrolled.
pub const MAX_UNROLL_COUNT: usize = 5;

/// Largest body unrolled.
pub const MAX_UNROLL_BODY: usize = 3;

/// Implicit loop counter. A body that reads it cannot be unrolled.
pub const LOOP_INDEX: &str = "index";

/// Replaces small counted `repeat` loops with a flat sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoopUnrolling;

impl OptimizationPass for LoopUnrolling {
    fn name(&self) -> &str {
        "loop-unrolling"
    }

    fn should_run(&self, analysis: &AnalysisResult) -> bool {
        analysis.control_flow.has_loops
    }

    fn transform(&self, ast: AstNode, _analysis: &AnalysisResult) -> AstNode {
        Unroll.transform_node(ast)
    }
}

struct Unroll;

impl AstTransform for Unroll {
    fn transform_node(&mut self, node: AstNode) -> AstNode {
        match transform_children(self, node) {
            AstNode::Repeat { count, body } => match unroll_count(count.as_deref(), &body) {
                Some(n) => AstNode::Sequence {
                    body: body.iter().cloned().cycle().take(n * body.len()).collect(),
                    unrolled: true,
                },
                None => AstNode::Repeat { count, body },
            },
            other => other,
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn unroll_count(count: Option<&AstNode>, body: &[AstNode]) -> Option<usize> {
    let n = count?.as_literal()?.as_number()?;
    if n.fract() != 0.0 || !(0.0..=MAX_UNROLL_COUNT as f64).contains(&n) {
        return None;
    }
    if body.len() > MAX_UNROLL_BODY || body.iter().any(reads_index) {
        return None;
    }
    Some(n as usize)
}

fn reads_index(node: &AstNode) -> bool {
    any_node(node, &|n| match n {
        AstNode::Variable { name, .. } | AstNode::Identifier { name } => name == LOOP_INDEX,
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn repeat(count: f64, body: Vec<AstNode>) -> AstNode {
        AstNode::Repeat {
            count: Some(Box::new(AstNode::number(count))),
            body,
        }
    }

    fn run(ast: AstNode) -> AstNode {
        LoopUnrolling.transform(ast, &AnalysisResult::default())
    }

    #[test]
    fn unrolls_inside_handler() {
        let ast = AstNode::event("click", vec![repeat(3.0, vec![AstNode::command("increment")])]);
        let out = run(ast);
        assert_eq!(
            out.body()[0],
            AstNode::Sequence {
                body: vec![AstNode::command("increment"); 3],
                unrolled: true,
            }
        );
    }

    #[test]
    fn keeps_loops_reading_the_index() {
        let body = vec![AstNode::command("log").with_role("patient", AstNode::variable(":index"))];
        let node = repeat(2.0, body);
        assert_eq!(run(node.clone()), node);
    }

    #[test]
    fn keeps_forever_and_fractional_counts() {
        let forever = AstNode::Repeat {
            count: None,
            body: vec![AstNode::command("log")],
        };
        assert_eq!(run(forever.clone()), forever);
        let half = repeat(2.5, vec![AstNode::command("log")]);
        assert_eq!(run(half.clone()), half);
    }

    proptest! {
        #[test]
        fn unrolls_exactly_within_bounds(count in 0u32..9, len in 1usize..6) {
            let body: Vec<AstNode> = (0..len).map(|i| AstNode::command(format!("c{i}"))).collect();
            let out = run(repeat(f64::from(count), body.clone()));
            let fits = count as usize <= MAX_UNROLL_COUNT && len <= MAX_UNROLL_BODY;
            match out {
                AstNode::Sequence { body: items, unrolled: true } => {
                    prop_assert!(fits);
                    prop_assert_eq!(items.len(), count as usize * len);
                    for chunk in items.chunks(len) {
                        prop_assert_eq!(chunk, body.as_slice());
                    }
                }
                AstNode::Repeat { .. } => prop_assert!(!fits),
                other => prop_assert!(false, "unexpected {other:?}"),
            }
        }
    }
}
