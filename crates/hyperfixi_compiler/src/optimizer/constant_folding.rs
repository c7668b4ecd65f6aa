//! Constant folding.

use hyperfixi_foundation::Value;

use super::OptimizationPass;
use crate::analyzer::AnalysisResult;
use crate::ast::AstNode;
use crate::visitor::{AstTransform, transform_children};

/// Folds operators whose operands are all literals.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstantFolding;

impl OptimizationPass for ConstantFolding {
    fn name(&self) -> &str {
        "constant-folding"
    }

    fn should_run(&self, analysis: &AnalysisResult) -> bool {
        analysis.expressions.pure > 0
    }

    fn transform(&self, ast: AstNode, _analysis: &AnalysisResult) -> AstNode {
        Folder.transform_node(ast)
    }
}

struct Folder;

impl AstTransform for Folder {
    fn transform_node(&mut self, node: AstNode) -> AstNode {
        let node = transform_children(self, node);
        let folded = match &node {
            AstNode::Binary {
                operator,
                left,
                right,
            }
            | AstNode::Logical {
                operator,
                left,
                right,
            } => match (left.as_literal(), right.as_literal()) {
                (Some(a), Some(b)) => fold_binary(operator, a, b),
                _ => None,
            },
            AstNode::Unary { operator, operand } => {
                operand.as_literal().and_then(|v| fold_unary(operator, v))
            }
            _ => None,
        };
        folded.map_or(node, AstNode::literal)
    }
}

/// Applies a binary operator to two literal values.
///
/// Returns `None` when the operator does not apply to the operand types,
/// and for division or modulo by zero, which must fail at runtime.
#[must_use]
pub fn fold_binary(operator: &str, a: &Value, b: &Value) -> Option<Value> {
    use Value::{Bool, Number};

    match (operator, a, b) {
        ("+", Number(x), Number(y)) => Some(Number(x + y)),
        ("-", Number(x), Number(y)) => Some(Number(x - y)),
        ("*", Number(x), Number(y)) => Some(Number(x * y)),
        ("/" | "%", Number(_), Number(y)) if *y == 0.0 => None,
        ("/", Number(x), Number(y)) => Some(Number(x / y)),
        ("%", Number(x), Number(y)) => Some(Number(x % y)),
        ("&", a, b) => Some(Value::String(a.concat_text() + &b.concat_text())),
        ("and" | "&&", Bool(x), Bool(y)) => Some(Bool(*x && *y)),
        ("or" | "||", Bool(x), Bool(y)) => Some(Bool(*x || *y)),
        ("is" | "==" | "===", a, b) => Some(Bool(a == b)),
        ("is not" | "!=" | "!==", a, b) => Some(Bool(a != b)),
        ("<", Number(x), Number(y)) => Some(Bool(x < y)),
        (">", Number(x), Number(y)) => Some(Bool(x > y)),
        ("<=", Number(x), Number(y)) => Some(Bool(x <= y)),
        (">=", Number(x), Number(y)) => Some(Bool(x >= y)),
        _ => None,
    }
}

fn fold_unary(operator: &str, value: &Value) -> Option<Value> {
    match (operator, value) {
        ("not" | "!", Value::Bool(b)) => Some(Value::Bool(!b)),
        ("-", Value::Number(n)) => Some(Value::Number(-n)),
        _ => None,
    }
}
