//! AST traversal.
//!
//! This module provides two traits:
//! - [`AstVisitor`] - For read-only traversal of ASTs
//! - [`AstTransform`] - For rewriting ASTs bottom-up
//!
//! # Example
//!
//! ```
//! use hyperfixi_compiler::ast::AstNode;
//! use hyperfixi_compiler::visitor::{AstVisitor, walk_ast};
//!
//! struct SelectorCounter(usize);
//!
//! impl AstVisitor for SelectorCounter {
//!     fn enter_node(&mut self, node: &AstNode, _depth: usize) {
//!         if matches!(node, AstNode::Selector { .. }) {
//!             self.0 += 1;
//!         }
//!     }
//! }
//!
//! let ast = AstNode::command("toggle").with_role("patient", AstNode::selector(".a"));
//! let mut counter = SelectorCounter(0);
//! walk_ast(&mut counter, &ast);
//! assert_eq!(counter.0, 1);
//! ```

use crate::ast::AstNode;

// =============================================================================
// Read-Only Visitor
// =============================================================================

/// Trait for read-only AST visitors.
///
/// `depth` counts enclosing blocks (event, if, loops), not expression
/// nesting.
#[allow(unused_variables)]
pub trait AstVisitor {
    /// Called before a node's children.
    fn enter_node(&mut self, node: &AstNode, depth: usize) {}

    /// Called after a node's children.
    fn leave_node(&mut self, node: &AstNode, depth: usize) {}
}

/// Walks a node depth-first.
pub fn walk_ast<V: AstVisitor + ?Sized>(visitor: &mut V, node: &AstNode) {
    walk_at(visitor, node, 0);
}

fn walk_at<V: AstVisitor + ?Sized>(visitor: &mut V, node: &AstNode, depth: usize) {
    visitor.enter_node(node, depth);
    let inner = if opens_block(node) { depth + 1 } else { depth };
    for child in children(node) {
        walk_at(visitor, child, inner);
    }
    visitor.leave_node(node, depth);
}

/// Walks several nodes in order.
pub fn walk_all<V: AstVisitor + ?Sized>(visitor: &mut V, nodes: &[AstNode]) {
    for node in nodes {
        walk_ast(visitor, node);
    }
}

const fn opens_block(node: &AstNode) -> bool {
    matches!(
        node,
        AstNode::Event { .. }
            | AstNode::If { .. }
            | AstNode::While { .. }
            | AstNode::Foreach { .. }
            | AstNode::Repeat { .. }
    )
}

/// Direct children in source order.
#[must_use]
pub fn children(node: &AstNode) -> Vec<&AstNode> {
    match node {
        AstNode::Event { source, body, .. } => source.iter().map(AsRef::as_ref).chain(body).collect(),
        AstNode::Command { roles, .. } => roles.values().collect(),
        AstNode::If {
            condition,
            then_branch,
            else_branch,
            ..
        } => std::iter::once(condition.as_ref())
            .chain(then_branch)
            .chain(else_branch)
            .collect(),
        AstNode::While { condition, body } => {
            std::iter::once(condition.as_ref()).chain(body).collect()
        }
        AstNode::Foreach {
            collection, body, ..
        } => std::iter::once(collection.as_ref()).chain(body).collect(),
        AstNode::Repeat { count, body } => count.iter().map(AsRef::as_ref).chain(body).collect(),
        AstNode::Sequence { body, .. } => body.iter().collect(),
        AstNode::Binary { left, right, .. } | AstNode::Logical { left, right, .. } => {
            vec![left, right]
        }
        AstNode::Unary { operand, .. } => vec![operand],
        AstNode::Member { object, .. } => vec![object],
        AstNode::Index { object, index } => vec![object, index],
        AstNode::Call { callee, args } => std::iter::once(callee.as_ref()).chain(args).collect(),
        AstNode::Positional { target, .. } => target.iter().map(AsRef::as_ref).collect(),
        AstNode::Literal { .. }
        | AstNode::Identifier { .. }
        | AstNode::Selector { .. }
        | AstNode::Variable { .. } => Vec::new(),
    }
}

/// Returns true if any node in the tree satisfies `pred`.
pub fn any_node(node: &AstNode, pred: &dyn Fn(&AstNode) -> bool) -> bool {
    pred(node) || children(node).into_iter().any(|c| any_node(c, pred))
}

// =============================================================================
// Transforming Visitor
// =============================================================================

/// Trait for AST rewrites.
///
/// The default rewrites children and leaves the node itself alone.
/// Implementations usually call [`transform_children`] first and then
/// inspect the rebuilt node, which gives a bottom-up rewrite.
pub trait AstTransform {
    /// Rewrites one node.
    fn transform_node(&mut self, node: AstNode) -> AstNode {
        transform_children(self, node)
    }

    /// Rewrites a statement list. The default rewrites each statement.
    fn transform_body(&mut self, body: Vec<AstNode>) -> Vec<AstNode> {
        body.into_iter().map(|n| self.transform_node(n)).collect()
    }
}

/// Rebuilds a node with every child passed through the transform.
pub fn transform_children<T: AstTransform + ?Sized>(t: &mut T, node: AstNode) -> AstNode {
    let mut boxed = |b: Box<AstNode>| Box::new(t.transform_node(*b));
    match node {
        AstNode::Event {
            event,
            modifiers,
            source,
            body,
        } => {
            let source = source.map(&mut boxed);
            AstNode::Event {
                event,
                modifiers,
                source,
                body: t.transform_body(body),
            }
        }
        AstNode::Command { name, roles } => AstNode::Command {
            name,
            roles: roles
                .into_iter()
                .map(|(role, value)| (role, t.transform_node(value)))
                .collect(),
        },
        AstNode::If {
            condition,
            then_branch,
            else_branch,
            negated,
        } => {
            let condition = boxed(condition);
            AstNode::If {
                condition,
                then_branch: t.transform_body(then_branch),
                else_branch: t.transform_body(else_branch),
                negated,
            }
        }
        AstNode::While { condition, body } => {
            let condition = boxed(condition);
            AstNode::While {
                condition,
                body: t.transform_body(body),
            }
        }
        AstNode::Foreach {
            variable,
            collection,
            body,
        } => {
            let collection = boxed(collection);
            AstNode::Foreach {
                variable,
                collection,
                body: t.transform_body(body),
            }
        }
        AstNode::Repeat { count, body } => {
            let count = count.map(&mut boxed);
            AstNode::Repeat {
                count,
                body: t.transform_body(body),
            }
        }
        AstNode::Sequence { body, unrolled } => AstNode::Sequence {
            body: t.transform_body(body),
            unrolled,
        },
        AstNode::Binary {
            operator,
            left,
            right,
        } => {
            let left = boxed(left);
            AstNode::Binary {
                operator,
                left,
                right: boxed(right),
            }
        }
        AstNode::Logical {
            operator,
            left,
            right,
        } => {
            let left = boxed(left);
            AstNode::Logical {
                operator,
                left,
                right: boxed(right),
            }
        }
        AstNode::Unary { operator, operand } => AstNode::Unary {
            operator,
            operand: boxed(operand),
        },
        AstNode::Member { object, property } => AstNode::Member {
            object: boxed(object),
            property,
        },
        AstNode::Index { object, index } => {
            let object = boxed(object);
            AstNode::Index {
                object,
                index: boxed(index),
            }
        }
        AstNode::Call { callee, args } => {
            let callee = boxed(callee);
            AstNode::Call {
                callee,
                args: args.into_iter().map(|a| t.transform_node(a)).collect(),
            }
        }
        AstNode::Positional { position, target } => AstNode::Positional {
            position,
            target: target.map(boxed),
        },
        leaf @ (AstNode::Literal { .. }
        | AstNode::Identifier { .. }
        | AstNode::Selector { .. }
        | AstNode::Variable { .. }) => leaf,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DepthProbe(usize);

    impl AstVisitor for DepthProbe {
        fn enter_node(&mut self, _node: &AstNode, depth: usize) {
            self.0 = self.0.max(depth);
        }
    }

    #[test]
    fn depth_counts_blocks_only() {
        let inner = AstNode::Repeat {
            count: Some(Box::new(AstNode::number(2.0))),
            body: vec![AstNode::command("log").with_role(
                "patient",
                AstNode::binary("+", AstNode::number(1.0), AstNode::number(2.0)),
            )],
        };
        let ast = AstNode::event("click", vec![inner]);
        let mut probe = DepthProbe(0);
        walk_ast(&mut probe, &ast);
        assert_eq!(probe.0, 2);
    }

    struct RenameCommands;

    impl AstTransform for RenameCommands {
        fn transform_node(&mut self, node: AstNode) -> AstNode {
            match transform_children(self, node) {
                AstNode::Command { roles, .. } => AstNode::Command {
                    name: "log".into(),
                    roles,
                },
                other => other,
            }
        }
    }

    #[test]
    fn transform_reaches_nested_bodies() {
        let ast = AstNode::event(
            "click",
            vec![AstNode::If {
                condition: Box::new(AstNode::literal(hyperfixi_foundation::Value::Bool(true))),
                then_branch: vec![AstNode::command("toggle")],
                else_branch: vec![AstNode::command("hide")],
                negated: false,
            }],
        );
        let out = RenameCommands.transform_node(ast);
        let names: Vec<_> = children(&out.body()[0])
            .into_iter()
            .filter_map(AstNode::command_name)
            .collect();
        assert_eq!(names, vec!["log", "log"]);
    }

    #[test]
    fn any_node_searches_expressions() {
        let ast = AstNode::command("set")
            .with_role("patient", AstNode::binary("+", AstNode::variable(":index"), AstNode::number(1.0)));
        assert!(any_node(&ast, &|n| matches!(n, AstNode::Variable { name, .. } if name == "index")));
    }
}
