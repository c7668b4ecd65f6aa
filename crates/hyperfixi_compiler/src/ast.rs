//! Abstract syntax tree for compilation.
//!
//! The AST is what the optimizer rewrites and the code generator walks. Its
//! serde form is the JSON interchange format:
//!
//! ```json
//! {"type":"command","name":"toggle","roles":{"patient":{"type":"selector","value":".active"}}}
//! ```

use std::collections::BTreeMap;

use hyperfixi_foundation::Value;
use hyperfixi_semantic::EventModifiers;
use serde::{Deserialize, Serialize};

/// Where a variable lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarScope {
    /// `:name`, scoped to one handler run.
    Local,
    /// `$name`, shared across handlers.
    Global,
    /// `me`, `it`, `event`, and the other context-provided names.
    Context,
}

/// Names the runtime context provides.
pub const CONTEXT_VARIABLES: &[&str] = &["me", "it", "you", "result", "event", "target", "body"];

/// Positional expression keywords (`first .item`, `closest form`).
pub const POSITIONAL_KEYWORDS: &[&str] = &["first", "last", "next", "previous", "closest", "parent"];

/// Commands that end a body unconditionally.
pub const TERMINATORS: &[&str] = &["halt", "exit", "return"];

fn is_false(b: &bool) -> bool {
    !*b
}

/// An AST node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AstNode {
    /// An event handler root.
    Event {
        /// DOM event name.
        event: String,
        /// Listener modifiers.
        #[serde(default, skip_serializing_if = "EventModifiers::is_empty")]
        modifiers: EventModifiers,
        /// Delegation source (`from <selector>`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<Box<AstNode>>,
        /// Handler statements.
        body: Vec<AstNode>,
    },
    /// A command with its role arguments.
    Command {
        /// Canonical command name.
        name: String,
        /// Role name to argument expression.
        #[serde(default)]
        roles: BTreeMap<String, AstNode>,
    },
    /// `if`/`unless`.
    #[serde(rename_all = "camelCase")]
    If {
        /// Branch condition.
        condition: Box<AstNode>,
        /// Taken when the condition holds (fails, for `unless`).
        then_branch: Vec<AstNode>,
        /// The other branch.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        else_branch: Vec<AstNode>,
        /// True for `unless`.
        #[serde(default, skip_serializing_if = "is_false")]
        negated: bool,
    },
    /// `while <cond> ... end`.
    While {
        /// Loop condition.
        condition: Box<AstNode>,
        /// Loop body.
        body: Vec<AstNode>,
    },
    /// `for <var> in <collection> ... end`.
    Foreach {
        /// Loop variable without its `:` sigil.
        variable: String,
        /// Iterated expression.
        collection: Box<AstNode>,
        /// Loop body.
        body: Vec<AstNode>,
    },
    /// `repeat <n> times ... end`, or `repeat forever` without a count.
    Repeat {
        /// Iteration count.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        count: Option<Box<AstNode>>,
        /// Loop body.
        body: Vec<AstNode>,
    },
    /// Statements run in order.
    Sequence {
        /// The statements.
        body: Vec<AstNode>,
        /// Set when loop unrolling produced this sequence.
        #[serde(default, rename = "_unrolled", skip_serializing_if = "is_false")]
        unrolled: bool,
    },
    /// Arithmetic, comparison, or concatenation.
    Binary {
        /// Operator in canonical form (`+`, `is`, `is not`, `&`).
        operator: String,
        /// Left operand.
        left: Box<AstNode>,
        /// Right operand.
        right: Box<AstNode>,
    },
    /// `and`/`or`.
    Logical {
        /// `and`, `or`, `&&`, or `||`.
        operator: String,
        /// Left operand.
        left: Box<AstNode>,
        /// Right operand.
        right: Box<AstNode>,
    },
    /// `not x`, `-x`.
    Unary {
        /// `not`, `!`, or `-`.
        operator: String,
        /// The operand.
        operand: Box<AstNode>,
    },
    /// A literal value.
    Literal {
        /// The typed value. Durations are milliseconds.
        value: Value,
        /// Surface text, when it differs from the value's own form.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        raw: Option<String>,
    },
    /// A bare name.
    Identifier {
        /// The name.
        name: String,
    },
    /// A CSS selector.
    Selector {
        /// Selector text.
        value: String,
        /// Set when selector caching hoisted this query.
        #[serde(default, rename = "_cached", skip_serializing_if = "is_false")]
        cached: bool,
        /// Cache variable name when cached.
        #[serde(default, rename = "_cacheKey", skip_serializing_if = "Option::is_none")]
        cache_key: Option<String>,
    },
    /// A variable reference.
    Variable {
        /// Name without sigil.
        name: String,
        /// Where the variable lives.
        scope: VarScope,
    },
    /// `obj.prop`.
    Member {
        /// Object expression.
        object: Box<AstNode>,
        /// Property name.
        property: String,
    },
    /// `obj[index]`.
    Index {
        /// Object expression.
        object: Box<AstNode>,
        /// Index expression.
        index: Box<AstNode>,
    },
    /// `f(args)`.
    Call {
        /// Called expression.
        callee: Box<AstNode>,
        /// Arguments.
        #[serde(default)]
        args: Vec<AstNode>,
    },
    /// `first .item`, `closest form`, `next`.
    Positional {
        /// One of [`POSITIONAL_KEYWORDS`].
        position: String,
        /// Selector the position applies to.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<Box<AstNode>>,
    },
}

impl AstNode {
    /// A literal node.
    #[must_use]
    pub const fn literal(value: Value) -> Self {
        Self::Literal { value, raw: None }
    }

    /// A number literal.
    #[must_use]
    pub const fn number(n: f64) -> Self {
        Self::literal(Value::Number(n))
    }

    /// A string literal.
    #[must_use]
    pub fn string(s: impl Into<String>) -> Self {
        Self::literal(Value::String(s.into()))
    }

    /// An uncached selector.
    #[must_use]
    pub fn selector(value: impl Into<String>) -> Self {
        Self::Selector {
            value: value.into(),
            cached: false,
            cache_key: None,
        }
    }

    /// A command without roles.
    #[must_use]
    pub fn command(name: impl Into<String>) -> Self {
        Self::Command {
            name: name.into(),
            roles: BTreeMap::new(),
        }
    }

    /// Adds a role to a command. Other nodes are returned unchanged.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>, value: Self) -> Self {
        if let Self::Command { roles, .. } = &mut self {
            roles.insert(role.into(), value);
        }
        self
    }

    /// An event root.
    #[must_use]
    pub fn event(event: impl Into<String>, body: Vec<Self>) -> Self {
        Self::Event {
            event: event.into(),
            modifiers: EventModifiers::default(),
            source: None,
            body,
        }
    }

    /// A binary node.
    #[must_use]
    pub fn binary(operator: impl Into<String>, left: Self, right: Self) -> Self {
        Self::Binary {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// A variable node from sigiled source text (`:x`, `$x`, `me`).
    #[must_use]
    pub fn variable(text: &str) -> Self {
        if let Some(name) = text.strip_prefix(':') {
            Self::Variable {
                name: name.to_string(),
                scope: VarScope::Local,
            }
        } else if let Some(name) = text.strip_prefix('$') {
            Self::Variable {
                name: name.to_string(),
                scope: VarScope::Global,
            }
        } else if CONTEXT_VARIABLES.contains(&text) {
            Self::Variable {
                name: text.to_string(),
                scope: VarScope::Context,
            }
        } else {
            Self::Identifier {
                name: text.to_string(),
            }
        }
    }

    /// The node's `type` tag.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Event { .. } => "event",
            Self::Command { .. } => "command",
            Self::If { .. } => "if",
            Self::While { .. } => "while",
            Self::Foreach { .. } => "foreach",
            Self::Repeat { .. } => "repeat",
            Self::Sequence { .. } => "sequence",
            Self::Binary { .. } => "binary",
            Self::Logical { .. } => "logical",
            Self::Unary { .. } => "unary",
            Self::Literal { .. } => "literal",
            Self::Identifier { .. } => "identifier",
            Self::Selector { .. } => "selector",
            Self::Variable { .. } => "variable",
            Self::Member { .. } => "member",
            Self::Index { .. } => "index",
            Self::Call { .. } => "call",
            Self::Positional { .. } => "positional",
        }
    }

    /// Returns the literal value, if this is a literal.
    #[must_use]
    pub const fn as_literal(&self) -> Option<&Value> {
        match self {
            Self::Literal { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns true for statements (commands and blocks).
    #[must_use]
    pub const fn is_statement(&self) -> bool {
        matches!(
            self,
            Self::Event { .. }
                | Self::Command { .. }
                | Self::If { .. }
                | Self::While { .. }
                | Self::Foreach { .. }
                | Self::Repeat { .. }
                | Self::Sequence { .. }
        )
    }

    /// Returns true for an unconditional terminator command.
    #[must_use]
    pub fn is_terminator(&self) -> bool {
        matches!(self, Self::Command { name, .. } if TERMINATORS.contains(&name.as_str()))
    }

    /// The command name, for command nodes.
    #[must_use]
    pub fn command_name(&self) -> Option<&str> {
        match self {
            Self::Command { name, .. } => Some(name),
            _ => None,
        }
    }

    /// A role argument of a command node.
    #[must_use]
    pub fn role(&self, role: &str) -> Option<&Self> {
        match self {
            Self::Command { roles, .. } => roles.get(role),
            _ => None,
        }
    }

    /// The statement body of an event, loop, or sequence.
    #[must_use]
    pub fn body(&self) -> &[Self] {
        match self {
            Self::Event { body, .. }
            | Self::While { body, .. }
            | Self::Foreach { body, .. }
            | Self::Repeat { body, .. }
            | Self::Sequence { body, .. } => body,
            Self::If { then_branch, .. } => then_branch,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_interchange_shape() {
        let node = AstNode::command("toggle").with_role("patient", AstNode::selector(".active"));
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"type":"command","name":"toggle","roles":{"patient":{"type":"selector","value":".active"}}}"#
        );
        let back: AstNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn markers_serialize_with_underscores() {
        let node = AstNode::Selector {
            value: ".a".into(),
            cached: true,
            cache_key: Some("_sel_a_0".into()),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["_cached"], true);
        assert_eq!(json["_cacheKey"], "_sel_a_0");
    }

    #[test]
    fn variables_classify_by_sigil() {
        assert!(matches!(AstNode::variable(":x"), AstNode::Variable { scope: VarScope::Local, .. }));
        assert!(matches!(AstNode::variable("$x"), AstNode::Variable { scope: VarScope::Global, .. }));
        assert!(matches!(AstNode::variable("me"), AstNode::Variable { scope: VarScope::Context, .. }));
        assert!(matches!(AstNode::variable("foo"), AstNode::Identifier { .. }));
    }

    #[test]
    fn if_uses_camel_case_branches() {
        let json = r#"{"type":"if","condition":{"type":"literal","value":true},"thenBranch":[]}"#;
        let node: AstNode = serde_json::from_str(json).unwrap();
        assert!(matches!(node, AstNode::If { negated: false, .. }));
    }
}
