//! Semantic values: what fills a role.

use std::fmt;

use hyperfixi_foundation::Value;
use serde::{Deserialize, Serialize};

/// The shape of a semantic value, used for type checking roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// CSS selector.
    Selector,
    /// Context reference or variable.
    Reference,
    /// Literal constant.
    Literal,
    /// Arbitrary expression.
    Expression,
}

/// Extra typing for literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralSubtype {
    /// A time span; the value is in milliseconds.
    Duration,
    /// A URL or path.
    Url,
}

/// A value filling a semantic role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SemanticValue {
    /// CSS selector text (`#id`, `.class`, `<li/>`).
    Selector {
        /// Selector text.
        value: String,
    },
    /// Context reference (`me`, `it`) or variable (`:x`, `$y`).
    Reference {
        /// Canonical reference name or variable text.
        value: String,
    },
    /// Literal constant.
    Literal {
        /// Typed value.
        value: Value,
        /// Language-neutral source form (`'hi'`, `42`, `300ms`).
        raw: String,
        /// Extra typing.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtype: Option<LiteralSubtype>,
    },
    /// Expression text in canonical vocabulary.
    Expression {
        /// Expression source.
        raw: String,
    },
}

impl SemanticValue {
    /// Creates a selector value.
    #[must_use]
    pub fn selector(value: impl Into<String>) -> Self {
        Self::Selector {
            value: value.into(),
        }
    }

    /// Creates a reference value.
    #[must_use]
    pub fn reference(value: impl Into<String>) -> Self {
        Self::Reference {
            value: value.into(),
        }
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::Literal {
            raw: quote(&text),
            value: Value::String(text),
            subtype: None,
        }
    }

    /// Creates a bare-word literal (event names, response types).
    #[must_use]
    pub fn word(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::Literal {
            raw: text.clone(),
            value: Value::String(text),
            subtype: None,
        }
    }

    /// Creates a number literal.
    #[must_use]
    pub fn number(n: f64) -> Self {
        Self::Literal {
            raw: hyperfixi_foundation::value::format_number(n),
            value: Value::Number(n),
            subtype: None,
        }
    }

    /// Creates a duration literal from its canonical text (`300ms`).
    #[must_use]
    pub fn duration(raw: impl Into<String>, millis: f64) -> Self {
        Self::Literal {
            raw: raw.into(),
            value: Value::Number(millis),
            subtype: Some(LiteralSubtype::Duration),
        }
    }

    /// Creates an expression value.
    #[must_use]
    pub fn expression(raw: impl Into<String>) -> Self {
        Self::Expression { raw: raw.into() }
    }

    /// The value's shape.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Selector { .. } => ValueType::Selector,
            Self::Reference { .. } => ValueType::Reference,
            Self::Literal { .. } => ValueType::Literal,
            Self::Expression { .. } => ValueType::Expression,
        }
    }

    /// Language-neutral source text.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Selector { value } | Self::Reference { value } => value,
            Self::Literal { raw, .. } | Self::Expression { raw } => raw,
        }
    }

    /// The typed value of a literal.
    #[must_use]
    pub const fn literal(&self) -> Option<&Value> {
        match self {
            Self::Literal { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns true for duration literals.
    #[must_use]
    pub const fn is_duration(&self) -> bool {
        matches!(
            self,
            Self::Literal {
                subtype: Some(LiteralSubtype::Duration),
                ..
            }
        )
    }
}

impl fmt::Display for SemanticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}

/// Single-quotes a string, escaping quotes and backslashes.
#[must_use]
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\'' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}
