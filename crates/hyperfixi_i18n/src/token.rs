//! Token types for natural-language hyperscript.
//!
//! Tokens are the output of the [`Tokenizer`](crate::Tokenizer) and the input
//! to the semantic pattern matcher. Every token keeps its surface text; words
//! the keyword table or a morphological normalizer recognized also carry the
//! canonical English name in `normalized`.

use hyperfixi_foundation::{DurationUnit, Span, Value};
use serde::{Deserialize, Serialize};

use crate::keywords::KeywordCategory;

/// An ordered token sequence. Positions are monotonically increasing.
pub type TokenStream = Vec<Token>;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text exactly as written.
    pub text: String,
    /// Classification.
    pub kind: TokenKind,
    /// Source location.
    pub span: Span,
    /// Canonical English name for keywords, particles, and durations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    /// Keyword category the word resolved in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<KeywordCategory>,
    /// Dictionary form produced by a morphological normalizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stem: Option<String>,
    /// Confidence of `stem`, in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stem_confidence: Option<f64>,
}

impl Token {
    /// Creates a new token with no normalization.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: TokenKind, span: Span) -> Self {
        Self {
            text: text.into(),
            kind,
            span,
            normalized: None,
            category: None,
            stem: None,
            stem_confidence: None,
        }
    }

    /// Sets the canonical name.
    #[must_use]
    pub fn with_normalized(mut self, normalized: impl Into<String>) -> Self {
        self.normalized = Some(normalized.into());
        self
    }

    /// Sets the keyword category.
    #[must_use]
    pub fn with_category(mut self, category: KeywordCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Returns true if this token resolved in `category`.
    #[must_use]
    pub fn in_category(&self, category: KeywordCategory) -> bool {
        self.category == Some(category)
    }

    /// Records the stem a normalizer produced for this token.
    #[must_use]
    pub fn with_stem(mut self, stem: impl Into<String>, confidence: f64) -> Self {
        self.stem = Some(stem.into());
        self.stem_confidence = Some(confidence);
        self
    }

    /// The canonical name if there is one, otherwise the surface text.
    #[must_use]
    pub fn canonical(&self) -> &str {
        self.normalized.as_deref().unwrap_or(&self.text)
    }

    /// Returns true if this token normalizes to `name`.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.normalized.as_deref() == Some(name)
    }

    /// Confidence contributed by this token: the stem confidence for
    /// normalized words, `1.0` for exact matches.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.stem_confidence.unwrap_or(1.0)
    }

    /// Returns true if `next` starts exactly where this token ends.
    #[must_use]
    pub const fn touches(&self, next: &Self) -> bool {
        self.span.touches(&next.span)
    }

    /// Interprets a literal token as a typed value.
    ///
    /// Strings lose their quotes, numbers parse as `f64`, durations become
    /// milliseconds, and `true`/`false`/`null` keywords become their values.
    /// Returns `None` for tokens that are not literals.
    #[must_use]
    pub fn literal_value(&self) -> Option<Value> {
        if self.kind != TokenKind::Literal {
            return None;
        }
        match self.normalized.as_deref() {
            Some("true") => return Some(Value::Bool(true)),
            Some("false") => return Some(Value::Bool(false)),
            Some("null") => return Some(Value::Null),
            _ => {}
        }
        if let Some(millis) = self.duration_millis() {
            return Some(Value::Number(millis));
        }
        let text = self.text.as_str();
        if let Some(inner) = unquote(text) {
            return Some(Value::String(inner));
        }
        if let Ok(n) = text.parse::<f64>() {
            return Some(Value::Number(n));
        }
        Some(Value::String(text.to_string()))
    }

    /// Milliseconds for a duration literal (`300ms`, `2s`, `3秒`).
    #[must_use]
    pub fn duration_millis(&self) -> Option<f64> {
        let (amount, unit) = split_duration(self.normalized.as_deref()?)?;
        Some(amount * unit.millis())
    }

    /// Returns true if this is a duration literal.
    #[must_use]
    pub fn is_duration(&self) -> bool {
        self.kind == TokenKind::Literal && self.duration_millis().is_some()
    }
}

/// Splits a canonical duration like `300ms` into its amount and unit.
#[must_use]
pub fn split_duration(text: &str) -> Option<(f64, DurationUnit)> {
    let digits_end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|&i| i > 0)?;
    let amount = text[..digits_end].parse::<f64>().ok()?;
    let unit = DurationUnit::from_suffix(&text[digits_end..])?;
    Some((amount, unit))
}

/// Strips matching quotes and resolves backslash escapes.
fn unquote(text: &str) -> Option<String> {
    let mut chars = text.chars();
    let open = chars.next()?;
    if !matches!(open, '"' | '\'' | '`') || text.len() < 2 || !text.ends_with(open) {
        return None;
    }
    let inner = &text[open.len_utf8()..text.len() - open.len_utf8()];
    let mut out = String::with_capacity(inner.len());
    let mut escaped = false;
    for c in inner.chars() {
        if escaped {
            out.push(match c {
                'n' => '\n',
                't' => '\t',
                other => other,
            });
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else {
            out.push(c);
        }
    }
    Some(out)
}

/// Token classifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A word the keyword table or a normalizer resolved.
    Keyword,
    /// Any other word, including `:local` and `$global` variables.
    Identifier,
    /// CSS selector such as `#id`, `.class`, `<div/>`, or `@attr`.
    Selector,
    /// String, number, duration, URL, or boolean/null literal.
    Literal,
    /// Grammatical particle or preposition marking a role.
    Particle,
    /// Arithmetic or comparison operator.
    Operator,
    /// Brackets, commas, and other punctuation.
    Punctuation,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Selector => "selector",
            Self::Literal => "literal",
            Self::Particle => "particle",
            Self::Operator => "operator",
            Self::Punctuation => "punctuation",
        }
    }
}
