//! Semantic matching: token streams against generated patterns.
//!
//! A clause matches a pattern when its action keyword sits where the word
//! order puts verbs, every marked phrase lands in the slot its marker names,
//! every unmarked phrase finds a free slot of the right type, and no required
//! slot is left empty. There is no partial credit: a pattern either aligns or
//! is rejected with a [`MatchFailure`].

use std::fmt;

use hyperfixi_i18n::{Token, TokenKind};

use crate::expr::{scan_value, to_value};
use crate::node::{NodeMetadata, SemanticNode};
use crate::pattern::{Pattern, Slot};
use crate::role::SemanticRole;
use crate::value::{SemanticValue, ValueType};

/// Why a pattern rejected a clause.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchFailure {
    /// The clause is empty.
    Empty,
    /// The verb position does not hold this pattern's action.
    ActionMismatch,
    /// A required role has no value.
    MissingRole(SemanticRole),
    /// A value has a shape its slot does not accept.
    TypeMismatch {
        /// The slot's role.
        role: SemanticRole,
        /// Shape of the offending value.
        found: ValueType,
    },
    /// A marker names no free slot.
    UnexpectedMarker(String),
    /// Tokens that no slot could take.
    Leftover(String),
}

impl fmt::Display for MatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty clause"),
            Self::ActionMismatch => f.write_str("action keyword not in verb position"),
            Self::MissingRole(role) => write!(f, "missing required role '{role}'"),
            Self::TypeMismatch { role, found } => {
                write!(f, "role '{role}' does not accept {found:?} values")
            }
            Self::UnexpectedMarker(marker) => write!(f, "marker '{marker}' fits no open role"),
            Self::Leftover(text) => write!(f, "unexpected '{text}'"),
        }
    }
}

/// A phrase: a value with the marker that introduced or followed it.
#[derive(Debug)]
struct Phrase<'t> {
    marker: Option<&'t str>,
    tokens: &'t [Token],
}

/// Matches clauses against patterns.
pub struct SemanticMatcher;

impl SemanticMatcher {
    /// Matches one clause against one pattern.
    ///
    /// # Errors
    ///
    /// Returns the reason the pattern rejected the clause.
    pub fn match_clause(tokens: &[Token], pattern: &Pattern) -> Result<SemanticNode, MatchFailure> {
        if tokens.is_empty() {
            return Err(MatchFailure::Empty);
        }
        let verb_final = pattern.word_order.is_verb_final();
        let action_index = if verb_final { tokens.len() - 1 } else { 0 };
        let action = &tokens[action_index];
        let names_action = action.is(&pattern.action)
            || pattern
                .action_keywords()
                .is_some_and(|keywords| keywords.matches(&action.text));
        if !names_action || action.kind == TokenKind::Particle {
            return Err(MatchFailure::ActionMismatch);
        }

        let args = if verb_final {
            &tokens[..action_index]
        } else {
            &tokens[1..]
        };
        let phrases = if verb_final {
            postpositional_phrases(args, pattern)?
        } else {
            prepositional_phrases(args, pattern)?
        };

        let slots: Vec<&Slot> = pattern.slots().collect();
        let mut filled: Vec<Option<SemanticValue>> = vec![None; slots.len()];

        for phrase in phrases.iter().filter(|p| p.marker.is_some()) {
            let marker = phrase.marker.unwrap_or_default();
            let open = |k: &usize| filled[*k].is_none();
            let index = (0..slots.len())
                .filter(open)
                .find(|&k| slots[k].marker.as_ref().is_some_and(|m| m.is_primary(marker)))
                .or_else(|| (0..slots.len()).filter(open).find(|&k| slots[k].marked_by(marker)))
                .ok_or_else(|| MatchFailure::UnexpectedMarker(marker.to_string()))?;
            let slot = slots[index];
            let value = coerce(to_value(phrase.tokens), phrase.tokens, slot);
            if !slot.accepts(value.value_type()) {
                return Err(MatchFailure::TypeMismatch {
                    role: slot.role.clone(),
                    found: value.value_type(),
                });
            }
            filled[index] = Some(value);
        }

        for phrase in phrases.iter().filter(|p| p.marker.is_none()) {
            let raw = to_value(phrase.tokens);
            let fits = |k: usize| {
                filled[k].is_none()
                    && slots[k].accepts(coerce(raw.clone(), phrase.tokens, slots[k]).value_type())
            };
            let index = (0..slots.len())
                .find(|&k| slots[k].marker.is_none() && fits(k))
                .or_else(|| (0..slots.len()).find(|&k| fits(k)))
                .ok_or_else(|| MatchFailure::Leftover(raw.raw().to_string()))?;
            filled[index] = Some(coerce(raw, phrase.tokens, slots[index]));
        }

        let mut node = SemanticNode::command(pattern.action.clone());
        for (slot, value) in slots.iter().zip(filled) {
            match value {
                Some(value) => node = node.with_role(slot.role.clone(), value),
                None if slot.required => {
                    return Err(MatchFailure::MissingRole(slot.role.clone()));
                }
                None => {}
            }
        }

        let confidence = tokens.iter().map(Token::confidence).fold(1.0, f64::min);
        node.metadata = NodeMetadata {
            language: pattern.language.clone(),
            confidence,
            source_text: None,
        };
        Ok(node)
    }
}

/// `marker value` phrases, with unmarked values in between.
fn prepositional_phrases<'t>(
    args: &'t [Token],
    pattern: &Pattern,
) -> Result<Vec<Phrase<'t>>, MatchFailure> {
    let stop = |t: &Token| pattern.is_marker(&t.text);
    let mut phrases = Vec::new();
    let mut i = 0;
    while i < args.len() {
        let token = &args[i];
        let (marker, start) = if stop(token) {
            (Some(token.text.as_str()), i + 1)
        } else {
            (None, i)
        };
        let end = scan_value(args, start, &stop)
            .ok_or_else(|| MatchFailure::Leftover(token.text.clone()))?;
        phrases.push(Phrase {
            marker,
            tokens: &args[start..end],
        });
        i = end;
    }
    Ok(phrases)
}

/// `value marker` phrases; the marker is optional.
fn postpositional_phrases<'t>(
    args: &'t [Token],
    pattern: &Pattern,
) -> Result<Vec<Phrase<'t>>, MatchFailure> {
    let stop = |t: &Token| pattern.is_marker(&t.text);
    let mut phrases = Vec::new();
    let mut i = 0;
    while i < args.len() {
        let end = scan_value(args, i, &stop)
            .ok_or_else(|| MatchFailure::Leftover(args[i].text.clone()))?;
        let marker = args
            .get(end)
            .filter(|t| stop(t))
            .map(|t| t.text.as_str());
        phrases.push(Phrase {
            marker,
            tokens: &args[i..end],
        });
        i = end + usize::from(marker.is_some());
    }
    Ok(phrases)
}

/// A bare word in a slot that takes literals but not expressions is a word
/// literal: `as json`, `send myEvent`.
fn coerce(value: SemanticValue, tokens: &[Token], slot: &Slot) -> SemanticValue {
    let bare_word = matches!(tokens, [t] if t.kind == TokenKind::Identifier);
    if bare_word
        && matches!(value, SemanticValue::Expression { .. })
        && slot.accepts(ValueType::Literal)
        && !slot.accepts(ValueType::Expression)
    {
        return SemanticValue::word(value.raw());
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternGenerator;
    use crate::schema::SchemaRegistry;
    use hyperfixi_i18n::{LanguageRegistry, Tokenizer};

    fn try_match(code: &str, action: &str, source: &str) -> Result<SemanticNode, MatchFailure> {
        let languages = LanguageRegistry::with_builtin();
        let schemas = SchemaRegistry::with_standard();
        let language = languages.get(code).unwrap();
        let pattern = PatternGenerator::generate(schemas.get(action).unwrap(), language);
        let tokens = Tokenizer::tokenize(source, language);
        SemanticMatcher::match_clause(&tokens, &pattern)
    }

    #[test]
    fn english_toggle_with_destination() {
        let node = try_match("en", "toggle", "toggle .active on #button").unwrap();
        assert_eq!(node.role(&SemanticRole::Patient), Some(&SemanticValue::selector(".active")));
        assert_eq!(
            node.role(&SemanticRole::Destination),
            Some(&SemanticValue::selector("#button"))
        );
    }

    #[test]
    fn japanese_toggle() {
        let node = try_match("ja", "toggle", "#button に .active を 切り替え").unwrap();
        assert_eq!(node.action, "toggle");
        assert_eq!(node.roles.len(), 2);
        assert_eq!(node.metadata.language, "ja");
    }

    #[test]
    fn markers_choose_slots_regardless_of_order() {
        let node = try_match("ja", "put", "#out に 'hi' を 入れる").unwrap();
        assert_eq!(node.role(&SemanticRole::Patient), Some(&SemanticValue::string("hi")));
        assert_eq!(node.role(&SemanticRole::Destination), Some(&SemanticValue::selector("#out")));
    }

    #[test]
    fn missing_required_role_rejects() {
        let err = try_match("en", "put", "put 'x'").unwrap_err();
        assert_eq!(err, MatchFailure::MissingRole(SemanticRole::Destination));
    }

    #[test]
    fn wrong_action_rejects() {
        let err = try_match("en", "add", "toggle .active").unwrap_err();
        assert_eq!(err, MatchFailure::ActionMismatch);
    }

    #[test]
    fn set_with_expression() {
        let node = try_match("en", "set", "set :x to :y + 2").unwrap();
        assert_eq!(node.role(&SemanticRole::Destination), Some(&SemanticValue::reference(":x")));
        assert_eq!(node.role(&SemanticRole::Patient), Some(&SemanticValue::expression(":y + 2")));
    }

    #[test]
    fn response_type_is_a_word() {
        let node = try_match("en", "fetch", "fetch /api/items as json").unwrap();
        assert_eq!(node.role(&SemanticRole::ResponseType), Some(&SemanticValue::word("json")));
        assert_eq!(node.role(&SemanticRole::Source).map(SemanticValue::raw), Some("/api/items"));
    }

    #[test]
    fn stemmed_action_lowers_confidence() {
        let node = try_match("es", "toggle", "alternando .activo").unwrap();
        assert!(node.metadata.confidence < 1.0);
        assert!(node.metadata.confidence >= hyperfixi_i18n::STEM_CONFIDENCE_THRESHOLD);
    }

    #[test]
    fn turkish_apostrophe_markers() {
        let node = try_match("tr", "toggle", ".active'i değiştir").unwrap();
        assert_eq!(node.role(&SemanticRole::Patient), Some(&SemanticValue::selector(".active")));
    }

    #[test]
    fn leftover_tokens_reject() {
        let err = try_match("en", "toggle", "toggle .a on #b .c").unwrap_err();
        assert_eq!(err, MatchFailure::Leftover(".c".to_string()));
    }
}
