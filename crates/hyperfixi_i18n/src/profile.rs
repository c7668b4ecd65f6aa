//! Language profiles: word order, direction, and role markers.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Basic constituent order of a language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordOrder {
    /// Subject-verb-object (English, Spanish, Italian).
    #[serde(rename = "SVO")]
    Svo,
    /// Subject-object-verb (Japanese, Korean, Turkish).
    #[serde(rename = "SOV")]
    Sov,
    /// Verb-subject-object (Arabic).
    #[serde(rename = "VSO")]
    Vso,
}

impl WordOrder {
    /// Returns true if the verb comes last and markers follow their values.
    #[must_use]
    pub const fn is_verb_final(self) -> bool {
        matches!(self, Self::Sov)
    }

    /// Short name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Svo => "SVO",
            Self::Sov => "SOV",
            Self::Vso => "VSO",
        }
    }
}

/// Writing direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
}

/// Native forms of one command verb.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionKeywords {
    /// Form used when rendering.
    pub primary: String,
    /// Other accepted forms.
    pub alternatives: Vec<String>,
}

impl ActionKeywords {
    /// Creates keywords from a primary form.
    #[must_use]
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            alternatives: Vec::new(),
        }
    }

    /// Returns true if `word` is any accepted form (case-insensitive).
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.primary.to_lowercase() == word
            || self.alternatives.iter().any(|a| a.to_lowercase() == word)
    }

    /// All forms, primary first.
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.alternatives.iter().map(String::as_str))
    }
}

/// Surface forms of a role marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerForms {
    /// Form used when rendering.
    pub primary: String,
    /// Other accepted forms.
    pub alternatives: Vec<String>,
}

impl MarkerForms {
    /// Creates marker forms.
    #[must_use]
    pub fn new(primary: &str, alternatives: &[&str]) -> Self {
        Self {
            primary: primary.to_string(),
            alternatives: alternatives.iter().map(ToString::to_string).collect(),
        }
    }

    /// Returns true if `word` is any accepted form (case-insensitive).
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.primary.to_lowercase() == word
            || self.alternatives.iter().any(|a| a.to_lowercase() == word)
    }
}

/// Everything the pattern engine needs to know about a language.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProfile {
    /// ISO 639-1 code.
    pub code: String,
    /// English name.
    pub name: String,
    /// Constituent order.
    pub word_order: WordOrder,
    /// Writing direction.
    pub direction: Direction,
    /// Canonical action -> native verb forms.
    pub keywords: BTreeMap<String, ActionKeywords>,
    /// Role name -> default marker.
    pub role_markers: HashMap<String, MarkerForms>,
    /// Marker introducing (SVO/VSO) or following (SOV) an event name.
    pub event_marker: MarkerForms,
    /// Marker attached to the element an event handler listens on.
    pub source_marker: MarkerForms,
}

impl LanguageProfile {
    /// Creates a profile with no keywords or markers.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        word_order: WordOrder,
        direction: Direction,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            word_order,
            direction,
            keywords: BTreeMap::new(),
            role_markers: HashMap::new(),
            event_marker: MarkerForms::new("on", &[]),
            source_marker: MarkerForms::new("from", &[]),
        }
    }

    /// Native verb forms for a canonical action.
    #[must_use]
    pub fn action(&self, canonical: &str) -> Option<&ActionKeywords> {
        self.keywords.get(canonical)
    }

    /// Adds a verb form. The first form added becomes the primary.
    pub fn add_action_form(&mut self, canonical: &str, form: &str) {
        match self.keywords.get_mut(canonical) {
            Some(existing) => {
                if !existing.matches(form) {
                    existing.alternatives.push(form.to_string());
                }
            }
            None => {
                self.keywords
                    .insert(canonical.to_string(), ActionKeywords::new(form));
            }
        }
    }

    /// Default marker for a role, if the language marks it.
    #[must_use]
    pub fn marker(&self, role: &str) -> Option<&MarkerForms> {
        self.role_markers.get(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_forms_accumulate() {
        let mut profile = LanguageProfile::new("es", "Spanish", WordOrder::Svo, Direction::Ltr);
        profile.add_action_form("toggle", "alternar");
        profile.add_action_form("toggle", "alterna");
        profile.add_action_form("toggle", "Alternar");
        let forms = profile.action("toggle").unwrap();
        assert_eq!(forms.primary, "alternar");
        assert_eq!(forms.alternatives, vec!["alterna".to_string()]);
        assert!(forms.matches("ALTERNA"));
    }

    #[test]
    fn word_order_names() {
        assert!(WordOrder::Sov.is_verb_final());
        assert!(!WordOrder::Vso.is_verb_final());
        assert_eq!(serde_json::to_string(&WordOrder::Vso).unwrap(), "\"VSO\"");
    }
}
