//! Pattern generation.
//!
//! A [`Pattern`] is one schema laid out in one language's word order: the
//! action keyword and a slot per role, each slot carrying the marker that
//! signals it. The matcher consumes patterns and the renderer walks them in
//! order, so parsing and rendering share one layout.

use hyperfixi_i18n::{ActionKeywords, Language, MarkerForms, WordOrder};

use crate::role::SemanticRole;
use crate::schema::{CommandSchema, RoleSpec};
use crate::value::ValueType;

/// Whether a marker precedes or follows its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerPosition {
    /// Preposition (`on #button`).
    Before,
    /// Postposition or case particle (`#button に`).
    After,
}

/// A role marker in one language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerSpec {
    /// Accepted forms; the primary is used for rendering.
    pub forms: MarkerForms,
    /// Placement relative to the value.
    pub position: MarkerPosition,
}

impl MarkerSpec {
    /// Returns true if `word` is the primary form.
    #[must_use]
    pub fn is_primary(&self, word: &str) -> bool {
        self.forms.primary.to_lowercase() == word.to_lowercase()
    }
}

/// A typed hole for one role.
#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    /// The role the slot fills.
    pub role: SemanticRole,
    /// A match without this slot fails.
    pub required: bool,
    /// Value shapes the slot accepts.
    pub expected_types: Vec<ValueType>,
    /// Marker signalling the role, if the language marks it.
    pub marker: Option<MarkerSpec>,
}

impl Slot {
    /// Returns true if the slot accepts values of this shape.
    #[must_use]
    pub fn accepts(&self, value_type: ValueType) -> bool {
        self.expected_types.contains(&value_type)
    }

    /// Returns true if `word` is one of this slot's marker forms.
    #[must_use]
    pub fn marked_by(&self, word: &str) -> bool {
        self.marker.as_ref().is_some_and(|m| m.forms.matches(word))
    }
}

/// One element of a pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum PatternElement {
    /// The command keyword.
    Action(ActionKeywords),
    /// A role slot.
    Slot(Slot),
}

/// A schema laid out for one language.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    /// Canonical action.
    pub action: String,
    /// Language code.
    pub language: String,
    /// Word order the layout follows.
    pub word_order: WordOrder,
    /// Elements in surface order.
    pub elements: Vec<PatternElement>,
}

impl Pattern {
    /// The action keyword forms.
    #[must_use]
    pub fn action_keywords(&self) -> Option<&ActionKeywords> {
        self.elements.iter().find_map(|e| match e {
            PatternElement::Action(keywords) => Some(keywords),
            PatternElement::Slot(_) => None,
        })
    }

    /// Role slots in surface order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.elements.iter().filter_map(|e| match e {
            PatternElement::Slot(slot) => Some(slot),
            PatternElement::Action(_) => None,
        })
    }

    /// Returns true if `word` marks any slot of this pattern.
    #[must_use]
    pub fn is_marker(&self, word: &str) -> bool {
        self.slots().any(|slot| slot.marked_by(word))
    }

    /// A readable template such as `toggle {patient} on {destination}`.
    #[must_use]
    pub fn template(&self) -> String {
        let mut parts = Vec::new();
        for element in &self.elements {
            match element {
                PatternElement::Action(keywords) => parts.push(keywords.primary.clone()),
                PatternElement::Slot(slot) => {
                    let hole = if slot.required {
                        format!("{{{}}}", slot.role)
                    } else {
                        format!("[{}]", slot.role)
                    };
                    match &slot.marker {
                        Some(m) if m.position == MarkerPosition::Before => {
                            parts.push(m.forms.primary.clone());
                            parts.push(hole);
                        }
                        Some(m) => {
                            parts.push(hole);
                            parts.push(m.forms.primary.clone());
                        }
                        None => parts.push(hole),
                    }
                }
            }
        }
        parts.join(" ")
    }
}

/// Lays schemas out in a language's word order.
pub struct PatternGenerator;

impl PatternGenerator {
    /// Generates the pattern for one schema in one language.
    ///
    /// Roles are sorted by `svo_position` (SVO, VSO) or `sov_position`
    /// (SOV); ties keep declaration order. The action comes first, or last
    /// in SOV languages.
    #[must_use]
    pub fn generate(schema: &CommandSchema, language: &Language) -> Pattern {
        let profile = &language.profile;
        let word_order = profile.word_order;

        let mut specs: Vec<&RoleSpec> = schema.roles.iter().collect();
        specs.sort_by_key(|spec| match word_order {
            WordOrder::Sov => spec.sov_position,
            WordOrder::Svo | WordOrder::Vso => spec.svo_position,
        });

        let slots = specs.into_iter().map(|spec| {
            PatternElement::Slot(Slot {
                role: spec.role.clone(),
                required: spec.required,
                expected_types: spec.expected_types.clone(),
                marker: Self::marker_for(spec, language),
            })
        });

        let action = PatternElement::Action(
            profile
                .action(&schema.action)
                .cloned()
                .unwrap_or_else(|| ActionKeywords::new(schema.action.clone())),
        );

        let elements = if word_order.is_verb_final() {
            slots.chain(std::iter::once(action)).collect()
        } else {
            std::iter::once(action).chain(slots).collect()
        };

        Pattern {
            action: schema.action.clone(),
            language: profile.code.clone(),
            word_order,
            elements,
        }
    }

    /// Generates patterns for every schema, in registration order.
    #[must_use]
    pub fn generate_all<'a>(
        schemas: impl IntoIterator<Item = &'a CommandSchema>,
        language: &Language,
    ) -> Vec<Pattern> {
        schemas
            .into_iter()
            .map(|schema| Self::generate(schema, language))
            .collect()
    }

    /// The marker for a role: the schema's override for this language, else
    /// the language's default marker for the role. The default forms stay
    /// accepted as alternatives to an override.
    fn marker_for(spec: &RoleSpec, language: &Language) -> Option<MarkerSpec> {
        let profile = &language.profile;
        let position = if profile.word_order.is_verb_final() {
            MarkerPosition::After
        } else {
            MarkerPosition::Before
        };
        let default = profile.marker(spec.role.name());

        let forms = match spec.marker_override.get(&profile.code) {
            Some(over) if over.is_empty() => return None,
            Some(over) => {
                let mut forms = MarkerForms::new(over, &[]);
                if let Some(default) = default {
                    forms.alternatives = std::iter::once(&default.primary)
                        .chain(&default.alternatives)
                        .filter(|form| !form.eq_ignore_ascii_case(over))
                        .cloned()
                        .collect();
                }
                forms
            }
            None => default?.clone(),
        };
        Some(MarkerSpec { forms, position })
    }
}
