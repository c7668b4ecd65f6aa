//! Keyword tables: locale words to canonical English vocabulary.
//!
//! Every locale maps its native words onto one fixed canonical vocabulary,
//! split into categories. A word registered in more than one category resolves
//! to the category that comes first in [`CATEGORY_PRIORITY`].

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Keyword categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    /// Command verbs (`toggle`, `put`, ...)
    Commands,
    /// Control flow and logical words (`if`, `then`, `and`, ...)
    Logical,
    /// DOM event names (`click`, `submit`, ...)
    Events,
    /// Context references and constant values (`me`, `it`, `true`, ...)
    Values,
    /// Temporal words (`until`)
    Temporal,
    /// Prepositions and case particles (`on`, `to`, `from`, ...). Case
    /// particles without an English preposition map to `object`, `subject`,
    /// or `topic`.
    Modifiers,
    /// Event attributes (`once`, `debounce`, ...)
    Attributes,
}

/// Resolution order when one word appears in several categories.
pub const CATEGORY_PRIORITY: [KeywordCategory; 7] = [
    KeywordCategory::Commands,
    KeywordCategory::Logical,
    KeywordCategory::Events,
    KeywordCategory::Values,
    KeywordCategory::Temporal,
    KeywordCategory::Modifiers,
    KeywordCategory::Attributes,
];

impl KeywordCategory {
    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Commands => "commands",
            Self::Logical => "logical",
            Self::Events => "events",
            Self::Values => "values",
            Self::Temporal => "temporal",
            Self::Modifiers => "modifiers",
            Self::Attributes => "attributes",
        }
    }

    /// The canonical English words of this category.
    #[must_use]
    pub const fn canonical_words(self) -> &'static [&'static str] {
        match self {
            Self::Commands => &[
                "toggle", "add", "remove", "show", "hide", "set", "put", "increment",
                "decrement", "log", "send", "trigger", "wait", "fetch", "go", "call", "focus",
                "blur", "halt", "exit", "return", "append", "take",
            ],
            Self::Logical => &[
                "if", "unless", "else", "end", "then", "and", "or", "not", "is", "repeat",
                "times", "while", "for", "in", "forever", "each",
            ],
            Self::Events => &[
                "click", "dblclick", "submit", "input", "change", "keydown", "keyup",
                "mouseover", "mouseout", "focus", "blur", "load", "scroll",
            ],
            Self::Values => &[
                "me", "it", "you", "result", "event", "target", "body", "true", "false", "null",
            ],
            Self::Temporal => &["until"],
            Self::Modifiers => &[
                "on", "to", "from", "into", "by", "as", "with", "at", "of", "object", "subject",
                "topic",
            ],
            Self::Attributes => &[
                "once", "prevent", "stop", "passive", "capture", "debounce", "throttle",
            ],
        }
    }
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// DOM event names every locale accepts as-is when English fallback is on.
pub const UNIVERSAL_EVENTS: &[&str] = &[
    "click", "dblclick", "submit", "input", "change", "keydown", "keyup", "keypress",
    "mouseover", "mouseout", "mouseenter", "mouseleave", "mousedown", "mouseup", "focus",
    "blur", "focusin", "focusout", "load", "scroll", "resize", "touchstart", "touchend",
    "pointerdown", "pointerup", "contextmenu",
];

/// One native word and the canonical name it maps to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    /// Word as written in the locale.
    pub native: String,
    /// Canonical English name.
    pub normalized: String,
}

/// A successful keyword lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    /// Canonical English name.
    pub canonical: String,
    /// Category the word resolved in.
    pub category: KeywordCategory,
}

/// Per-locale keyword table.
#[derive(Clone, Debug, Default)]
pub struct KeywordTable {
    /// Lowercased native word -> canonical name, per category.
    categories: HashMap<KeywordCategory, HashMap<String, String>>,
    /// Canonical name -> primary native word.
    primaries: HashMap<String, String>,
    /// Insertion order of entries, for listing.
    order: Vec<(KeywordCategory, String)>,
    english_fallback: bool,
}

impl KeywordTable {
    /// Creates an empty table with English fallback enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            english_fallback: true,
            ..Self::default()
        }
    }

    /// Enables or disables English fallback.
    #[must_use]
    pub fn with_english_fallback(mut self, enabled: bool) -> Self {
        self.english_fallback = enabled;
        self
    }

    /// Returns true if canonical English words resolve in this table.
    #[must_use]
    pub const fn english_fallback(&self) -> bool {
        self.english_fallback
    }

    /// Toggles English fallback.
    pub fn set_english_fallback(&mut self, enabled: bool) {
        self.english_fallback = enabled;
    }

    /// Registers a native word. The first word registered for a canonical
    /// name becomes its primary form.
    pub fn insert(
        &mut self,
        category: KeywordCategory,
        native: impl Into<String>,
        canonical: impl Into<String>,
    ) {
        let native = native.into();
        let canonical = canonical.into();
        let key = native.to_lowercase();
        self.primaries
            .entry(canonical.clone())
            .or_insert_with(|| native.clone());
        let map = self.categories.entry(category).or_default();
        if !map.contains_key(&key) {
            self.order.push((category, key.clone()));
        }
        map.insert(key, canonical);
    }

    /// Resolves a word against every category in priority order, then the
    /// English fallback.
    #[must_use]
    pub fn resolve(&self, word: &str) -> Option<Resolved> {
        let key = word.to_lowercase();
        CATEGORY_PRIORITY
            .iter()
            .find_map(|&category| self.lookup_native(category, &key))
            .or_else(|| self.lookup_fallback(&key))
    }

    /// Resolves a word in one category only.
    #[must_use]
    pub fn lookup(&self, category: KeywordCategory, word: &str) -> Option<String> {
        let key = word.to_lowercase();
        if let Some(found) = self.lookup_native(category, &key) {
            return Some(found.canonical);
        }
        if !self.english_fallback {
            return None;
        }
        if category.canonical_words().contains(&key.as_str())
            || (category == KeywordCategory::Events && UNIVERSAL_EVENTS.contains(&key.as_str()))
        {
            return Some(key);
        }
        None
    }

    fn lookup_native(&self, category: KeywordCategory, key: &str) -> Option<Resolved> {
        self.categories
            .get(&category)
            .and_then(|map| map.get(key))
            .map(|canonical| Resolved {
                canonical: canonical.clone(),
                category,
            })
    }

    fn lookup_fallback(&self, key: &str) -> Option<Resolved> {
        if !self.english_fallback {
            return None;
        }
        CATEGORY_PRIORITY
            .iter()
            .find(|category| category.canonical_words().contains(&key))
            .map(|&category| Resolved {
                canonical: key.to_string(),
                category,
            })
            .or_else(|| {
                UNIVERSAL_EVENTS.contains(&key).then(|| Resolved {
                    canonical: key.to_string(),
                    category: KeywordCategory::Events,
                })
            })
    }

    /// Returns true if the word is a command in this locale.
    #[must_use]
    pub fn is_command(&self, word: &str) -> bool {
        self.lookup(KeywordCategory::Commands, word).is_some()
    }

    /// Returns true if the word is an event name in this locale.
    #[must_use]
    pub fn is_event(&self, word: &str) -> bool {
        self.lookup(KeywordCategory::Events, word).is_some()
    }

    /// Returns true if the word is a logical or control-flow keyword.
    #[must_use]
    pub fn is_logical(&self, word: &str) -> bool {
        self.lookup(KeywordCategory::Logical, word).is_some()
    }

    /// Returns true if the word is a preposition or particle.
    #[must_use]
    pub fn is_modifier(&self, word: &str) -> bool {
        self.lookup(KeywordCategory::Modifiers, word).is_some()
    }

    /// Returns true if the word is a reference or constant.
    #[must_use]
    pub fn is_value(&self, word: &str) -> bool {
        self.lookup(KeywordCategory::Values, word).is_some()
    }

    /// Primary native word for a canonical name.
    #[must_use]
    pub fn to_locale(&self, canonical: &str) -> Option<&str> {
        self.primaries.get(canonical).map(String::as_str)
    }

    /// Primary native word for a canonical name, or the canonical name itself.
    #[must_use]
    pub fn to_locale_or_canonical<'a>(&'a self, canonical: &'a str) -> &'a str {
        self.to_locale(canonical).unwrap_or(canonical)
    }

    /// Entries of one category in registration order.
    #[must_use]
    pub fn entries(&self, category: KeywordCategory) -> Vec<KeywordEntry> {
        let Some(map) = self.categories.get(&category) else {
            return Vec::new();
        };
        self.order
            .iter()
            .filter(|(c, _)| *c == category)
            .filter_map(|(_, native)| {
                map.get(native).map(|normalized| KeywordEntry {
                    native: native.clone(),
                    normalized: normalized.clone(),
                })
            })
            .collect()
    }

    /// Native words that contain whitespace, longest first.
    #[must_use]
    pub fn phrases(&self) -> Vec<String> {
        let mut phrases: Vec<String> = self
            .order
            .iter()
            .filter(|(_, native)| native.contains(char::is_whitespace))
            .map(|(_, native)| native.clone())
            .collect();
        phrases.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        phrases.dedup();
        phrases
    }

    /// Number of registered native words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no native words are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spanish() -> KeywordTable {
        let mut table = KeywordTable::new();
        table.insert(KeywordCategory::Commands, "alternar", "toggle");
        table.insert(KeywordCategory::Commands, "alterna", "toggle");
        table.insert(KeywordCategory::Modifiers, "en", "on");
        table.insert(KeywordCategory::Logical, "a menos que", "unless");
        table.insert(KeywordCategory::Logical, "si no", "else");
        table
    }

    #[test]
    fn resolves_native_words() {
        let table = spanish();
        let resolved = table.resolve("Alternar").unwrap();
        assert_eq!(resolved.canonical, "toggle");
        assert_eq!(resolved.category, KeywordCategory::Commands);
        assert!(table.is_command("alterna"));
        assert!(table.is_modifier("en"));
    }

    #[test]
    fn priority_breaks_ties() {
        let mut table = KeywordTable::new().with_english_fallback(false);
        table.insert(KeywordCategory::Modifiers, "に", "to");
        table.insert(KeywordCategory::Temporal, "に", "until");
        let resolved = table.resolve("に").unwrap();
        assert_eq!(resolved.category, KeywordCategory::Temporal);
    }

    #[test]
    fn english_fallback_toggles() {
        let mut table = spanish();
        assert_eq!(table.resolve("toggle").unwrap().canonical, "toggle");
        assert!(table.is_event("mouseenter"));
        table.set_english_fallback(false);
        assert!(table.resolve("toggle").is_none());
        assert!(!table.is_event("mouseenter"));
    }

    #[test]
    fn first_registration_is_primary() {
        let table = spanish();
        assert_eq!(table.to_locale("toggle"), Some("alternar"));
        assert_eq!(table.to_locale_or_canonical("fetch"), "fetch");
    }

    #[test]
    fn phrases_sorted_longest_first() {
        let table = spanish();
        assert_eq!(table.phrases(), vec!["a menos que".to_string(), "si no".to_string()]);
        assert_eq!(table.entries(KeywordCategory::Commands).len(), 2);
    }
}
