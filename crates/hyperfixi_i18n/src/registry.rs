//! Language registry.
//!
//! A [`Language`] bundles everything needed to tokenize and pattern-match one
//! locale. The [`LanguageRegistry`] holds the built-in locales and accepts
//! new ones (or new words for existing ones) at runtime.

use std::collections::BTreeMap;
use std::sync::Arc;

use hyperfixi_foundation::{DurationUnit, Error, Result};

use crate::STEM_CONFIDENCE_THRESHOLD;
use crate::keywords::{KeywordCategory, KeywordTable, Resolved};
use crate::locales::{self, LocaleData, Segmentation};
use crate::morphology::{MorphologicalNormalizer, Stem};
use crate::profile::{LanguageProfile, MarkerForms};

// =============================================================================
// Language
// =============================================================================

/// One registered locale.
#[derive(Clone, Debug)]
pub struct Language {
    /// Word order, direction, verbs, and role markers.
    pub profile: LanguageProfile,
    /// Native word → canonical keyword table.
    pub keywords: KeywordTable,
    normalizer: Option<Arc<dyn MorphologicalNormalizer>>,
    segmentation: Segmentation,
    /// Duration suffixes, longest first.
    time_units: Vec<(String, DurationUnit)>,
    /// Particles split off word ends, longest first.
    suffix_particles: Vec<String>,
    apostrophe_suffixes: bool,
    /// Single-word native forms, longest first, for unspaced segmentation.
    lexicon: Vec<String>,
}

impl Language {
    /// Creates a language with an empty keyword table.
    #[must_use]
    pub fn new(profile: LanguageProfile) -> Self {
        Self {
            profile,
            keywords: KeywordTable::new(),
            normalizer: None,
            segmentation: Segmentation::Whitespace,
            time_units: Vec::new(),
            suffix_particles: Vec::new(),
            apostrophe_suffixes: false,
            lexicon: Vec::new(),
        }
    }

    /// Builds a language from static locale data.
    #[must_use]
    pub fn from_locale(data: &LocaleData) -> Self {
        let mut profile =
            LanguageProfile::new(data.code, data.name, data.word_order, data.direction);
        for (role, primary, alternatives) in data.markers {
            profile
                .role_markers
                .insert((*role).to_string(), MarkerForms::new(primary, alternatives));
        }
        profile.event_marker = MarkerForms::new(data.event_marker.0, data.event_marker.1);
        profile.source_marker = MarkerForms::new(data.source_marker.0, data.source_marker.1);

        let mut language = Self::new(profile);
        language.segmentation = data.segmentation;
        language.apostrophe_suffixes = data.apostrophe_suffixes;
        language.normalizer = data.normalizer.map(|make| Arc::from(make()));
        language.time_units = data
            .time_units
            .iter()
            .map(|(suffix, unit)| ((*suffix).to_string(), *unit))
            .collect();
        language.suffix_particles = data
            .suffix_particles
            .iter()
            .map(|p| (*p).to_string())
            .collect();
        for (category, canonical, natives) in data.keywords {
            for native in *natives {
                language.add_keyword(*category, native, canonical);
            }
        }
        language.sort_tables();
        language
    }

    /// ISO 639-1 code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.profile.code
    }

    /// Word boundary strategy.
    #[must_use]
    pub const fn segmentation(&self) -> Segmentation {
        self.segmentation
    }

    /// Sets the morphological normalizer.
    pub fn set_normalizer(&mut self, normalizer: Arc<dyn MorphologicalNormalizer>) {
        self.normalizer = Some(normalizer);
    }

    /// Returns the normalizer, if the language has one.
    #[must_use]
    pub fn normalizer(&self) -> Option<&dyn MorphologicalNormalizer> {
        self.normalizer.as_deref()
    }

    /// Duration suffixes, longest first, canonical suffixes last.
    #[must_use]
    pub fn time_units(&self) -> &[(String, DurationUnit)] {
        &self.time_units
    }

    /// Particles split off word ends.
    #[must_use]
    pub fn suffix_particles(&self) -> &[String] {
        &self.suffix_particles
    }

    /// Returns true if apostrophe-attached suffixes are particles.
    #[must_use]
    pub const fn apostrophe_suffixes(&self) -> bool {
        self.apostrophe_suffixes
    }

    /// Single-word native forms, longest first.
    #[must_use]
    pub fn lexicon(&self) -> &[String] {
        &self.lexicon
    }

    /// Registers a native word. Command words also become verb forms in the
    /// profile, so schemas match them.
    pub fn add_keyword(&mut self, category: KeywordCategory, native: &str, canonical: &str) {
        self.keywords.insert(category, native, canonical);
        if category == KeywordCategory::Commands {
            self.profile.add_action_form(canonical, native);
        }
        if !native.contains(char::is_whitespace) && !self.lexicon.iter().any(|w| w == native) {
            self.lexicon.push(native.to_string());
        }
    }

    /// Adds a duration suffix.
    pub fn add_time_unit(&mut self, suffix: &str, unit: DurationUnit) {
        self.time_units.push((suffix.to_string(), unit));
        self.sort_tables();
    }

    fn sort_tables(&mut self) {
        let by_len_desc = |a: &String, b: &String| b.chars().count().cmp(&a.chars().count());
        self.lexicon.sort_by(by_len_desc);
        self.suffix_particles.sort_by(by_len_desc);
        self.time_units
            .sort_by(|(a, _), (b, _)| b.chars().count().cmp(&a.chars().count()));
    }

    /// Resolves a word exactly, without morphology.
    #[must_use]
    pub fn resolve(&self, word: &str) -> Option<Resolved> {
        self.keywords.resolve(word)
    }

    /// Resolves a word through the normalizer: the first candidate stem that
    /// differs from the word, clears the confidence threshold, and is a
    /// keyword.
    #[must_use]
    pub fn resolve_stem(&self, word: &str) -> Option<(Resolved, Stem)> {
        let normalizer = self.normalizer.as_ref()?;
        normalizer
            .normalize(word)
            .into_iter()
            .filter(|stem| stem.stem != word && stem.confidence >= STEM_CONFIDENCE_THRESHOLD)
            .find_map(|stem| self.keywords.resolve(&stem.stem).map(|r| (r, stem)))
    }

    /// Matches a duration suffix at the start of `rest`.
    #[must_use]
    pub fn match_time_unit(&self, rest: &str) -> Option<(usize, DurationUnit)> {
        let locale = self.time_units.iter().map(|(s, u)| (s.as_str(), *u));
        let canonical = [
            ("ms", DurationUnit::Ms),
            ("s", DurationUnit::S),
            ("m", DurationUnit::M),
            ("h", DurationUnit::H),
        ];
        locale
            .chain(canonical)
            .find(|(suffix, _)| {
                rest.starts_with(suffix) && !continues_latin(suffix, &rest[suffix.len()..])
            })
            .map(|(suffix, unit)| (suffix.len(), unit))
    }
}

/// A Latin suffix must end at a word boundary (`5s` but not `5sec` as `s`).
fn continues_latin(suffix: &str, after: &str) -> bool {
    let suffix_latin = suffix.chars().last().is_some_and(|c| c.is_ascii_alphabetic());
    let next_latin = after
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() && !crate::script::Script::of(c).is_japanese());
    suffix_latin && next_latin
}

// =============================================================================
// LanguageRegistry
// =============================================================================

/// All registered languages, keyed by code.
#[derive(Clone, Debug, Default)]
pub struct LanguageRegistry {
    languages: BTreeMap<String, Language>,
}

impl LanguageRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in locale.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for data in locales::builtin() {
            registry.register(Language::from_locale(data));
        }
        registry
    }

    /// Registers (or replaces) a language.
    pub fn register(&mut self, language: Language) {
        tracing::debug!(code = language.code(), "registered language");
        self.languages.insert(language.code().to_string(), language);
    }

    /// Looks up a language.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLanguage` if the code is not registered.
    pub fn get(&self, code: &str) -> Result<&Language> {
        self.languages
            .get(code)
            .ok_or_else(|| Error::unknown_language(code))
    }

    /// Looks up a language mutably.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLanguage` if the code is not registered.
    pub fn get_mut(&mut self, code: &str) -> Result<&mut Language> {
        self.languages
            .get_mut(code)
            .ok_or_else(|| Error::unknown_language(code))
    }

    /// Adds a native word to a registered language.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLanguage` if the code is not registered.
    pub fn register_keyword(
        &mut self,
        code: &str,
        category: KeywordCategory,
        native: &str,
        canonical: &str,
    ) -> Result<()> {
        let language = self.get_mut(code)?;
        language.add_keyword(category, native, canonical);
        language.sort_tables();
        Ok(())
    }

    /// Adds a command verb to a registered language.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLanguage` if the code is not registered.
    pub fn register_command_keyword(&mut self, code: &str, native: &str, canonical: &str) -> Result<()> {
        self.register_keyword(code, KeywordCategory::Commands, native, canonical)
    }

    /// Returns true if the code is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    /// Registered codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Iterates over registered languages.
    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.values()
    }
}
