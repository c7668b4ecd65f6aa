//! Morphological normalizers.
//!
//! Inflected languages attach suffixes (and, in Arabic, prefixes) to verbs
//! and nouns. A normalizer proposes dictionary forms for a surface word; the
//! tokenizer accepts the first proposal that is a known keyword and clears
//! [`STEM_CONFIDENCE_THRESHOLD`](crate::STEM_CONFIDENCE_THRESHOLD).

mod arabic;
mod japanese;
mod korean;
mod romance;
mod turkish;

use std::fmt;

pub use arabic::ArabicNormalizer;
pub use japanese::JapaneseNormalizer;
pub use korean::KoreanNormalizer;
pub use romance::{ItalianNormalizer, SpanishNormalizer};
pub use turkish::TurkishNormalizer;

/// A candidate dictionary form.
#[derive(Clone, Debug, PartialEq)]
pub struct Stem {
    /// Proposed dictionary form.
    pub stem: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}

impl Stem {
    /// Creates a candidate.
    #[must_use]
    pub fn new(stem: impl Into<String>, confidence: f64) -> Self {
        Self {
            stem: stem.into(),
            confidence,
        }
    }
}

/// Proposes dictionary forms for inflected words.
pub trait MorphologicalNormalizer: fmt::Debug + Send + Sync {
    /// Candidate stems for `word`, most confident first. Never includes the
    /// word itself.
    fn normalize(&self, word: &str) -> Vec<Stem>;
}

/// Replace `suffix` with `replacement`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SuffixRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
    pub confidence: f64,
}

pub(crate) const fn rule(suffix: &'static str, replacement: &'static str, confidence: f64) -> SuffixRule {
    SuffixRule {
        suffix,
        replacement,
        confidence,
    }
}

/// Applies every matching rule that leaves at least `min_stem_chars` of
/// the original word, most confident first.
pub(crate) fn apply_suffix_rules(word: &str, rules: &[SuffixRule], min_stem_chars: usize) -> Vec<Stem> {
    let mut stems: Vec<Stem> = rules
        .iter()
        .filter_map(|rule| {
            let base = word.strip_suffix(rule.suffix)?;
            if base.chars().count() < min_stem_chars {
                return None;
            }
            let stem = format!("{base}{}", rule.replacement);
            (stem != word).then(|| Stem::new(stem, rule.confidence))
        })
        .collect();
    sort_candidates(&mut stems);
    stems
}

/// Sorts by descending confidence, dropping duplicate stems.
pub(crate) fn sort_candidates(stems: &mut Vec<Stem>) {
    stems.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    let mut seen = std::collections::HashSet::new();
    stems.retain(|s| seen.insert(s.stem.clone()));
}
