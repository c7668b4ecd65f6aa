//! Spanish and Italian verb normalization.
//!
//! Maps imperative, gerund, and participle forms back to the infinitive,
//! which is how command verbs are registered.

use super::{MorphologicalNormalizer, Stem, SuffixRule, apply_suffix_rules, rule};

const SPANISH: &[SuffixRule] = &[
    rule("ando", "ar", 0.85),
    rule("iendo", "er", 0.75),
    rule("iendo", "ir", 0.75),
    rule("ado", "ar", 0.8),
    rule("ido", "er", 0.7),
    rule("ido", "ir", 0.7),
    rule("a", "ar", 0.8),
    rule("e", "er", 0.75),
    rule("e", "ir", 0.7),
    rule("e", "ar", 0.7),
    rule("ad", "ar", 0.8),
    rule("ed", "er", 0.8),
];

const ITALIAN: &[SuffixRule] = &[
    rule("ando", "are", 0.85),
    rule("endo", "ere", 0.75),
    rule("endo", "ire", 0.7),
    rule("ato", "are", 0.8),
    rule("uto", "ere", 0.7),
    rule("a", "are", 0.8),
    rule("i", "ere", 0.75),
    rule("i", "ire", 0.7),
    rule("i", "are", 0.7),
    rule("ate", "are", 0.8),
    rule("ete", "ere", 0.8),
];

/// Normalizer for Spanish.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpanishNormalizer;

impl MorphologicalNormalizer for SpanishNormalizer {
    fn normalize(&self, word: &str) -> Vec<Stem> {
        apply_suffix_rules(&strip_accents(&word.to_lowercase()), SPANISH, 3)
    }
}

/// Normalizer for Italian.
#[derive(Clone, Copy, Debug, Default)]
pub struct ItalianNormalizer;

impl MorphologicalNormalizer for ItalianNormalizer {
    fn normalize(&self, word: &str) -> Vec<Stem> {
        apply_suffix_rules(&word.to_lowercase(), ITALIAN, 3)
    }
}

/// Removes the acute accents that imperatives gain (`envía` → `envia`).
fn strip_accents(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}
