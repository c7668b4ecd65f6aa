//! Turkish normalization.
//!
//! Strips infinitive, polite imperative, and temporal-converb suffixes:
//! `değiştirin` → `değiştir`, `tıklandığında` → `tıkla`, `tıklama` → `tıkla`.

use super::{MorphologicalNormalizer, Stem, SuffixRule, apply_suffix_rules, rule};

const RULES: &[SuffixRule] = &[
    rule("ndığında", "", 0.85),
    rule("ndiğinde", "", 0.85),
    rule("nduğunda", "", 0.85),
    rule("ndüğünde", "", 0.85),
    rule("dığında", "", 0.8),
    rule("diğinde", "", 0.8),
    rule("yiniz", "", 0.85),
    rule("yınız", "", 0.85),
    rule("iniz", "", 0.85),
    rule("ınız", "", 0.85),
    rule("mek", "", 0.85),
    rule("mak", "", 0.85),
    rule("yin", "", 0.8),
    rule("yın", "", 0.8),
    rule("in", "", 0.75),
    rule("ın", "", 0.75),
    rule("un", "", 0.75),
    rule("ün", "", 0.75),
    rule("ma", "", 0.75),
    rule("me", "", 0.75),
    rule("sın", "", 0.7),
    rule("sin", "", 0.7),
];

/// Normalizer for Turkish.
#[derive(Clone, Copy, Debug, Default)]
pub struct TurkishNormalizer;

impl MorphologicalNormalizer for TurkishNormalizer {
    fn normalize(&self, word: &str) -> Vec<Stem> {
        apply_suffix_rules(&word.to_lowercase(), RULES, 2)
    }
}
