//! Korean verb normalization.
//!
//! Command verbs are noun stems followed by a form of 하다: `토글하다`,
//! `추가해`, `표시하세요`. Stripping the ending leaves the keyword stem.

use super::{MorphologicalNormalizer, Stem, SuffixRule, apply_suffix_rules, rule};

const RULES: &[SuffixRule] = &[
    rule("하십시오", "", 0.9),
    rule("하세요", "", 0.9),
    rule("합니다", "", 0.9),
    rule("해주세요", "", 0.9),
    rule("해요", "", 0.9),
    rule("하다", "", 0.9),
    rule("하기", "", 0.85),
    rule("하고", "", 0.85),
    rule("하면", "", 0.85),
    rule("했다", "", 0.85),
    rule("할때", "", 0.85),
    rule("해", "", 0.85),
    rule("시", "", 0.7),
    rule("다", "기", 0.7),
];

/// Normalizer for Korean.
#[derive(Clone, Copy, Debug, Default)]
pub struct KoreanNormalizer;

impl MorphologicalNormalizer for KoreanNormalizer {
    fn normalize(&self, word: &str) -> Vec<Stem> {
        apply_suffix_rules(word, RULES, 1)
    }
}
