//! Arabic normalization.
//!
//! Removes diacritics and tatweel, then proposes forms with the attached
//! conjunction (`و`, `ف`), preposition (`ب`, `ل`), and article (`ال`)
//! prefixes removed.

use super::{MorphologicalNormalizer, Stem, sort_candidates};

const PREFIXES: &[(&str, f64)] = &[
    ("وال", 0.8),
    ("فال", 0.8),
    ("بال", 0.8),
    ("لل", 0.8),
    ("ال", 0.85),
    ("و", 0.85),
    ("ف", 0.85),
    ("ب", 0.75),
    ("ل", 0.75),
];

/// Normalizer for Arabic.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArabicNormalizer;

impl MorphologicalNormalizer for ArabicNormalizer {
    fn normalize(&self, word: &str) -> Vec<Stem> {
        let bare = strip_diacritics(word);
        let mut stems = Vec::new();
        let base_confidence = if bare == word {
            1.0
        } else {
            stems.push(Stem::new(bare.clone(), 0.95));
            0.95
        };
        for (prefix, confidence) in PREFIXES {
            if let Some(rest) = bare.strip_prefix(prefix) {
                if rest.chars().count() >= 2 {
                    stems.push(Stem::new(rest, confidence * base_confidence));
                }
            }
        }
        sort_candidates(&mut stems);
        stems
    }
}

/// Removes harakat, shadda, sukun, superscript alef, and tatweel.
#[must_use]
pub fn strip_diacritics(word: &str) -> String {
    word.chars()
        .filter(|c| !matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}' | '\u{0640}'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_shadda() {
        let stems = ArabicNormalizer.normalize("بدّل");
        assert_eq!(stems[0].stem, "بدل");
    }

    #[test]
    fn strips_article_and_conjunction() {
        let stems = ArabicNormalizer.normalize("النقر");
        assert!(stems.iter().any(|s| s.stem == "نقر"));
        let stems = ArabicNormalizer.normalize("وأضف");
        assert!(stems.iter().any(|s| s.stem == "أضف"));
    }

    #[test]
    fn bare_words_have_no_candidates() {
        assert!(ArabicNormalizer.normalize("من").is_empty());
    }
}
