//! Japanese verb normalization.
//!
//! Strips the polite, te-form, and suru-verb endings that follow a command
//! stem: `切り替えて` → `切り替え`, `追加します` → `追加`, `待って` → `待つ`.

use super::{MorphologicalNormalizer, Stem, SuffixRule, apply_suffix_rules, rule};

const RULES: &[SuffixRule] = &[
    rule("してください", "", 0.9),
    rule("てください", "", 0.85),
    rule("ください", "", 0.8),
    rule("します", "", 0.9),
    rule("する", "", 0.9),
    rule("して", "", 0.9),
    rule("した", "", 0.85),
    rule("しろ", "", 0.8),
    rule("ます", "", 0.85),
    rule("ます", "る", 0.75),
    rule("て", "", 0.85),
    rule("て", "る", 0.75),
    rule("た", "", 0.75),
    rule("って", "つ", 0.8),
    rule("って", "る", 0.75),
    rule("って", "う", 0.7),
    rule("して", "す", 0.75),
    rule("んで", "む", 0.7),
    rule("んで", "ぶ", 0.7),
    rule("いて", "く", 0.7),
];

/// Normalizer for Japanese.
#[derive(Clone, Copy, Debug, Default)]
pub struct JapaneseNormalizer;

impl MorphologicalNormalizer for JapaneseNormalizer {
    fn normalize(&self, word: &str) -> Vec<Stem> {
        apply_suffix_rules(word, RULES, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best(word: &str) -> String {
        JapaneseNormalizer.normalize(word)[0].stem.clone()
    }

    #[test]
    fn strips_te_form() {
        assert_eq!(best("切り替えて"), "切り替え");
        assert_eq!(best("追加して"), "追加");
    }

    #[test]
    fn strips_polite_form() {
        assert_eq!(best("追加します"), "追加");
        assert_eq!(best("表示してください"), "表示");
    }

    #[test]
    fn restores_godan_endings() {
        let stems = JapaneseNormalizer.normalize("待って");
        assert!(stems.iter().any(|s| s.stem == "待つ"));
    }

    #[test]
    fn dictionary_forms_pass_through() {
        assert!(JapaneseNormalizer.normalize("クリック").is_empty());
    }
}
