//! Built-in locale data.
//!
//! Each locale is a static [`LocaleData`] table. The registry turns it into a
//! [`Language`](crate::Language) with a keyword table, profile, and
//! normalizer.

mod ar;
mod en;
mod es;
mod it;
mod ja;
mod ko;
mod tr;

use hyperfixi_foundation::DurationUnit;

use crate::keywords::KeywordCategory;
use crate::morphology::{
    ArabicNormalizer, ItalianNormalizer, JapaneseNormalizer, KoreanNormalizer,
    MorphologicalNormalizer, SpanishNormalizer, TurkishNormalizer,
};
use crate::profile::{Direction, WordOrder};

/// `(category, canonical, native forms)`; the first native form is primary.
pub type KeywordRow = (KeywordCategory, &'static str, &'static [&'static str]);

/// `(role, primary marker, alternative markers)`.
pub type MarkerRow = (&'static str, &'static str, &'static [&'static str]);

/// How the tokenizer finds word boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segmentation {
    /// Words are separated by whitespace and punctuation.
    Whitespace,
    /// No spaces between words; segment by dictionary and script changes.
    Unspaced,
}

/// Static description of one locale.
#[derive(Debug)]
pub struct LocaleData {
    /// ISO 639-1 code.
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    /// Constituent order.
    pub word_order: WordOrder,
    /// Writing direction.
    pub direction: Direction,
    /// Word boundary strategy.
    pub segmentation: Segmentation,
    /// Keyword rows.
    pub keywords: &'static [KeywordRow],
    /// Default role markers.
    pub markers: &'static [MarkerRow],
    /// Event handler marker forms.
    pub event_marker: (&'static str, &'static [&'static str]),
    /// Event source marker forms.
    pub source_marker: (&'static str, &'static [&'static str]),
    /// Duration suffixes beyond the canonical `ms`/`s`/`m`/`h`.
    pub time_units: &'static [(&'static str, DurationUnit)],
    /// Particles split off the end of a word (Korean).
    pub suffix_particles: &'static [&'static str],
    /// Apostrophe-attached case suffixes are particles (Turkish).
    pub apostrophe_suffixes: bool,
    /// Normalizer constructor.
    pub normalizer: Option<fn() -> Box<dyn MorphologicalNormalizer>>,
}

/// All built-in locales.
#[must_use]
pub fn builtin() -> [&'static LocaleData; 7] {
    [
        &en::LOCALE,
        &es::LOCALE,
        &it::LOCALE,
        &ja::LOCALE,
        &ko::LOCALE,
        &tr::LOCALE,
        &ar::LOCALE,
    ]
}

/// Looks up a built-in locale by code.
#[must_use]
pub fn find(code: &str) -> Option<&'static LocaleData> {
    builtin().into_iter().find(|locale| locale.code == code)
}

fn japanese() -> Box<dyn MorphologicalNormalizer> {
    Box::new(JapaneseNormalizer)
}

fn korean() -> Box<dyn MorphologicalNormalizer> {
    Box::new(KoreanNormalizer)
}

fn turkish() -> Box<dyn MorphologicalNormalizer> {
    Box::new(TurkishNormalizer)
}

fn spanish() -> Box<dyn MorphologicalNormalizer> {
    Box::new(SpanishNormalizer)
}

fn italian() -> Box<dyn MorphologicalNormalizer> {
    Box::new(ItalianNormalizer)
}

fn arabic() -> Box<dyn MorphologicalNormalizer> {
    Box::new(ArabicNormalizer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_covers_every_command() {
        for locale in builtin() {
            for command in KeywordCategory::Commands.canonical_words() {
                let covered = locale
                    .keywords
                    .iter()
                    .any(|(c, canonical, _)| *c == KeywordCategory::Commands && canonical == command);
                assert!(covered, "{} has no word for {command}", locale.code);
            }
        }
    }

    #[test]
    fn rows_have_native_forms() {
        for locale in builtin() {
            for (_, canonical, natives) in locale.keywords {
                assert!(!natives.is_empty(), "{}: {canonical}", locale.code);
            }
        }
    }

    #[test]
    fn find_by_code() {
        assert_eq!(find("ja").map(|l| l.word_order), Some(WordOrder::Sov));
        assert_eq!(find("ar").map(|l| l.direction), Some(Direction::Rtl));
        assert!(find("xx").is_none());
    }
}
