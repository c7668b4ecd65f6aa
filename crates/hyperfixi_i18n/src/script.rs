//! Unicode script classification.
//!
//! Japanese text has no spaces, so word boundaries fall where the script
//! changes. The same classifier decides which characters can appear in a word
//! for every other language.

/// The writing system a character belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Script {
    /// Latin letters, including accented forms, plus `_` and `-`.
    Latin,
    /// Japanese hiragana.
    Hiragana,
    /// Japanese katakana, including the prolonged sound mark.
    Katakana,
    /// CJK ideographs (kanji).
    Han,
    /// Korean hangul syllables and jamo.
    Hangul,
    /// Arabic letters and diacritics.
    Arabic,
    /// ASCII digits.
    Digit,
    /// Anything else.
    Other,
}

impl Script {
    /// Classifies a character.
    #[must_use]
    pub fn of(c: char) -> Self {
        match c {
            '0'..='9' => Self::Digit,
            'a'..='z' | 'A'..='Z' | '_' => Self::Latin,
            '\u{3040}'..='\u{309F}' => Self::Hiragana,
            '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' | '\u{FF66}'..='\u{FF9F}' => {
                Self::Katakana
            }
            '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{3005}' => Self::Han,
            '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}' => {
                Self::Hangul
            }
            '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}' | '\u{FB50}'..='\u{FDFF}' => {
                Self::Arabic
            }
            c if c.is_alphabetic() => Self::Latin,
            _ => Self::Other,
        }
    }

    /// Returns true for scripts that make up words.
    #[must_use]
    pub const fn is_word(self) -> bool {
        !matches!(self, Self::Other)
    }

    /// Returns true for the Japanese scripts.
    #[must_use]
    pub const fn is_japanese(self) -> bool {
        matches!(self, Self::Hiragana | Self::Katakana | Self::Han)
    }
}

/// Returns true if `c` may continue a word that started with `first`.
///
/// Latin words may contain digits and inner hyphens (`my-event`); other
/// scripts continue only within their own script.
#[must_use]
pub fn continues_word(first: Script, c: char) -> bool {
    let script = Script::of(c);
    match first {
        Script::Latin => matches!(script, Script::Latin | Script::Digit) || c == '-',
        Script::Hiragana | Script::Katakana | Script::Han => script.is_japanese(),
        other => script == other,
    }
}

/// Returns true if `c` may continue a variable name that started with
/// `first`.
///
/// Names keep to a single script. Digits, `_` and `-` continue any name.
#[must_use]
pub fn continues_name(first: Script, c: char) -> bool {
    let script = Script::of(c);
    script == first || script == Script::Digit || matches!(c, '_' | '-')
}
