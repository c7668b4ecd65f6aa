//! Tokenizer for natural-language hyperscript.
//!
//! The tokenizer converts source text into a stream of classified tokens for
//! one language. Lexing order at each position:
//!
//! 1. whitespace and `--` comments are skipped
//! 2. CSS selectors (`#id`, `.class`, `<tag/>`, `@attr`)
//! 3. quoted strings (an apostrophe glued to a word is a Turkish case suffix)
//! 4. URL-like literals (`/path`, `./x`, `https://...`)
//! 5. numbers, with a locale time suffix making a duration
//! 6. `:local` and `$global` variables
//! 7. multi-word keyword phrases, longest first
//! 8. words, classified by keyword table then normalizer
//! 9. operators and punctuation
//!
//! Characters that fit none of these are skipped.

use hyperfixi_foundation::{Span, value::format_number};

use crate::keywords::{KeywordCategory, Resolved};
use crate::locales::Segmentation;
use crate::morphology::Stem;
use crate::registry::Language;
use crate::script::{Script, continues_name, continues_word};
use crate::token::{Token, TokenKind, TokenStream};

const OPERATORS: &[&str] = &[
    "===", "!==", "==", "!=", "<=", ">=", "&&", "||", "+", "-", "*", "/", "%", "<", ">", "=",
    "&", "!",
];

/// Tokenizer for one language.
pub struct Tokenizer<'src, 'lang> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    language: &'lang Language,
    tokens: TokenStream,
}

impl<'src, 'lang> Tokenizer<'src, 'lang> {
    /// Creates a new tokenizer.
    #[must_use]
    pub fn new(source: &'src str, language: &'lang Language) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
            language,
            tokens: Vec::new(),
        }
    }

    /// Tokenizes all source text.
    #[must_use]
    pub fn tokenize(source: &str, language: &Language) -> TokenStream {
        Tokenizer::new(source, language).run()
    }

    /// Consumes the tokenizer and returns every token.
    #[must_use]
    pub fn run(mut self) -> TokenStream {
        loop {
            self.skip_trivia();
            if self.rest.is_empty() {
                break;
            }
            self.scan();
        }
        tracing::trace!(
            language = self.language.code(),
            count = self.tokens.len(),
            "tokenized"
        );
        self.tokens
    }

    /// Classifies one word the way the tokenizer would.
    #[must_use]
    pub fn classify(language: &Language, word: &str) -> (TokenKind, Option<String>) {
        let token = classify_word(language, word, Span::at_start());
        (token.kind, token.normalized)
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Consumes `len` bytes and returns their text and span.
    fn take(&mut self, len: usize) -> (&'src str, Span) {
        let start = self.position;
        let (line, column) = (self.line, self.column);
        let end = start + len;
        while self.position < end && !self.rest.is_empty() {
            self.advance();
        }
        let text = &self.source[start..self.position];
        (text, Span::new(start, self.position, line, column))
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// True if the next token would touch the previous one.
    fn touches_previous(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|last| last.span.end == self.position)
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek_char() {
                Some(c) if c.is_whitespace() => self.advance(),
                Some('-')
                    if self.peek_char_n(1) == Some('-')
                        && !self.touches_previous() =>
                {
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    fn scan(&mut self) {
        let Some(c) = self.peek_char() else {
            return;
        };
        let next = self.peek_char_n(1);
        match c {
            '#' | '.' if next.is_some_and(is_selector_start) && !self.member_access(c) => {
                self.scan_selector();
            }
            '@' if next.is_some_and(is_selector_start) => self.scan_selector(),
            '<' if next.is_some_and(|n| n.is_ascii_alphabetic()) && self.query_literal_len().is_some() => {
                self.scan_query_literal();
            }
            '\'' | '\u{2019}' if self.language.apostrophe_suffixes()
                && self.suffix_position()
                && next.is_some_and(char::is_alphabetic) =>
            {
                self.scan_apostrophe_suffix();
            }
            '"' | '\'' | '`' => self.scan_string(c),
            '/' if !self.touches_previous() && next.is_some_and(is_url_char) => self.scan_url(),
            '.' if !self.touches_previous()
                && (self.rest.starts_with("./") || self.rest.starts_with("../")) =>
            {
                self.scan_url();
            }
            'h' if self.rest.starts_with("http://") || self.rest.starts_with("https://") => {
                self.scan_url();
            }
            c if c.is_ascii_digit() => self.scan_number(),
            ':' | '$' if next.is_some_and(is_identifier_char) => self.scan_variable(),
            c if Script::of(c).is_word() => self.scan_word(),
            _ => self.scan_symbol(),
        }
    }

    /// An apostrophe glued to a value is a case suffix. After an opening
    /// bracket, a comma or an operator it starts a string.
    fn suffix_position(&self) -> bool {
        self.touches_previous()
            && self.tokens.last().is_some_and(|t| {
                !matches!(t.kind, TokenKind::Operator | TokenKind::Punctuation)
                    || t.text == ")"
                    || t.text == "]"
            })
    }

    /// `.name` glued to a word or `)` is member access, not a class selector.
    fn member_access(&self, c: char) -> bool {
        c == '.'
            && self.touches_previous()
            && self.tokens.last().is_some_and(|t| {
                matches!(t.kind, TokenKind::Identifier | TokenKind::Keyword)
                    || t.text == ")"
                    || t.text == "]"
            })
    }

    // -------------------------------------------------------------------------
    // Selectors and literals
    // -------------------------------------------------------------------------

    fn scan_selector(&mut self) {
        let bytes = self.rest.as_bytes();
        let mut len = 1;
        let mut depth = 0usize;
        while len < bytes.len() {
            let b = bytes[len];
            let continues = match b {
                b'[' => {
                    depth += 1;
                    true
                }
                b']' if depth > 0 => {
                    depth -= 1;
                    true
                }
                _ if depth > 0 => b != b'\n',
                b'.' | b'#' => bytes
                    .get(len + 1)
                    .is_some_and(|&n| is_selector_start(n as char)),
                b => is_selector_char(b as char),
            };
            if !continues {
                break;
            }
            len += 1;
        }
        let (text, span) = self.take(len);
        self.push(Token::new(text, TokenKind::Selector, span));
    }

    /// Length of a `<tag .../>` query literal at the cursor.
    fn query_literal_len(&self) -> Option<usize> {
        let end = self.rest.find("/>")?;
        let body = &self.rest[1..end];
        body.chars()
            .all(|c| !matches!(c, '<' | '\n'))
            .then_some(end + 2)
    }

    fn scan_query_literal(&mut self) {
        if let Some(len) = self.query_literal_len() {
            let (text, span) = self.take(len);
            self.push(Token::new(text, TokenKind::Selector, span));
        }
    }

    fn scan_string(&mut self, quote: char) {
        let mut len = quote.len_utf8();
        let mut escaped = false;
        for c in self.rest[len..].chars() {
            len += c.len_utf8();
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                break;
            }
        }
        let (text, span) = self.take(len);
        self.push(Token::new(text, TokenKind::Literal, span));
    }

    fn scan_url(&mut self) {
        let len = self
            .rest
            .find(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | ')' | ']'))
            .unwrap_or(self.rest.len());
        let (text, span) = self.take(len);
        self.push(Token::new(text, TokenKind::Literal, span));
    }

    fn scan_number(&mut self) {
        let bytes = self.rest.as_bytes();
        let mut len = 0;
        while len < bytes.len() && bytes[len].is_ascii_digit() {
            len += 1;
        }
        if len + 1 < bytes.len() && bytes[len] == b'.' && bytes[len + 1].is_ascii_digit() {
            len += 1;
            while len < bytes.len() && bytes[len].is_ascii_digit() {
                len += 1;
            }
        }
        let digits = &self.rest[..len];
        let amount = digits.parse::<f64>().unwrap_or_default();

        if let Some((unit_len, unit)) = self.language.match_time_unit(&self.rest[len..]) {
            let (text, span) = self.take(len + unit_len);
            let normalized = format!("{}{}", format_number(amount), unit.suffix());
            self.push(Token::new(text, TokenKind::Literal, span).with_normalized(normalized));
            return;
        }
        if let Some((gap, unit_len, unit)) = self.spaced_time_unit(len) {
            let (text, span) = self.take(len + gap + unit_len);
            let normalized = format!("{}{}", format_number(amount), unit.suffix());
            self.push(Token::new(text, TokenKind::Literal, span).with_normalized(normalized));
            return;
        }
        let (text, span) = self.take(len);
        self.push(Token::new(text, TokenKind::Literal, span));
    }

    /// `2 seconds`: a spelled-out unit after spaces on the same line.
    fn spaced_time_unit(
        &self,
        digits: usize,
    ) -> Option<(usize, usize, hyperfixi_foundation::DurationUnit)> {
        let after = &self.rest[digits..];
        let trimmed = after.trim_start_matches([' ', '\t']);
        let gap = after.len() - trimmed.len();
        if gap == 0 {
            return None;
        }
        let (unit_len, unit) = self.language.match_time_unit(trimmed)?;
        (trimmed[..unit_len].chars().count() > 1).then_some((gap, unit_len, unit))
    }

    /// `:name` or `$name`. The name ends where its script changes, so a
    /// particle glued to it (`:countを`, `:n를`) is scanned separately.
    fn scan_variable(&mut self) {
        let name = &self.rest[1..];
        let Some(first) = name.chars().next() else {
            return self.scan_symbol();
        };
        let script = Script::of(first);
        let len = 1 + name
            .char_indices()
            .skip(1)
            .find(|&(_, c)| !continues_name(script, c))
            .map_or(name.len(), |(i, _)| i);
        let (text, span) = self.take(len);
        self.push(Token::new(text, TokenKind::Identifier, span));
    }

    fn scan_apostrophe_suffix(&mut self) {
        let first = self.peek_char().map_or(1, char::len_utf8);
        let len = first
            + self.rest[first..]
                .find(|c: char| !c.is_alphabetic())
                .unwrap_or(self.rest.len() - first);
        let (text, span) = self.take(len);
        let canonical_text = text.replace('\u{2019}', "'");
        let mut token = Token::new(text, TokenKind::Particle, span);
        if let Some(resolved) = self.language.resolve(&canonical_text) {
            token = token.with_normalized(resolved.canonical);
        }
        self.push(token);
    }

    // -------------------------------------------------------------------------
    // Words
    // -------------------------------------------------------------------------

    fn scan_word(&mut self) {
        if let Some(len) = self.match_phrase() {
            let (text, span) = self.take(len);
            let token = classify_word(self.language, text, span);
            self.push(token);
            return;
        }

        let Some(first) = self.peek_char() else {
            return;
        };
        let script = Script::of(first);
        if script.is_japanese() && self.language.segmentation() == Segmentation::Unspaced {
            self.scan_unspaced();
            return;
        }

        let rest = self.rest;
        let len = rest
            .char_indices()
            .skip(1)
            .find(|&(_, c)| !continues_word(script, c))
            .map_or(rest.len(), |(i, _)| i);
        // A trailing hyphen belongs to the next token.
        let len = len - usize::from(rest[..len].ends_with('-'));
        let word = &rest[..len];

        if let Some(stem_len) = self.particle_split(word) {
            let (stem, stem_span) = self.take(stem_len);
            let token = classify_word(self.language, stem, stem_span);
            self.push(token);
            let (particle, span) = self.take(len - stem_len);
            let token = classify_word(self.language, particle, span);
            self.push(token);
            return;
        }

        let (text, span) = self.take(len);
        let token = classify_word(self.language, text, span);
        self.push(token);
    }

    /// Longest multi-word keyword at the cursor, ending on a word boundary.
    fn match_phrase(&self) -> Option<usize> {
        self.language
            .keywords
            .phrases()
            .iter()
            .find_map(|phrase| {
                let len = prefix_len_ignore_case(self.rest, phrase)?;
                let boundary = self.rest[len..]
                    .chars()
                    .next()
                    .is_none_or(|c| !Script::of(c).is_word());
                boundary.then_some(len)
            })
    }

    /// Byte length of the stem if `word` ends in a splittable particle.
    fn particle_split(&self, word: &str) -> Option<usize> {
        if self.language.suffix_particles().is_empty()
            || self.language.resolve(word).is_some()
            || self.language.resolve_stem(word).is_some()
        {
            return None;
        }
        self.language
            .suffix_particles()
            .iter()
            .find(|p| word.len() > p.len() && word.ends_with(p.as_str()))
            .map(|p| word.len() - p.len())
    }

    /// Segments a run of Japanese script with no spaces.
    fn scan_unspaced(&mut self) {
        let run_len = self
            .rest
            .char_indices()
            .find(|&(_, c)| !Script::of(c).is_japanese())
            .map_or(self.rest.len(), |(i, _)| i);
        let mut remaining = run_len;
        while remaining > 0 {
            let piece = &self.rest[..remaining];
            let len = segment_unspaced(self.language, piece).max(
                piece.chars().next().map_or(remaining, char::len_utf8),
            );
            let (text, span) = self.take(len);
            let token = classify_word(self.language, text, span);
            self.push(token);
            remaining -= len;
        }
    }

    // -------------------------------------------------------------------------
    // Operators and punctuation
    // -------------------------------------------------------------------------

    fn scan_symbol(&mut self) {
        if let Some(op) = OPERATORS.iter().find(|op| self.rest.starts_with(**op)) {
            let (text, span) = self.take(op.len());
            self.push(Token::new(text, TokenKind::Operator, span));
            return;
        }
        match self.peek_char() {
            Some(c @ ('(' | ')' | '[' | ']' | '{' | '}' | ',' | '.' | ';' | ':' | '?')) => {
                let (text, span) = self.take(c.len_utf8());
                self.push(Token::new(text, TokenKind::Punctuation, span));
            }
            Some(c) => {
                tracing::trace!(character = %c, line = self.line, column = self.column, "skipping");
                self.advance();
            }
            None => {}
        }
    }
}

// =============================================================================
// Classification
// =============================================================================

/// Classifies a word: exact keyword, then normalized stem, then identifier.
fn classify_word(language: &Language, text: &str, span: Span) -> Token {
    if let Some(resolved) = language.resolve(text) {
        return keyword_token(text, span, resolved, None);
    }
    if let Some((resolved, stem)) = language.resolve_stem(text) {
        return keyword_token(text, span, resolved, Some(stem));
    }
    Token::new(text, TokenKind::Identifier, span)
}

fn keyword_token(text: &str, span: Span, resolved: Resolved, stem: Option<Stem>) -> Token {
    let kind = match resolved.category {
        KeywordCategory::Modifiers => TokenKind::Particle,
        KeywordCategory::Values if matches!(resolved.canonical.as_str(), "true" | "false" | "null") => {
            TokenKind::Literal
        }
        _ => TokenKind::Keyword,
    };
    let token = Token::new(text, kind, span)
        .with_normalized(resolved.canonical)
        .with_category(resolved.category);
    match stem {
        Some(stem) => token.with_stem(stem.stem, stem.confidence),
        None => token,
    }
}

/// Returns true for particle-like words that end a Japanese segment.
fn is_particle(language: &Language, word: &str) -> bool {
    language.resolve(word).is_some_and(|r| {
        matches!(
            r.category,
            KeywordCategory::Modifiers | KeywordCategory::Temporal
        )
    })
}

/// Length in bytes of the next segment of unspaced Japanese text.
///
/// Dictionary words win (longest first). A dictionary word may absorb
/// trailing hiragana when the longer form still normalizes to a keyword
/// (`切り替えて`). Unknown text splits at script changes and before
/// particles.
fn segment_unspaced(language: &Language, piece: &str) -> usize {
    let particle_at = |offset: usize| {
        language
            .lexicon()
            .iter()
            .any(|w| piece[offset..].starts_with(w.as_str()) && is_particle(language, w))
    };
    let word_at = |offset: usize| {
        language
            .lexicon()
            .iter()
            .any(|w| piece[offset..].starts_with(w.as_str()))
    };
    let hiragana_tail = |from: usize| {
        let mut end = from;
        for c in piece[from..].chars() {
            if Script::of(c) != Script::Hiragana || particle_at(end) {
                break;
            }
            end += c.len_utf8();
        }
        end
    };

    if let Some(word) = language
        .lexicon()
        .iter()
        .find(|w| piece.starts_with(w.as_str()))
    {
        let len = word.len();
        if is_particle(language, word) {
            return len;
        }
        let extended = hiragana_tail(len);
        if extended > len {
            let candidate = &piece[..extended];
            if language.resolve(candidate).is_some() || language.resolve_stem(candidate).is_some()
            {
                return extended;
            }
        }
        return len;
    }

    let mut chars = piece.char_indices();
    let Some((_, first)) = chars.next() else {
        return 0;
    };
    let script = Script::of(first);
    let mut end = first.len_utf8();
    for (i, c) in chars {
        if Script::of(c) != script || word_at(i) {
            break;
        }
        end = i + c.len_utf8();
    }
    match script {
        Script::Han | Script::Katakana => hiragana_tail(end),
        _ => end,
    }
}

// =============================================================================
// Character classes
// =============================================================================

fn is_selector_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-'
}

fn is_selector_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | '?' | '#' | '~')
}

/// Byte length of `prefix` at the start of `text`, comparing
/// case-insensitively.
fn prefix_len_ignore_case(text: &str, prefix: &str) -> Option<usize> {
    let mut len = 0;
    let mut text_chars = text.chars();
    for p in prefix.chars() {
        let t = text_chars.next()?;
        if !t.to_lowercase().eq(p.to_lowercase()) {
            return None;
        }
        len += t.len_utf8();
    }
    Some(len)
}
