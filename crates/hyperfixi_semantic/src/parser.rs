//! The semantic parser.
//!
//! Splits a token stream into statements (event handlers, blocks, and command
//! clauses) and matches each clause against the registered schemas' patterns
//! for the source language. Block structure is recognized through canonical
//! logical keywords, so `if`, `si`, and `もし` all open the same block.

use hyperfixi_foundation::{Error, ErrorContext, Result};
use hyperfixi_i18n::{
    KeywordCategory, Language, LanguageRegistry, Token, TokenKind, Tokenizer, WordOrder,
};

use crate::expr::{scan_value, to_value};
use crate::matcher::SemanticMatcher;
use crate::node::{EventModifiers, NodeMetadata, SemanticNode};
use crate::pattern::{Pattern, PatternGenerator};
use crate::renderer::Renderer;
use crate::role::SemanticRole;
use crate::schema::{CommandSchema, SchemaRegistry};
use crate::value::{SemanticValue, ValueType};

/// Default minimum confidence for accepting a match.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Interval used for `debounce`/`throttle` written without one.
const DEFAULT_INTERVAL_MS: u64 = 300;

/// Words that open or close blocks and so end a command clause.
const BLOCK_WORDS: &[&str] = &["end", "else", "if", "unless", "repeat", "while", "for"];

// =============================================================================
// SemanticParser
// =============================================================================

/// Parses natural-language hyperscript into semantic nodes.
#[derive(Clone, Debug)]
pub struct SemanticParser {
    languages: LanguageRegistry,
    schemas: SchemaRegistry,
    threshold: f64,
}

impl Default for SemanticParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SemanticParser {
    /// Creates a parser with the built-in languages and standard schemas.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registries(LanguageRegistry::with_builtin(), SchemaRegistry::with_standard())
    }

    /// Creates a parser from explicit registries.
    #[must_use]
    pub const fn with_registries(languages: LanguageRegistry, schemas: SchemaRegistry) -> Self {
        Self {
            languages,
            schemas,
            threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }

    /// Sets the minimum confidence for a clause match.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// The confidence threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Registered languages.
    #[must_use]
    pub const fn languages(&self) -> &LanguageRegistry {
        &self.languages
    }

    /// Registered languages, mutably.
    pub fn languages_mut(&mut self) -> &mut LanguageRegistry {
        &mut self.languages
    }

    /// Registered schemas.
    #[must_use]
    pub const fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    /// Registers a command schema.
    pub fn register_schema(&mut self, schema: CommandSchema) {
        self.schemas.register(schema);
    }

    /// Adds a command verb to a language.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLanguage` if the code is not registered.
    pub fn register_command_keyword(&mut self, code: &str, native: &str, canonical: &str) -> Result<()> {
        self.languages.register_command_keyword(code, native, canonical)
    }

    /// Parses source text in the given language.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLanguage` for unregistered codes, `NoMatch` when a
    /// clause matches no schema confidently, and `Parse` for malformed
    /// blocks.
    pub fn parse(&self, source: &str, code: &str) -> Result<SemanticNode> {
        self.parse_at(source, code, self.threshold)
    }

    /// Parses with a threshold other than the configured one.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    pub fn parse_at(&self, source: &str, code: &str, threshold: f64) -> Result<SemanticNode> {
        let language = self.languages.get(code)?;
        let tokens = Tokenizer::tokenize(source, language);
        if tokens.is_empty() {
            return Err(Error::no_match(source));
        }
        let patterns = PatternGenerator::generate_all(self.schemas.iter(), language);
        let mut statements = StatementParser {
            source,
            tokens: &tokens,
            pos: 0,
            language,
            patterns: &patterns,
            threshold,
        };
        let node = statements.parse_program()?;
        tracing::debug!(
            language = code,
            action = %node.action,
            confidence = node.min_confidence(),
            "semantic parse"
        );
        Ok(node)
    }

    /// Parses and reports the lowest confidence in the result.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    pub fn parse_with_confidence(&self, source: &str, code: &str) -> Result<(SemanticNode, f64)> {
        let node = self.parse(source, code)?;
        let confidence = node.min_confidence();
        Ok((node, confidence))
    }

    /// Returns true if the source parses in the language.
    #[must_use]
    pub fn can_parse(&self, source: &str, code: &str) -> bool {
        self.parse(source, code).is_ok()
    }

    /// Renders a node in a language.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLanguage` for unregistered codes.
    pub fn render(&self, node: &SemanticNode, code: &str) -> Result<String> {
        let language = self.languages.get(code)?;
        Ok(Renderer::new(language, &self.schemas).render(node))
    }

    /// Parses in one language and renders in another.
    ///
    /// # Errors
    ///
    /// Returns any parse error, or `UnknownLanguage` for either code.
    pub fn translate(&self, source: &str, from: &str, to: &str) -> Result<String> {
        let node = self.parse(source, from)?;
        self.render(&node, to)
    }
}

// =============================================================================
// Statement parsing
// =============================================================================

struct EventHeader {
    event: String,
    modifiers: EventModifiers,
    source: Option<SemanticValue>,
}

struct StatementParser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
    language: &'a Language,
    patterns: &'a [Pattern],
    threshold: f64,
}

impl<'a> StatementParser<'a> {
    fn parse_program(&mut self) -> Result<SemanticNode> {
        let mut nodes = Vec::new();
        while !self.at_end() {
            if self.eat("then") || self.eat("end") {
                continue;
            }
            nodes.push(self.parse_statement()?);
        }
        match nodes.len() {
            0 => Err(Error::no_match(self.source)),
            1 => Ok(nodes.remove(0)),
            _ => Ok(SemanticNode::compound("then", nodes).with_metadata(self.metadata())),
        }
    }

    fn parse_statement(&mut self) -> Result<SemanticNode> {
        if let Some(header) = self.try_event_header() {
            let body = self.parse_body(&["end"], true)?;
            self.eat("end");
            let mut node = SemanticNode::event_handler(header.event, body)
                .with_modifiers(header.modifiers)
                .with_metadata(self.metadata());
            if let Some(source) = header.source {
                node = node.with_role(SemanticRole::Source, source);
            }
            return Ok(node);
        }

        let Some(token) = self.peek() else {
            return Err(Error::no_match(self.source));
        };
        if token.is("if") || token.is("unless") {
            return self.parse_conditional();
        }
        if token.is("repeat") {
            return self.parse_repeat();
        }
        if token.is("while") {
            self.pos += 1;
            let condition = self.parse_condition()?;
            return self.finish_block("while", vec![(SemanticRole::Condition, condition)]);
        }
        if token.is("for") {
            return self.parse_for();
        }
        if self.at_sov_repeat() {
            let count = to_value(&self.tokens[self.pos..=self.pos]);
            self.pos += 3;
            return self.finish_block("repeat", vec![(SemanticRole::Quantity, count)]);
        }
        self.parse_command()
    }

    /// Statements up to a terminator, which is left unconsumed.
    fn parse_body(&mut self, terminators: &[&str], in_handler: bool) -> Result<Vec<SemanticNode>> {
        let mut nodes = Vec::new();
        while let Some(token) = self.peek() {
            if terminators.iter().any(|t| token.is(t)) {
                break;
            }
            if self.eat("then") {
                continue;
            }
            if in_handler && !nodes.is_empty() && self.at_event_header() {
                break;
            }
            nodes.push(self.parse_statement()?);
        }
        Ok(nodes)
    }

    fn finish_block(
        &mut self,
        action: &str,
        roles: Vec<(SemanticRole, SemanticValue)>,
    ) -> Result<SemanticNode> {
        let body = self.parse_body(&["end"], false)?;
        self.eat("end");
        let mut node = SemanticNode::compound(action, body).with_metadata(self.metadata());
        for (role, value) in roles {
            node = node.with_role(role, value);
        }
        Ok(node)
    }

    // -------------------------------------------------------------------------
    // Event headers
    // -------------------------------------------------------------------------

    fn at_event_header(&mut self) -> bool {
        let saved = self.pos;
        let found = self.try_event_header().is_some();
        self.pos = saved;
        found
    }

    fn try_event_header(&mut self) -> Option<EventHeader> {
        let saved = self.pos;
        let header = match self.language.profile.word_order {
            WordOrder::Sov => self.sov_event_header(),
            WordOrder::Svo | WordOrder::Vso => self.prepositional_event_header(),
        };
        if header.is_none() {
            self.pos = saved;
        }
        header
    }

    /// `on click.once from #list`
    fn prepositional_event_header(&mut self) -> Option<EventHeader> {
        let marker = self.peek()?;
        if !(self.language.profile.event_marker.matches(&marker.text) || marker.is("on")) {
            return None;
        }
        let event = self.event_name(self.tokens.get(self.pos + 1)?, true)?;
        self.pos += 2;
        let mut modifiers = EventModifiers::default();
        self.parse_modifiers(&mut modifiers);
        let mut source = None;
        let from = self.peek().is_some_and(|t| {
            self.language.profile.source_marker.matches(&t.text) || t.is("from")
        });
        if from {
            if let Some(end) = scan_value(self.tokens, self.pos + 1, &|_| false) {
                source = Some(to_value(&self.tokens[self.pos + 1..end]));
                self.pos = end;
                self.parse_modifiers(&mut modifiers);
            }
        }
        Some(EventHeader {
            event,
            modifiers,
            source,
        })
    }

    /// `クリック で`, `#list から クリック で`, or an inflected event word.
    fn sov_event_header(&mut self) -> Option<EventHeader> {
        let language = self.language;
        let profile = &language.profile;
        let mut event = None;
        let mut modifiers = EventModifiers::default();
        let mut source = None;
        loop {
            let token = self.peek()?;
            if event.is_some() && profile.event_marker.matches(&token.text) {
                self.pos += 1;
                break;
            }
            let next = self.tokens.get(self.pos + 1);
            if source.is_none()
                && matches!(token.kind, TokenKind::Selector | TokenKind::Keyword)
                && next.is_some_and(|n| profile.source_marker.matches(&n.text))
                && to_value(std::slice::from_ref(token)).value_type() != ValueType::Expression
            {
                source = Some(to_value(std::slice::from_ref(token)));
                self.pos += 2;
                continue;
            }
            if event.is_none() {
                let marked_next = next.is_some_and(|n| profile.event_marker.matches(&n.text));
                let name = self.event_name(token, marked_next)?;
                let inflected = token.stem.is_some();
                event = Some(name);
                self.pos += 1;
                self.parse_modifiers(&mut modifiers);
                if inflected && !self.peek().is_some_and(|t| profile.event_marker.matches(&t.text)) {
                    break;
                }
                continue;
            }
            return None;
        }
        Some(EventHeader {
            event: event?,
            modifiers,
            source,
        })
    }

    /// Canonical event name of a token. Unknown words count only when
    /// `allow_custom` is set.
    fn event_name(&self, token: &Token, allow_custom: bool) -> Option<String> {
        if token.kind == TokenKind::Particle {
            return None;
        }
        if let Some(name) = self
            .language
            .keywords
            .lookup(KeywordCategory::Events, token.canonical())
            .or_else(|| self.language.keywords.lookup(KeywordCategory::Events, &token.text))
        {
            return Some(name);
        }
        if token.in_category(KeywordCategory::Events) {
            return Some(token.canonical().to_string());
        }
        (allow_custom && token.kind == TokenKind::Identifier && !token.text.starts_with([':', '$']))
            .then(|| token.text.clone())
    }

    /// `.once`, `.debounce(200)`, `once`, `debounced 200ms`, ...
    fn parse_modifiers(&mut self, modifiers: &mut EventModifiers) {
        loop {
            let Some(token) = self.peek() else {
                return;
            };
            let (name, width) = if token.text == "." {
                match self.tokens.get(self.pos + 1) {
                    Some(next) if token.touches(next) => match self.attribute(next) {
                        Some(name) => (name, 2),
                        None => return,
                    },
                    _ => return,
                }
            } else {
                match self.attribute(token) {
                    Some(name) => (name, 1),
                    None => return,
                }
            };
            self.pos += width;
            match name.as_str() {
                "debounce" => modifiers.debounce = Some(self.parse_interval()),
                "throttle" => modifiers.throttle = Some(self.parse_interval()),
                other => {
                    modifiers.set_flag(other);
                }
            }
        }
    }

    fn attribute(&self, token: &Token) -> Option<String> {
        if token.kind != TokenKind::Keyword {
            return None;
        }
        self.language
            .keywords
            .lookup(KeywordCategory::Attributes, &token.text)
            .or_else(|| {
                token
                    .in_category(KeywordCategory::Attributes)
                    .then(|| token.canonical().to_string())
            })
    }

    /// `(300)`, `300ms`, `1s`, or nothing.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn parse_interval(&mut self) -> u64 {
        let open = self.peek().is_some_and(|t| t.text == "(");
        let at = self.pos + usize::from(open);
        let Some(token) = self.tokens.get(at).filter(|t| t.kind == TokenKind::Literal) else {
            return DEFAULT_INTERVAL_MS;
        };
        let millis = token
            .duration_millis()
            .or_else(|| token.text.parse::<f64>().ok());
        let Some(millis) = millis else {
            return DEFAULT_INTERVAL_MS;
        };
        self.pos = at + 1;
        if open && self.peek().is_some_and(|t| t.text == ")") {
            self.pos += 1;
        }
        millis.max(0.0).round() as u64
    }

    // -------------------------------------------------------------------------
    // Blocks
    // -------------------------------------------------------------------------

    fn parse_conditional(&mut self) -> Result<SemanticNode> {
        let action = if self.peek().is_some_and(|t| t.is("unless")) {
            "unless"
        } else {
            "if"
        };
        self.pos += 1;
        let condition = self.parse_condition()?;
        self.eat("then");
        let body = self.parse_body(&["else", "end"], false)?;
        let mut alternate = Vec::new();
        if self.eat("else") {
            if self.peek().is_some_and(|t| t.is("if")) {
                alternate.push(self.parse_conditional()?);
            } else {
                alternate = self.parse_body(&["end"], false)?;
                self.eat("end");
            }
        } else {
            self.eat("end");
        }
        Ok(SemanticNode::compound(action, body)
            .with_role(SemanticRole::Condition, condition)
            .with_alternate(alternate)
            .with_metadata(self.metadata()))
    }

    fn parse_repeat(&mut self) -> Result<SemanticNode> {
        self.pos += 1;
        if self.eat("forever") {
            return self.finish_block("repeat", Vec::new());
        }
        if self.eat("while") {
            let condition = self.parse_condition()?;
            return self.finish_block("while", vec![(SemanticRole::Condition, condition)]);
        }
        if self.peek().is_some_and(|t| t.is("for")) {
            return self.parse_for();
        }
        let stop = |t: &Token| t.is("times") || t.in_category(KeywordCategory::Commands);
        let end = scan_value(self.tokens, self.pos, &stop)
            .ok_or_else(|| self.error("expected a count after 'repeat'"))?;
        let count = to_value(&self.tokens[self.pos..end]);
        self.pos = end;
        self.eat("times");
        self.finish_block("repeat", vec![(SemanticRole::Quantity, count)])
    }

    fn parse_for(&mut self) -> Result<SemanticNode> {
        self.pos += 1;
        self.eat("each");
        let variable = self
            .peek()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| SemanticValue::reference(t.text.clone()))
            .ok_or_else(|| self.error("expected a loop variable after 'for'"))?;
        self.pos += 1;
        if !self.eat("in") {
            return Err(self.error("expected 'in' after the loop variable"));
        }
        let collection = self.parse_condition()?;
        self.finish_block(
            "for",
            vec![(SemanticRole::Patient, variable), (SemanticRole::Source, collection)],
        )
    }

    /// `3 回 繰り返し`
    fn at_sov_repeat(&self) -> bool {
        self.language.profile.word_order.is_verb_final()
            && matches!(
                (
                    self.peek(),
                    self.tokens.get(self.pos + 1),
                    self.tokens.get(self.pos + 2)
                ),
                (Some(n), Some(times), Some(repeat))
                    if n.kind == TokenKind::Literal && times.is("times") && repeat.is("repeat")
            )
    }

    /// An expression ending before the first command keyword or `then`.
    fn parse_condition(&mut self) -> Result<SemanticValue> {
        let stop = |t: &Token| t.is("then") || t.in_category(KeywordCategory::Commands);
        let end = scan_value(self.tokens, self.pos, &stop)
            .ok_or_else(|| self.error("expected an expression"))?;
        let value = to_value(&self.tokens[self.pos..end]);
        self.pos = end;
        Ok(value)
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    fn parse_command(&mut self) -> Result<SemanticNode> {
        let start = self.pos;
        let verb_final = self.language.profile.word_order.is_verb_final();
        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            if depth == 0 && self.pos > start {
                let previous = &self.tokens[self.pos - 1];
                if token.is("then")
                    || token.span.line > previous.span.line
                    || BLOCK_WORDS.iter().any(|w| token.is(w))
                {
                    break;
                }
            }
            if token.kind == TokenKind::Punctuation {
                match token.text.as_str() {
                    "(" | "[" | "{" => depth += 1,
                    ")" | "]" | "}" => depth = depth.saturating_sub(1),
                    _ => {}
                }
            }
            self.pos += 1;
            if verb_final
                && depth == 0
                && token.kind == TokenKind::Keyword
                && token.in_category(KeywordCategory::Commands)
            {
                break;
            }
        }

        let clause = &self.tokens[start..self.pos];
        let text = self.clause_text(clause);
        for pattern in self.patterns {
            match SemanticMatcher::match_clause(clause, pattern) {
                Ok(mut node) if node.metadata.confidence >= self.threshold => {
                    node.metadata.source_text = Some(text);
                    return Ok(node);
                }
                Ok(node) => tracing::debug!(
                    action = %pattern.action,
                    confidence = node.metadata.confidence,
                    "match below confidence threshold"
                ),
                Err(failure) => {
                    tracing::trace!(action = %pattern.action, %failure, "pattern rejected");
                }
            }
        }
        let first = &clause[0];
        Err(Error::no_match(text).with_context(
            ErrorContext::new()
                .with_position(first.span.line as usize, first.span.column as usize)
                .with_frame(format!("semantic parse ({})", self.language.code())),
        ))
    }

    // -------------------------------------------------------------------------
    // Cursor helpers
    // -------------------------------------------------------------------------

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Consumes the next token if it normalizes to `name`.
    fn eat(&mut self, name: &str) -> bool {
        let found = self.peek().is_some_and(|t| t.is(name));
        if found {
            self.pos += 1;
        }
        found
    }

    fn clause_text(&self, clause: &[Token]) -> String {
        match (clause.first(), clause.last()) {
            (Some(first), Some(last)) => self.source[first.span.start..last.span.end].to_string(),
            _ => String::new(),
        }
    }

    fn metadata(&self) -> NodeMetadata {
        NodeMetadata {
            language: self.language.code().to_string(),
            confidence: 1.0,
            source_text: None,
        }
    }

    fn error(&self, message: &str) -> Error {
        let (line, column) = self
            .peek()
            .or_else(|| self.tokens.last())
            .map_or((1, 1), |t| (t.span.line, t.span.column));
        Error::parse(message, line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    fn parse(source: &str, code: &str) -> SemanticNode {
        SemanticParser::new().parse(source, code).unwrap()
    }

    #[test]
    fn bare_command() {
        let node = parse("toggle .active", "en");
        assert!(node.is_command());
        assert_eq!(node.action, "toggle");
        assert_eq!(node.metadata.source_text.as_deref(), Some("toggle .active"));
    }

    #[test]
    fn english_event_handler() {
        let node = parse("on click toggle .active on #button", "en");
        assert!(node.is_event_handler());
        assert_eq!(node.event_name(), Some("click"));
        assert_eq!(node.body()[0].roles.len(), 2);
    }

    #[test]
    fn same_handler_in_every_language() {
        let cases = [
            ("en", "on click toggle .active"),
            ("es", "en clic alternar .active"),
            ("it", "al clic alterna .active"),
            ("ja", "クリックで.activeを切り替え"),
            ("ko", "클릭 시 .active를 토글"),
            ("tr", "tıklama üzerine .active'i değiştir"),
            ("ar", "عند النقر بدّل .active"),
        ];
        for (code, source) in cases {
            let node = parse(source, code);
            assert_eq!(node.event_name(), Some("click"), "{code}");
            let body = node.body();
            assert_eq!(body.len(), 1, "{code}");
            assert_eq!(body[0].action, "toggle", "{code}");
            assert_eq!(
                body[0].role(&SemanticRole::Patient),
                Some(&SemanticValue::selector(".active")),
                "{code}"
            );
        }
    }

    #[test]
    fn modifiers_and_source() {
        let node = parse("on input.debounce(200).once from #search log me", "en");
        let NodeKind::EventHandler { modifiers, .. } = &node.kind else {
            panic!("expected handler");
        };
        assert_eq!(modifiers.debounce, Some(200));
        assert!(modifiers.once);
        assert_eq!(node.role(&SemanticRole::Source), Some(&SemanticValue::selector("#search")));
    }

    #[test]
    fn then_and_newlines_split_clauses() {
        let node = parse("on click add .a to me then wait 1s\n remove .a from me", "en");
        assert_eq!(node.commands(), vec!["add", "wait", "remove"]);
    }

    #[test]
    fn japanese_clauses_end_at_verbs() {
        let node = parse("クリックで.aを追加3秒待つ", "ja");
        assert_eq!(node.commands(), vec!["add", "wait"]);
    }

    #[test]
    fn if_else_block() {
        let node = parse("if :x > 1 toggle .a else hide me end", "en");
        assert_eq!(node.action, "if");
        assert_eq!(node.role(&SemanticRole::Condition), Some(&SemanticValue::expression(":x > 1")));
        let NodeKind::Compound { body, alternate } = &node.kind else {
            panic!("expected block");
        };
        assert_eq!(body[0].action, "toggle");
        assert_eq!(alternate[0].action, "hide");
    }

    #[test]
    fn repeat_forms() {
        let node = parse("repeat 3 times increment :n end", "en");
        assert_eq!(node.role(&SemanticRole::Quantity), Some(&SemanticValue::number(3.0)));
        let node = parse("repeat forever wait 1s end", "en");
        assert!(node.role(&SemanticRole::Quantity).is_none());
        let node = parse("3回繰り返し:nを増加終わり", "ja");
        assert_eq!(node.action, "repeat");
        assert_eq!(node.body()[0].action, "increment");
    }

    #[test]
    fn variables_before_particles() {
        let node = parse(":count를 증가", "ko");
        assert_eq!(node.action, "increment");
        assert_eq!(node.role(&SemanticRole::Patient), Some(&SemanticValue::reference(":count")));
        let node = parse(":nを増加", "ja");
        assert_eq!(node.role(&SemanticRole::Patient), Some(&SemanticValue::reference(":n")));
    }

    #[test]
    fn for_loop() {
        let node = parse("for :item in :items log :item end", "en");
        assert_eq!(node.role(&SemanticRole::Patient), Some(&SemanticValue::reference(":item")));
        assert_eq!(node.role(&SemanticRole::Source), Some(&SemanticValue::reference(":items")));
    }

    #[test]
    fn unknown_command_is_no_match() {
        let err = SemanticParser::new().parse("frobnicate #x", "en").unwrap_err();
        assert!(matches!(err.kind, hyperfixi_foundation::ErrorKind::NoMatch(_)));
    }

    #[test]
    fn threshold_rejects_stemmed_matches() {
        let parser = SemanticParser::new().with_threshold(0.9);
        assert!(!parser.can_parse("alternando .activo", "es"));
        assert!(SemanticParser::new().can_parse("alternando .activo", "es"));
    }

    #[test]
    fn translate_between_languages() {
        let parser = SemanticParser::new();
        let japanese = parser.translate("toggle .active on #button", "en", "ja").unwrap();
        let node = parser.parse(&japanese, "ja").unwrap();
        assert_eq!(node.action, "toggle");
        assert_eq!(
            node.role(&SemanticRole::Destination),
            Some(&SemanticValue::selector("#button"))
        );
    }
}
