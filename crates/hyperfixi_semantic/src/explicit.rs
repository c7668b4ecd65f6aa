//! Explicit bracket syntax.
//!
//! A language-neutral notation that spells out roles by name:
//!
//! ```text
//! [toggle patient:.active destination:#button]
//! [on event:click once debounce:300 source:#list body:{ [toggle patient:.active] }]
//! [if condition:(:x > 1) body:{ [log patient:'big'] } else:{ [log patient:'small'] }]
//! ```
//!
//! Event handlers take bare modifier flags; blocks take `body:{...}` and
//! `else:{...}` lists of nested nodes. Parentheses wrap expressions.

use hyperfixi_foundation::{Error, Result, Value};
use hyperfixi_i18n::KeywordCategory;
use hyperfixi_i18n::token::split_duration;

use crate::expr::{is_url, is_variable};
use crate::node::{EventModifiers, NodeKind, SemanticNode};
use crate::role::SemanticRole;
use crate::value::{LiteralSubtype, SemanticValue};

const BLOCK_ACTIONS: &[&str] = &["then", "if", "unless", "repeat", "while", "for"];

/// Parser and printer for the bracket notation.
pub struct ExplicitSyntax;

impl ExplicitSyntax {
    /// Returns true if the text looks like bracket syntax.
    #[must_use]
    pub fn is_explicit(source: &str) -> bool {
        let trimmed = source.trim();
        trimmed.starts_with('[') && trimmed.ends_with(']')
    }

    /// Parses one bracketed node. Several top-level nodes become a `then`
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns a `Parse` error with the offending position.
    pub fn parse(source: &str) -> Result<SemanticNode> {
        let mut cursor = Cursor { source, pos: 0 };
        let mut nodes = cursor.nodes_until(None)?;
        match nodes.len() {
            0 => Err(cursor.error("expected '['")),
            1 => Ok(nodes.remove(0)),
            _ => Ok(SemanticNode::compound("then", nodes)),
        }
    }

    /// Prints a node in bracket syntax.
    #[must_use]
    pub fn render(node: &SemanticNode) -> String {
        let mut parts = vec![node.action.clone()];
        match &node.kind {
            NodeKind::Command => {}
            NodeKind::EventHandler { modifiers, .. } => {
                if let Some(event) = node.role(&SemanticRole::Event) {
                    parts.push(format!("event:{}", render_value(event)));
                }
                parts.extend(modifiers.flags().into_iter().map(str::to_string));
                if let Some(ms) = modifiers.debounce {
                    parts.push(format!("debounce:{ms}"));
                }
                if let Some(ms) = modifiers.throttle {
                    parts.push(format!("throttle:{ms}"));
                }
            }
            NodeKind::Compound { .. } => {}
        }
        for (role, value) in &node.roles {
            if node.is_event_handler() && *role == SemanticRole::Event {
                continue;
            }
            parts.push(format!("{role}:{}", render_value(value)));
        }
        match &node.kind {
            NodeKind::Command => {}
            NodeKind::EventHandler { body, .. } => parts.push(render_list("body", body)),
            NodeKind::Compound { body, alternate } => {
                parts.push(render_list("body", body));
                if !alternate.is_empty() {
                    parts.push(render_list("else", alternate));
                }
            }
        }
        format!("[{}]", parts.join(" "))
    }
}

fn render_list(key: &str, nodes: &[SemanticNode]) -> String {
    let inner: Vec<String> = nodes.iter().map(ExplicitSyntax::render).collect();
    format!("{key}:{{{}}}", inner.join(" "))
}

fn render_value(value: &SemanticValue) -> String {
    match value {
        SemanticValue::Expression { raw } => format!("({raw})"),
        other => other.raw().to_string(),
    }
}

// =============================================================================
// Cursor
// =============================================================================

struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl Cursor<'_> {
    fn rest(&self) -> &str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn expect(&mut self, c: char) -> Result<()> {
        self.skip_ws();
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            Ok(())
        } else {
            Err(self.error(&format!("expected '{c}'")))
        }
    }

    fn error(&self, message: &str) -> Error {
        let before = &self.source[..self.pos];
        let line = before.matches('\n').count() + 1;
        let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
        Error::parse(
            message,
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(column).unwrap_or(u32::MAX),
        )
    }

    /// Nodes up to `close` (or the end of input when `None`).
    fn nodes_until(&mut self, close: Option<char>) -> Result<Vec<SemanticNode>> {
        let mut nodes = Vec::new();
        loop {
            self.skip_ws();
            match self.peek() {
                None if close.is_none() => return Ok(nodes),
                None => return Err(self.error("unterminated list")),
                Some(c) if Some(c) == close => {
                    self.pos += 1;
                    return Ok(nodes);
                }
                Some('[') => nodes.push(self.node()?),
                Some(_) => return Err(self.error("expected '['")),
            }
        }
    }

    fn word(&mut self) -> &str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, ':' | ']' | '[' | '{' | '}') {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.source[start..self.pos]
    }

    fn node(&mut self) -> Result<SemanticNode> {
        self.expect('[')?;
        self.skip_ws();
        let action = self.word().to_string();
        if action.is_empty() {
            return Err(self.error("expected a command name"));
        }

        let mut roles = Vec::new();
        let mut modifiers = EventModifiers::default();
        let mut body = Vec::new();
        let mut alternate = Vec::new();
        loop {
            self.skip_ws();
            match self.peek() {
                Some(']') => {
                    self.pos += 1;
                    break;
                }
                None => return Err(self.error("expected ']'")),
                Some(_) => {}
            }
            let key = self.word().to_string();
            if key.is_empty() {
                return Err(self.error("expected a role name"));
            }
            if self.peek() != Some(':') {
                if action == "on" && modifiers.set_flag(&key) {
                    continue;
                }
                return Err(self.error(&format!("expected ':' after '{key}'")));
            }
            self.pos += 1;
            match key.as_str() {
                "body" => {
                    self.expect('{')?;
                    body = self.nodes_until(Some('}'))?;
                }
                "else" => {
                    self.expect('{')?;
                    alternate = self.nodes_until(Some('}'))?;
                }
                "debounce" | "throttle" if action == "on" => {
                    let ms = interval(&self.value_text()?)
                        .ok_or_else(|| self.error("expected an interval"))?;
                    if key == "debounce" {
                        modifiers.debounce = Some(ms);
                    } else {
                        modifiers.throttle = Some(ms);
                    }
                }
                _ => {
                    let text = self.value_text()?;
                    roles.push((SemanticRole::parse(&key), classify(&text)));
                }
            }
        }

        let mut node = if action == "on" {
            let event = roles
                .iter()
                .position(|(role, _)| *role == SemanticRole::Event)
                .map(|i| roles.remove(i).1)
                .ok_or_else(|| self.error("event handler without 'event:'"))?;
            SemanticNode::event_handler(event.raw(), body).with_modifiers(modifiers)
        } else if BLOCK_ACTIONS.contains(&action.as_str()) {
            SemanticNode::compound(action, body).with_alternate(alternate)
        } else {
            SemanticNode::command(action)
        };
        for (role, value) in roles {
            node = node.with_role(role, value);
        }
        Ok(node)
    }

    /// Raw text of one value: a quoted string, a parenthesized expression,
    /// or a run of non-space characters.
    fn value_text(&mut self) -> Result<String> {
        let start = self.pos;
        match self.peek() {
            Some(quote @ ('\'' | '"')) => {
                self.pos += 1;
                let mut escaped = false;
                loop {
                    let c = self.peek().ok_or_else(|| self.error("unterminated string"))?;
                    self.pos += c.len_utf8();
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == quote {
                        break;
                    }
                }
            }
            Some('(') => {
                let mut depth = 0usize;
                loop {
                    let c = self.peek().ok_or_else(|| self.error("unbalanced '('"))?;
                    self.pos += c.len_utf8();
                    match c {
                        '(' => depth += 1,
                        ')' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                }
            }
            _ => {
                while let Some(c) = self.peek() {
                    if c.is_whitespace() || c == ']' {
                        break;
                    }
                    self.pos += c.len_utf8();
                }
            }
        }
        if self.pos == start {
            return Err(self.error("expected a value"));
        }
        Ok(self.source[start..self.pos].to_string())
    }
}

fn interval(text: &str) -> Option<u64> {
    let millis = match split_duration(text) {
        Some((amount, unit)) => amount * unit.millis(),
        None => text.parse::<f64>().ok()?,
    };
    if millis < 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ms = millis.round() as u64;
    Some(ms)
}

/// Types a raw value the way the tokenizer would.
fn classify(text: &str) -> SemanticValue {
    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        return SemanticValue::expression(inner.trim());
    }
    if let Some(unquoted) = unquote(text) {
        return SemanticValue::string(unquoted);
    }
    if text.starts_with(['.', '#', '<', '@', '*']) {
        return SemanticValue::selector(text);
    }
    if is_variable(text) {
        return SemanticValue::reference(text);
    }
    if let Ok(n) = text.parse::<f64>() {
        return SemanticValue::number(n);
    }
    if let Some((amount, unit)) = split_duration(text) {
        return SemanticValue::duration(text, amount * unit.millis());
    }
    if is_url(text) {
        return SemanticValue::Literal {
            value: Value::String(text.to_string()),
            raw: text.to_string(),
            subtype: Some(LiteralSubtype::Url),
        };
    }
    let constant = match text {
        "true" => Some(Value::Bool(true)),
        "false" => Some(Value::Bool(false)),
        "null" => Some(Value::Null),
        _ => None,
    };
    if let Some(value) = constant {
        return SemanticValue::Literal {
            value,
            raw: text.to_string(),
            subtype: None,
        };
    }
    if KeywordCategory::Values.canonical_words().contains(&text) {
        return SemanticValue::reference(text);
    }
    SemanticValue::word(text)
}

fn unquote(text: &str) -> Option<String> {
    let open = text.chars().next().filter(|c| matches!(c, '\'' | '"'))?;
    let inner = text.strip_prefix(open)?.strip_suffix(open)?;
    let mut out = String::with_capacity(inner.len());
    let mut escaped = false;
    for c in inner.chars() {
        if escaped {
            out.push(if c == 'n' { '\n' } else { c });
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else {
            out.push(c);
        }
    }
    Some(out)
}
