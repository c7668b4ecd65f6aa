//! Rendering semantic nodes as natural-language source.
//!
//! The renderer is the inverse of the parser: commands are laid out with the
//! same patterns the matcher uses, so rendering a node in a language and
//! parsing it back yields the same node.

use hyperfixi_i18n::{KeywordCategory, Language, WordOrder};

use crate::node::{EventModifiers, NodeKind, SemanticNode};
use crate::pattern::{MarkerPosition, PatternElement, PatternGenerator};
use crate::role::SemanticRole;
use crate::schema::SchemaRegistry;
use crate::value::SemanticValue;

/// Renders nodes in one language.
#[derive(Clone, Copy, Debug)]
pub struct Renderer<'a> {
    language: &'a Language,
    schemas: &'a SchemaRegistry,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer for a language.
    #[must_use]
    pub const fn new(language: &'a Language, schemas: &'a SchemaRegistry) -> Self {
        Self { language, schemas }
    }

    /// Renders a node.
    #[must_use]
    pub fn render(&self, node: &SemanticNode) -> String {
        match &node.kind {
            NodeKind::Command => self.render_command(node),
            NodeKind::EventHandler { modifiers, body } => {
                self.render_handler(node, modifiers, body)
            }
            NodeKind::Compound { body, alternate } => {
                self.render_compound(node, body, alternate)
            }
        }
    }

    fn word(&self, canonical: &'a str) -> &'a str {
        self.language.keywords.to_locale_or_canonical(canonical)
    }

    fn verb_final(&self) -> bool {
        self.language.profile.word_order == WordOrder::Sov
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    fn render_command(&self, node: &SemanticNode) -> String {
        let Some(schema) = self.schemas.get(&node.action) else {
            let mut parts = vec![self.word(&node.action).to_string()];
            parts.extend(node.roles.values().map(|v| self.value_text(v)));
            return parts.join(" ");
        };
        let pattern = PatternGenerator::generate(schema, self.language);
        let mut parts = Vec::new();
        for element in &pattern.elements {
            match element {
                PatternElement::Action(keywords) => parts.push(keywords.primary.clone()),
                PatternElement::Slot(slot) => {
                    let Some(value) = node.role(&slot.role) else {
                        continue;
                    };
                    let text = self.value_text(value);
                    match &slot.marker {
                        Some(m) if m.position == MarkerPosition::Before => {
                            parts.push(m.forms.primary.clone());
                            parts.push(text);
                        }
                        Some(m) => push_after(&mut parts, text, &m.forms.primary),
                        None => parts.push(text),
                    }
                }
            }
        }
        parts.join(" ")
    }

    /// Localizes reference keywords and event words; everything else is
    /// language-neutral.
    fn value_text(&self, value: &SemanticValue) -> String {
        let keywords = &self.language.keywords;
        match value {
            SemanticValue::Reference { value }
                if KeywordCategory::Values.canonical_words().contains(&value.as_str()) =>
            {
                keywords.to_locale_or_canonical(value).to_string()
            }
            SemanticValue::Literal { raw, subtype: None, .. }
                if KeywordCategory::Events.canonical_words().contains(&raw.as_str()) =>
            {
                keywords.to_locale_or_canonical(raw).to_string()
            }
            other => other.raw().to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Event handlers
    // -------------------------------------------------------------------------

    fn render_handler(
        &self,
        node: &SemanticNode,
        modifiers: &EventModifiers,
        body: &[SemanticNode],
    ) -> String {
        let profile = &self.language.profile;
        let event = node.event_name().unwrap_or("click");
        let mut event_text = self.word(event).to_string();
        for flag in modifiers.flags() {
            event_text.push('.');
            event_text.push_str(flag);
        }
        if let Some(ms) = modifiers.debounce {
            event_text.push_str(&format!(".debounce({ms})"));
        }
        if let Some(ms) = modifiers.throttle {
            event_text.push_str(&format!(".throttle({ms})"));
        }
        let source = node.role(&SemanticRole::Source).map(|v| self.value_text(v));

        let mut parts = Vec::new();
        if self.verb_final() {
            parts.push(event_text);
            if let Some(source) = source {
                push_after(&mut parts, source, &profile.source_marker.primary);
            }
            parts.push(profile.event_marker.primary.clone());
        } else {
            parts.push(profile.event_marker.primary.clone());
            parts.push(event_text);
            if let Some(source) = source {
                parts.push(profile.source_marker.primary.clone());
                parts.push(source);
            }
        }
        parts.push(self.render_sequence(body));
        parts.join(" ")
    }

    fn render_sequence(&self, nodes: &[SemanticNode]) -> String {
        let separator = format!(" {} ", self.word("then"));
        nodes
            .iter()
            .map(|n| self.render(n))
            .collect::<Vec<_>>()
            .join(&separator)
    }

    // -------------------------------------------------------------------------
    // Blocks
    // -------------------------------------------------------------------------

    fn render_compound(
        &self,
        node: &SemanticNode,
        body: &[SemanticNode],
        alternate: &[SemanticNode],
    ) -> String {
        let role_text = |role: SemanticRole| {
            node.role(&role)
                .map(|v| self.value_text(v))
                .unwrap_or_default()
        };
        let end = self.word("end");
        let inner = self.render_sequence(body);
        match node.action.as_str() {
            "if" | "unless" => {
                let mut out = format!(
                    "{} {} {inner}",
                    self.word(&node.action),
                    role_text(SemanticRole::Condition)
                );
                if !alternate.is_empty() {
                    out.push_str(&format!(
                        " {} {}",
                        self.word("else"),
                        self.render_sequence(alternate)
                    ));
                }
                let nested_else_if = alternate.len() == 1 && alternate[0].action == "if";
                if !nested_else_if {
                    out.push(' ');
                    out.push_str(end);
                }
                out
            }
            "repeat" => match node.role(&SemanticRole::Quantity) {
                Some(count) if self.verb_final() => format!(
                    "{} {} {} {inner} {end}",
                    self.value_text(count),
                    self.word("times"),
                    self.word("repeat")
                ),
                Some(count) => format!(
                    "{} {} {} {inner} {end}",
                    self.word("repeat"),
                    self.value_text(count),
                    self.word("times")
                ),
                None => format!(
                    "{} {} {inner} {end}",
                    self.word("repeat"),
                    self.word("forever")
                ),
            },
            "while" => format!(
                "{} {} {inner} {end}",
                self.word("while"),
                role_text(SemanticRole::Condition)
            ),
            "for" => format!(
                "{} {} {} {} {inner} {end}",
                self.word("for"),
                role_text(SemanticRole::Patient),
                self.word("in"),
                role_text(SemanticRole::Source)
            ),
            _ => inner,
        }
    }
}

/// Pushes a value followed by its postposition. Apostrophe suffixes
/// (`'i`, `'den`) are glued to the value.
fn push_after(parts: &mut Vec<String>, text: String, marker: &str) {
    if marker.starts_with('\'') {
        parts.push(format!("{text}{marker}"));
    } else {
        parts.push(text);
        parts.push(marker.to_string());
    }
}
