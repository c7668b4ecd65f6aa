//! Semantic nodes: language-neutral commands, event handlers, and blocks.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::role::SemanticRole;
use crate::value::SemanticValue;

/// Event handler modifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventModifiers {
    /// Remove the listener after the first event.
    #[serde(default, skip_serializing_if = "is_false")]
    pub once: bool,
    /// Call `preventDefault()`.
    #[serde(default, skip_serializing_if = "is_false")]
    pub prevent: bool,
    /// Call `stopPropagation()`.
    #[serde(default, skip_serializing_if = "is_false")]
    pub stop: bool,
    /// Passive listener.
    #[serde(default, skip_serializing_if = "is_false")]
    pub passive: bool,
    /// Capture-phase listener.
    #[serde(default, skip_serializing_if = "is_false")]
    pub capture: bool,
    /// Debounce interval in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debounce: Option<u64>,
    /// Throttle interval in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttle: Option<u64>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !b
}

impl EventModifiers {
    /// Returns true if no modifier is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Sets a flag modifier by canonical name. Returns false for unknown names.
    pub fn set_flag(&mut self, name: &str) -> bool {
        match name {
            "once" => self.once = true,
            "prevent" => self.prevent = true,
            "stop" => self.stop = true,
            "passive" => self.passive = true,
            "capture" => self.capture = true,
            _ => return false,
        }
        true
    }

    /// Names of the flag modifiers that are set, in canonical order.
    #[must_use]
    pub fn flags(&self) -> Vec<&'static str> {
        [
            ("once", self.once),
            ("prevent", self.prevent),
            ("stop", self.stop),
            ("passive", self.passive),
            ("capture", self.capture),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }
}

/// What kind of node this is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum NodeKind {
    /// A single command.
    Command,
    /// `on <event> <body>`. Roles: `event`, optionally `source`.
    EventHandler {
        /// Listener modifiers.
        #[serde(default, skip_serializing_if = "EventModifiers::is_empty")]
        modifiers: EventModifiers,
        /// Statements run when the event fires.
        body: Vec<SemanticNode>,
    },
    /// A block or statement sequence: `then`, `if`, `unless`, `repeat`,
    /// `while`, or `for`.
    Compound {
        /// Main body.
        body: Vec<SemanticNode>,
        /// `else` body of `if`/`unless`.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        alternate: Vec<SemanticNode>,
    },
}

/// Parse metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetadata {
    /// Language the node was parsed from.
    pub language: String,
    /// Lowest token confidence that went into the node.
    pub confidence: f64,
    /// Source text of the clause.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
}

impl Default for NodeMetadata {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            confidence: 1.0,
            source_text: None,
        }
    }
}

/// A language-neutral parse result.
///
/// `action` is always the canonical English name, whatever language the
/// node came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SemanticNode {
    /// Node kind, with the children of handlers and blocks.
    #[serde(flatten)]
    pub kind: NodeKind,
    /// Canonical action name.
    pub action: String,
    /// Role values, keyed by role.
    #[serde(default)]
    pub roles: OrdMap<SemanticRole, SemanticValue>,
    /// Parse metadata.
    #[serde(default)]
    pub metadata: NodeMetadata,
}

impl SemanticNode {
    /// Creates a command node with no roles.
    #[must_use]
    pub fn command(action: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Command,
            action: action.into(),
            roles: OrdMap::new(),
            metadata: NodeMetadata::default(),
        }
    }

    /// Creates an event handler node.
    #[must_use]
    pub fn event_handler(event: impl Into<String>, body: Vec<Self>) -> Self {
        let mut roles = OrdMap::new();
        roles.insert(SemanticRole::Event, SemanticValue::word(event));
        Self {
            kind: NodeKind::EventHandler {
                modifiers: EventModifiers::default(),
                body,
            },
            action: "on".to_string(),
            roles,
            metadata: NodeMetadata::default(),
        }
    }

    /// Creates a block or sequence node.
    #[must_use]
    pub fn compound(action: impl Into<String>, body: Vec<Self>) -> Self {
        Self {
            kind: NodeKind::Compound {
                body,
                alternate: Vec::new(),
            },
            action: action.into(),
            roles: OrdMap::new(),
            metadata: NodeMetadata::default(),
        }
    }

    /// Adds a role value.
    #[must_use]
    pub fn with_role(mut self, role: SemanticRole, value: SemanticValue) -> Self {
        self.roles.insert(role, value);
        self
    }

    /// Sets the `else` body of a compound node. Ignored for other kinds.
    #[must_use]
    pub fn with_alternate(mut self, nodes: Vec<Self>) -> Self {
        if let NodeKind::Compound { alternate, .. } = &mut self.kind {
            *alternate = nodes;
        }
        self
    }

    /// Sets the event modifiers of a handler. Ignored for other kinds.
    #[must_use]
    pub fn with_modifiers(mut self, value: EventModifiers) -> Self {
        if let NodeKind::EventHandler { modifiers, .. } = &mut self.kind {
            *modifiers = value;
        }
        self
    }

    /// Sets the metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: NodeMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Looks up a role value.
    #[must_use]
    pub fn role(&self, role: &SemanticRole) -> Option<&SemanticValue> {
        self.roles.get(role)
    }

    /// Returns true for command nodes.
    #[must_use]
    pub const fn is_command(&self) -> bool {
        matches!(self.kind, NodeKind::Command)
    }

    /// Returns true for event handler nodes.
    #[must_use]
    pub const fn is_event_handler(&self) -> bool {
        matches!(self.kind, NodeKind::EventHandler { .. })
    }

    /// Child statements: a handler's body or a block's body.
    #[must_use]
    pub fn body(&self) -> &[Self] {
        match &self.kind {
            NodeKind::Command => &[],
            NodeKind::EventHandler { body, .. } | NodeKind::Compound { body, .. } => body,
        }
    }

    /// The event name of a handler.
    #[must_use]
    pub fn event_name(&self) -> Option<&str> {
        self.role(&SemanticRole::Event).map(SemanticValue::raw)
    }

    /// Lowest confidence in this node and its children.
    #[must_use]
    pub fn min_confidence(&self) -> f64 {
        let (body, alternate): (&[Self], &[Self]) = match &self.kind {
            NodeKind::Command => (&[], &[]),
            NodeKind::EventHandler { body, .. } => (body, &[]),
            NodeKind::Compound { body, alternate } => (body, alternate),
        };
        body.iter()
            .chain(alternate)
            .map(Self::min_confidence)
            .fold(self.metadata.confidence, f64::min)
    }

    /// Canonical actions of every command in this tree, in source order.
    #[must_use]
    pub fn commands(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_commands(&mut out);
        out
    }

    fn collect_commands<'a>(&'a self, out: &mut Vec<&'a str>) {
        match &self.kind {
            NodeKind::Command => out.push(&self.action),
            NodeKind::EventHandler { body, .. } => {
                for node in body {
                    node.collect_commands(out);
                }
            }
            NodeKind::Compound { body, alternate } => {
                for node in body.iter().chain(alternate) {
                    node.collect_commands(out);
                }
            }
        }
    }
}
