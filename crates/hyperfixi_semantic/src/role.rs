//! Semantic roles.
//!
//! A role names what a value does in a command, independent of how any
//! language marks it: the `.active` in "toggle .active on #button" is the
//! patient whether it is followed by を or preceded by nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A semantic role.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SemanticRole {
    /// The thing acted upon.
    Patient,
    /// Where the action lands.
    Destination,
    /// Where something comes from.
    Source,
    /// An event name.
    Event,
    /// A length of time.
    Duration,
    /// An amount.
    Quantity,
    /// A boolean test.
    Condition,
    /// How a response is decoded (`as json`).
    ResponseType,
    /// How an action is performed.
    Method,
    /// A role introduced by a registered schema.
    Custom(String),
}

impl SemanticRole {
    /// The role's wire name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Patient => "patient",
            Self::Destination => "destination",
            Self::Source => "source",
            Self::Event => "event",
            Self::Duration => "duration",
            Self::Quantity => "quantity",
            Self::Condition => "condition",
            Self::ResponseType => "responseType",
            Self::Method => "method",
            Self::Custom(name) => name,
        }
    }

    /// Parses a wire name; unknown names become custom roles.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "patient" => Self::Patient,
            "destination" => Self::Destination,
            "source" => Self::Source,
            "event" => Self::Event,
            "duration" => Self::Duration,
            "quantity" => Self::Quantity,
            "condition" => Self::Condition,
            "responseType" => Self::ResponseType,
            "method" => Self::Method,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for SemanticRole {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<SemanticRole> for String {
    fn from(role: SemanticRole) -> Self {
        role.name().to_string()
    }
}

impl fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
