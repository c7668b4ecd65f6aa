//! Command schemas: one declaration per command, shared by every language.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::role::SemanticRole;
use crate::value::ValueType;

/// One role of a command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSpec {
    /// The role.
    pub role: SemanticRole,
    /// A match without this role fails.
    pub required: bool,
    /// Value shapes the role accepts.
    pub expected_types: Vec<ValueType>,
    /// Position among the roles in SVO and VSO languages.
    pub svo_position: u8,
    /// Position among the roles in SOV languages.
    pub sov_position: u8,
    /// Language code -> marker replacing the profile default. An empty
    /// string means the role is unmarked in that language.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub marker_override: BTreeMap<String, String>,
}

impl RoleSpec {
    /// Creates a required role.
    #[must_use]
    pub fn required(role: SemanticRole, expected_types: &[ValueType]) -> Self {
        Self {
            role,
            required: true,
            expected_types: expected_types.to_vec(),
            svo_position: 1,
            sov_position: 1,
            marker_override: BTreeMap::new(),
        }
    }

    /// Creates an optional role.
    #[must_use]
    pub fn optional(role: SemanticRole, expected_types: &[ValueType]) -> Self {
        Self {
            required: false,
            ..Self::required(role, expected_types)
        }
    }

    /// Sets the SVO/VSO and SOV positions.
    #[must_use]
    pub const fn at(mut self, svo_position: u8, sov_position: u8) -> Self {
        self.svo_position = svo_position;
        self.sov_position = sov_position;
        self
    }

    /// Overrides the marker for one language.
    #[must_use]
    pub fn marker(mut self, language: &str, marker: &str) -> Self {
        self.marker_override
            .insert(language.to_string(), marker.to_string());
        self
    }

    /// Overrides the marker for several languages at once.
    #[must_use]
    pub fn markers(mut self, overrides: &[(&str, &str)]) -> Self {
        for (language, marker) in overrides {
            self = self.marker(language, marker);
        }
        self
    }

    /// Returns true if the role accepts values of this shape.
    #[must_use]
    pub fn accepts(&self, value_type: ValueType) -> bool {
        self.expected_types.contains(&value_type)
    }
}

/// A command's meaning, independent of language.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandSchema {
    /// Canonical action name.
    pub action: String,
    /// The role the command is mostly about.
    pub primary_role: Option<SemanticRole>,
    /// Roles in declaration order.
    pub roles: Vec<RoleSpec>,
    /// One-line description.
    #[serde(default)]
    pub description: String,
}

impl CommandSchema {
    /// Creates a schema with no roles.
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            primary_role: None,
            roles: Vec::new(),
            description: String::new(),
        }
    }

    /// Adds a role. The first role added is the primary role.
    #[must_use]
    pub fn role(mut self, spec: RoleSpec) -> Self {
        if self.primary_role.is_none() {
            self.primary_role = Some(spec.role.clone());
        }
        self.roles.push(spec);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Looks up a role spec.
    #[must_use]
    pub fn spec(&self, role: &SemanticRole) -> Option<&RoleSpec> {
        self.roles.iter().find(|spec| &spec.role == role)
    }

    /// Required roles in declaration order.
    pub fn required_roles(&self) -> impl Iterator<Item = &SemanticRole> {
        self.roles
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| &spec.role)
    }
}

/// Schemas in registration order. Matching tries them in this order.
#[derive(Clone, Debug, Default)]
pub struct SchemaRegistry {
    schemas: Vec<CommandSchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the standard command schemas.
    #[must_use]
    pub fn with_standard() -> Self {
        let mut registry = Self::new();
        for schema in crate::stdlib::standard_schemas() {
            registry.register(schema);
        }
        registry
    }

    /// Registers a schema. A schema for an already registered action
    /// replaces it in place.
    pub fn register(&mut self, schema: CommandSchema) {
        tracing::debug!(action = %schema.action, "registered command schema");
        match self.schemas.iter_mut().find(|s| s.action == schema.action) {
            Some(existing) => *existing = schema,
            None => self.schemas.push(schema),
        }
    }

    /// Looks up a schema by canonical action.
    #[must_use]
    pub fn get(&self, action: &str) -> Option<&CommandSchema> {
        self.schemas.iter().find(|s| s.action == action)
    }

    /// Schemas in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSchema> {
        self.schemas.iter()
    }

    /// Number of schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if no schema is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
