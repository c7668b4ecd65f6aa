//! Semantic layer for multilingual hyperscript.
//!
//! This crate provides:
//! - [`SemanticNode`] - Language-neutral commands, event handlers, and blocks
//! - [`CommandSchema`] - Declarative role signatures of commands
//! - [`PatternGenerator`] - Lays out a schema in a language's word order
//! - [`SemanticMatcher`] - Fills a pattern's slots from a token clause
//! - [`SemanticParser`] - Statement structure and confidence thresholds
//! - [`Renderer`] - The inverse of parsing, for translation
//! - [`ExplicitSyntax`] - The bracketed, language-neutral notation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod explicit;
mod expr;
pub mod matcher;
pub mod node;
pub mod parser;
pub mod pattern;
pub mod renderer;
pub mod role;
pub mod schema;
pub mod stdlib;
pub mod value;

pub use explicit::ExplicitSyntax;
pub use hyperfixi_foundation::{Error, ErrorKind, Result};
pub use matcher::{MatchFailure, SemanticMatcher};
pub use node::{EventModifiers, NodeKind, NodeMetadata, SemanticNode};
pub use parser::{DEFAULT_CONFIDENCE_THRESHOLD, SemanticParser};
pub use pattern::{MarkerPosition, MarkerSpec, Pattern, PatternElement, PatternGenerator, Slot};
pub use renderer::Renderer;
pub use role::SemanticRole;
pub use schema::{CommandSchema, RoleSpec, SchemaRegistry};
pub use value::{LiteralSubtype, SemanticValue, ValueType};
