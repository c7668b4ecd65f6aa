//! Integration tests for Layer 2: Semantic
//!
//! Tests for cross-language equivalence, translation, explicit syntax, and
//! user-registered command schemas.

mod custom_schemas;
mod equivalence;
mod explicit;
