//! Integration tests for Layer 1: i18n
//!
//! Tests for the language registry, keyword tables, and the tokenizer across
//! the built-in locales.

mod registry;
mod tokenizer;
