//! Tokenization and keyword resolution for natural-language hyperscript.
//!
//! This crate provides:
//! - [`Tokenizer`] - Per-language lexer producing classified [`Token`]s
//! - [`KeywordTable`] - Locale word → canonical vocabulary resolution
//! - [`MorphologicalNormalizer`] - Affix stripping for inflected languages
//! - [`LanguageProfile`] - Word order, direction, and role markers
//! - [`LanguageRegistry`] - The built-in locales, extensible at runtime

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod keywords;
pub mod locales;
pub mod morphology;
pub mod profile;
pub mod registry;
pub mod script;
pub mod token;
pub mod tokenizer;

pub use keywords::{CATEGORY_PRIORITY, KeywordCategory, KeywordEntry, KeywordTable, Resolved};
pub use morphology::{MorphologicalNormalizer, Stem};
pub use profile::{ActionKeywords, Direction, LanguageProfile, MarkerForms, WordOrder};
pub use registry::{Language, LanguageRegistry};
pub use token::{Token, TokenKind, TokenStream};
pub use tokenizer::Tokenizer;

/// Minimum stem confidence for a normalized word to count as a keyword.
pub const STEM_CONFIDENCE_THRESHOLD: f64 = 0.7;
