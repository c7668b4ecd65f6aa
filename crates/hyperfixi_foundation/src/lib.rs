//! Core types shared by every hyperfixi layer.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`Span`] - Source locations for tokens and diagnostics
//! - [`Value`] - Typed literal values carried through parsing and folding

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod span;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use span::Span;
pub use value::{DurationUnit, Value};
