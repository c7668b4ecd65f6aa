//! Token positions.
//!
//! Parse errors report the line and column of the offending token; the
//! byte range decides whether two tokens are written without a gap.

use serde::{Deserialize, Serialize};

/// Where a token sits in its source: a byte range plus the 1-based line and
/// character column of its first byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// First byte.
    pub start: usize,
    /// One past the last byte.
    pub end: usize,
    /// Line of `start`.
    pub line: u32,
    /// Column of `start`, counted in characters.
    pub column: u32,
}

impl Span {
    /// Creates a span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Empty span on line 1, column 1. Used for synthesized tokens.
    #[must_use]
    pub const fn at_start() -> Self {
        Self::new(0, 0, 1, 1)
    }

    /// True when `next` begins at the byte where this span ends, as in
    /// `alert(` or `.active'i`.
    #[must_use]
    pub const fn touches(&self, next: &Self) -> bool {
        self.end == next.start
    }
}
