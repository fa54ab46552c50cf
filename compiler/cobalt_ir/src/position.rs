//! Source positions.
//!
//! A `Position` is a 1-based `(line, column)` pair. Line numbers index the
//! line table directly (index 0 is the reserved header), and columns are
//! byte offsets within the line plus one.

use std::fmt;

/// A 1-based source location.
///
/// Layout: 8 bytes total
/// - line: u32 - index into the line table
/// - column: u32 - byte offset within the line, plus one
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

crate::static_assert_size!(Position, 8);

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Position of the byte at `offset` (0-based) on `line`.
    #[inline]
    pub const fn at_offset(line: u32, offset: u32) -> Self {
        Position {
            line,
            column: offset + 1,
        }
    }

    /// The 0-based byte offset this position's column refers to.
    #[inline]
    pub const fn offset(self) -> u32 {
        self.column.saturating_sub(1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
