//! Comment records extracted by the lexer.
//!
//! Comments are kept out of the token stream so the parser never has to
//! skip them. The code generator re-interleaves them with its output by
//! position.

use std::borrow::Cow;
use std::fmt;

use crate::Position;

/// A source comment with the position of its opening delimiter.
///
/// `text` includes the delimiters. Line comments borrow straight from the
/// line text; block comments accumulate across lines and own their text.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Comment<'src> {
    pub pos: Position,
    pub text: Cow<'src, str>,
    pub kind: CommentKind,
}

impl<'src> Comment<'src> {
    /// Create a new comment.
    #[inline]
    pub fn new(pos: Position, text: impl Into<Cow<'src, str>>, kind: CommentKind) -> Self {
        Comment {
            pos,
            text: text.into(),
            kind,
        }
    }

    /// A `//` comment running to the end of its line.
    #[inline]
    pub fn line(pos: Position, text: &'src str) -> Self {
        Comment::new(pos, text, CommentKind::Line)
    }

    /// The comment text, delimiters included.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Debug for Comment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {} ({:?})", self.text, self.pos, self.kind)
    }
}

/// How a comment was delimited.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentKind {
    /// `// text`, ends at the end of the physical line.
    Line,
    /// `/* text */`, possibly spanning several lines.
    Block,
    /// `/* text` still open when its run of Cobalt lines ended.
    ///
    /// The text ends with `\n` instead of `*/`.
    UnclosedBlock,
}

impl CommentKind {
    /// Check if this comment was opened with `/*`.
    #[inline]
    pub fn is_block(self) -> bool {
        !matches!(self, CommentKind::Line)
    }
}

#[cfg(test)]
mod tests;
