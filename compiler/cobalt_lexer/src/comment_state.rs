//! Cross-line block comment state.
//!
//! A `/* ... */` comment may span several lines of one section. The state
//! is threaded through successive [`lex_line`](crate::lex_line) calls and
//! reset at the start of every section.

use std::mem;

use cobalt_ir::{Comment, CommentKind, Position};

/// Whether a block comment is open, and what it holds so far.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum CommentState {
    #[default]
    Closed,
    Open {
        /// Text accumulated so far, starting with `/*`.
        text: String,
        /// Position of the opening `/`.
        start: Position,
    },
}

impl CommentState {
    /// Open a block comment at `start`, replacing any previous state.
    pub fn open(&mut self, start: Position) {
        *self = CommentState::Open {
            text: String::from("/*"),
            start,
        };
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, CommentState::Open { .. })
    }

    /// Append to the open comment. No-op while closed.
    pub fn push_str(&mut self, s: &str) {
        if let CommentState::Open { text, .. } = self {
            text.push_str(s);
        }
    }

    /// Close the comment, returning its start and accumulated text.
    pub fn close(&mut self) -> Option<(Position, String)> {
        match mem::take(self) {
            CommentState::Open { text, start } => Some((start, text)),
            CommentState::Closed => None,
        }
    }

    /// Finalize a comment left open at the end of a section.
    ///
    /// The text keeps its trailing newline instead of a closing `*/`.
    pub fn finish(&mut self) -> Option<Comment<'static>> {
        self.close()
            .map(|(start, text)| Comment::new(start, text, CommentKind::UnclosedBlock))
    }
}
