//! Position-tagged token views.

use std::fmt;
use std::hash::{Hash, Hasher};

use cobalt_ir::Position;
use cobalt_lexer_core::TokenKind;

/// A token: a byte range of one source line, tagged with its kind and
/// position.
///
/// The token borrows the line text instead of owning a copy, so it cannot
/// outlive the line table it was lexed from. Tokens never change after
/// construction.
///
/// Equality and hashing look at the token's own text, position and kind,
/// never the rest of the line.
#[derive(Copy, Clone)]
pub struct Token<'src> {
    line: &'src str,
    start: u32,
    len: u32,
    pos: Position,
    kind: TokenKind,
}

impl<'src> Token<'src> {
    /// Create a token covering `line[start..start + len]`.
    ///
    /// The range must lie on `char` boundaries of `line`.
    #[inline]
    pub fn new(line: &'src str, start: u32, len: u32, pos: Position, kind: TokenKind) -> Self {
        debug_assert!(
            line.is_char_boundary(start as usize) && line.is_char_boundary((start + len) as usize),
            "token range {start}+{len} is not on char boundaries of {line:?}"
        );
        Token {
            line,
            start,
            len,
            pos,
            kind,
        }
    }

    /// The token's text.
    #[inline]
    pub fn as_str(&self) -> &'src str {
        &self.line[self.start as usize..(self.start + self.len) as usize]
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Byte offset of the token within its line.
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Length of the token text in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Only string literals can be empty (`""`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `"<kind name>: <text>"`, for diagnostics.
    pub fn describe(&self) -> String {
        format!("{}: {}", self.kind.name(), self.as_str())
    }

    /// The token text, optionally prefixed by its kind name.
    pub fn render(&self, text_only: bool) -> String {
        if text_only {
            self.as_str().to_owned()
        } else {
            self.describe()
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.as_str(), self.pos)
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.kind == other.kind && self.as_str() == other.as_str()
    }
}

impl Eq for Token<'_> {}

impl Hash for Token<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
        self.pos.hash(state);
        self.kind.hash(state);
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
