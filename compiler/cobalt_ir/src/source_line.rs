//! Classified source lines.
//!
//! The line loader splits a file into physical lines and tags each one with
//! a [`LineCategory`]. The table it produces is indexed by line number, so
//! entry 0 is a reserved header that no stage scans.

/// What a physical line belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineCategory {
    /// Whitespace only.
    Blank,
    /// A preprocessor directive, copied through verbatim.
    Preprocessor,
    /// Host-language text, copied through verbatim.
    Passthrough,
    /// Cobalt syntax, tokenized by the lexer.
    Cobalt,
}

impl LineCategory {
    /// Returns `true` for lines the lexer must tokenize.
    #[inline]
    pub fn is_cobalt(self) -> bool {
        matches!(self, LineCategory::Cobalt)
    }
}

/// One physical line of source text and its classification.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLine {
    pub category: LineCategory,
    /// Line text without its terminating newline.
    pub text: String,
}

impl SourceLine {
    /// Create a new source line.
    pub fn new(category: LineCategory, text: impl Into<String>) -> Self {
        SourceLine {
            category,
            text: text.into(),
        }
    }

    /// Shorthand for a Cobalt line.
    pub fn cobalt(text: impl Into<String>) -> Self {
        SourceLine::new(LineCategory::Cobalt, text)
    }

    /// Shorthand for a passthrough line.
    pub fn passthrough(text: impl Into<String>) -> Self {
        SourceLine::new(LineCategory::Passthrough, text)
    }

    /// The reserved entry at index 0 of every line table.
    pub fn header() -> Self {
        SourceLine::new(LineCategory::Blank, String::new())
    }
}
