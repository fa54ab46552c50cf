//! Lexer diagnostics.
//!
//! Lexing never fails as a whole: every problem in user input becomes a
//! [`LexError`] appended to the caller's error list, and scanning resumes
//! past the offending construct.

use cobalt_ir::Position;

/// A lexer diagnostic: where it happened and what went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{pos}: {kind}")]
pub struct LexError {
    pub pos: Position,
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
///
/// The `Display` text is the user-facing message.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    // === Numeric Errors ===
    #[error("binary literal cannot be empty (0b must be followed by binary digits)")]
    EmptyBinaryLiteral,
    #[error("0B is invalid - did you mean 0b to introduce a binary literal?")]
    UppercaseBinaryPrefix,
    #[error("hexadecimal literal cannot be empty (0x must be followed by hexadecimal digits)")]
    EmptyHexLiteral,
    #[error("0X is invalid - did you mean 0x to introduce a hexadecimal literal?")]
    UppercaseHexPrefix,

    // === String/Char Errors ===
    /// `text` is the literal body scanned before the missing quote.
    #[error("string literal \"{text}\" is missing its closing \"")]
    UnterminatedString { text: String },
    #[error("character literal '{text}' is missing its closing '")]
    UnterminatedChar { text: String },
    #[error("character literal is empty")]
    EmptyCharLiteral,
    #[error("invalid universal character name (\\u must be followed by 4 or 8 hexadecimal digits)")]
    InvalidUniversalCharacterName,

    // === Character Errors ===
    #[error("unexpected text '{found}'")]
    UnexpectedText { found: char },
}

impl LexError {
    /// The message without its position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    // === Factory methods ===

    #[cold]
    pub fn empty_binary_literal(pos: Position) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::EmptyBinaryLiteral,
        }
    }

    #[cold]
    pub fn uppercase_binary_prefix(pos: Position) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::UppercaseBinaryPrefix,
        }
    }

    #[cold]
    pub fn empty_hex_literal(pos: Position) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::EmptyHexLiteral,
        }
    }

    #[cold]
    pub fn uppercase_hex_prefix(pos: Position) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::UppercaseHexPrefix,
        }
    }

    #[cold]
    pub fn unterminated_string(pos: Position, text: &str) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::UnterminatedString {
                text: text.to_owned(),
            },
        }
    }

    #[cold]
    pub fn unterminated_char(pos: Position, text: &str) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::UnterminatedChar {
                text: text.to_owned(),
            },
        }
    }

    #[cold]
    pub fn empty_char_literal(pos: Position) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::EmptyCharLiteral,
        }
    }

    #[cold]
    pub fn invalid_universal_character_name(pos: Position) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::InvalidUniversalCharacterName,
        }
    }

    #[cold]
    pub fn unexpected_text(pos: Position, found: char) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::UnexpectedText { found },
        }
    }
}
