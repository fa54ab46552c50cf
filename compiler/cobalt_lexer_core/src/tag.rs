//! Token kind taxonomy.
//!
//! `TokenKind` is the closed set of lexical categories the scanner can
//! produce. Discriminants are grouped into semantic ranges so range checks
//! stay cheap:
//!
//! | Range  | Group                         |
//! |--------|-------------------------------|
//! | 0-15   | identifiers, keywords, literals |
//! | 32-79  | operators                     |
//! | 80-95  | punctuation                   |

use std::fmt;

/// A lexical category.
///
/// Every lexable unit maps to exactly one kind, decided by the scanning rule
/// that matched it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // === Identifiers, Keywords & Literals: 0-15 ===
    Ident = 0,
    Keyword,
    /// `nonzero-digit { ' | digit }*`
    Int,
    /// `digit { ' | digit }* . { ' | digit }*`
    Float,
    /// `0x hex-digit { ' | hex-digit }*`
    HexInt,
    /// `0b binary-digit { ' | binary-digit }*`
    BinInt,
    String,
    Char,

    // === Operators: 32-79 ===
    Slash = 32,
    SlashEqual,
    Less,
    LessEqual,
    Shl,
    ShlEqual,
    Spaceship,
    Greater,
    GreaterEqual,
    Shr,
    ShrEqual,
    Plus,
    PlusPlus,
    PlusEqual,
    Minus,
    MinusMinus,
    MinusEqual,
    Arrow,
    Pipe,
    PipeEqual,
    PipePipe,
    PipePipeEqual,
    Ampersand,
    AmpersandEqual,
    AmpersandAmpersand,
    AmpersandAmpersandEqual,
    Star,
    StarEqual,
    Percent,
    PercentEqual,
    Caret,
    CaretEqual,
    Tilde,
    TildeEqual,
    Equal,
    EqualEqual,
    Bang,
    BangEqual,

    // === Punctuation: 80-95 ===
    LeftBrace = 80,
    RightBrace,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Colon,
    Semicolon,
    Comma,
    Dot,
    Dollar,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 57] = [
        TokenKind::Ident,
        TokenKind::Keyword,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::HexInt,
        TokenKind::BinInt,
        TokenKind::String,
        TokenKind::Char,
        TokenKind::Slash,
        TokenKind::SlashEqual,
        TokenKind::Less,
        TokenKind::LessEqual,
        TokenKind::Shl,
        TokenKind::ShlEqual,
        TokenKind::Spaceship,
        TokenKind::Greater,
        TokenKind::GreaterEqual,
        TokenKind::Shr,
        TokenKind::ShrEqual,
        TokenKind::Plus,
        TokenKind::PlusPlus,
        TokenKind::PlusEqual,
        TokenKind::Minus,
        TokenKind::MinusMinus,
        TokenKind::MinusEqual,
        TokenKind::Arrow,
        TokenKind::Pipe,
        TokenKind::PipeEqual,
        TokenKind::PipePipe,
        TokenKind::PipePipeEqual,
        TokenKind::Ampersand,
        TokenKind::AmpersandEqual,
        TokenKind::AmpersandAmpersand,
        TokenKind::AmpersandAmpersandEqual,
        TokenKind::Star,
        TokenKind::StarEqual,
        TokenKind::Percent,
        TokenKind::PercentEqual,
        TokenKind::Caret,
        TokenKind::CaretEqual,
        TokenKind::Tilde,
        TokenKind::TildeEqual,
        TokenKind::Equal,
        TokenKind::EqualEqual,
        TokenKind::Bang,
        TokenKind::BangEqual,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Dollar,
    ];

    /// The fixed spelling of operators and punctuation.
    ///
    /// Returns `None` for kinds whose text varies (identifiers, keywords,
    /// literals).
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Ident
            | TokenKind::Keyword
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::HexInt
            | TokenKind::BinInt
            | TokenKind::String
            | TokenKind::Char => return None,
            TokenKind::Slash => "/",
            TokenKind::SlashEqual => "/=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Shl => "<<",
            TokenKind::ShlEqual => "<<=",
            TokenKind::Spaceship => "<=>",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Shr => ">>",
            TokenKind::ShrEqual => ">>=",
            TokenKind::Plus => "+",
            TokenKind::PlusPlus => "++",
            TokenKind::PlusEqual => "+=",
            TokenKind::Minus => "-",
            TokenKind::MinusMinus => "--",
            TokenKind::MinusEqual => "-=",
            TokenKind::Arrow => "->",
            TokenKind::Pipe => "|",
            TokenKind::PipeEqual => "|=",
            TokenKind::PipePipe => "||",
            TokenKind::PipePipeEqual => "||=",
            TokenKind::Ampersand => "&",
            TokenKind::AmpersandEqual => "&=",
            TokenKind::AmpersandAmpersand => "&&",
            TokenKind::AmpersandAmpersandEqual => "&&=",
            TokenKind::Star => "*",
            TokenKind::StarEqual => "*=",
            TokenKind::Percent => "%",
            TokenKind::PercentEqual => "%=",
            TokenKind::Caret => "^",
            TokenKind::CaretEqual => "^=",
            TokenKind::Tilde => "~",
            TokenKind::TildeEqual => "~=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Dollar => "$",
        };
        Some(text)
    }

    /// Human-readable name for diagnostics and debug output.
    ///
    /// No other computation depends on these strings.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Int => "decimal literal",
            TokenKind::Float => "floating-point literal",
            TokenKind::HexInt => "hexadecimal literal",
            TokenKind::BinInt => "binary literal",
            TokenKind::String => "string literal",
            TokenKind::Char => "character literal",
            TokenKind::Slash => "`/`",
            TokenKind::SlashEqual => "`/=`",
            TokenKind::Less => "`<`",
            TokenKind::LessEqual => "`<=`",
            TokenKind::Shl => "`<<`",
            TokenKind::ShlEqual => "`<<=`",
            TokenKind::Spaceship => "`<=>`",
            TokenKind::Greater => "`>`",
            TokenKind::GreaterEqual => "`>=`",
            TokenKind::Shr => "`>>`",
            TokenKind::ShrEqual => "`>>=`",
            TokenKind::Plus => "`+`",
            TokenKind::PlusPlus => "`++`",
            TokenKind::PlusEqual => "`+=`",
            TokenKind::Minus => "`-`",
            TokenKind::MinusMinus => "`--`",
            TokenKind::MinusEqual => "`-=`",
            TokenKind::Arrow => "`->`",
            TokenKind::Pipe => "`|`",
            TokenKind::PipeEqual => "`|=`",
            TokenKind::PipePipe => "`||`",
            TokenKind::PipePipeEqual => "`||=`",
            TokenKind::Ampersand => "`&`",
            TokenKind::AmpersandEqual => "`&=`",
            TokenKind::AmpersandAmpersand => "`&&`",
            TokenKind::AmpersandAmpersandEqual => "`&&=`",
            TokenKind::Star => "`*`",
            TokenKind::StarEqual => "`*=`",
            TokenKind::Percent => "`%`",
            TokenKind::PercentEqual => "`%=`",
            TokenKind::Caret => "`^`",
            TokenKind::CaretEqual => "`^=`",
            TokenKind::Tilde => "`~`",
            TokenKind::TildeEqual => "`~=`",
            TokenKind::Equal => "`=`",
            TokenKind::EqualEqual => "`==`",
            TokenKind::Bang => "`!`",
            TokenKind::BangEqual => "`!=`",
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::LeftBracket => "`[`",
            TokenKind::RightBracket => "`]`",
            TokenKind::Colon => "`:`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::Dollar => "`$`",
        }
    }

    /// Numeric, string and character literals.
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(self as u8, 2..=15)
    }

    #[inline]
    pub fn is_operator(self) -> bool {
        matches!(self as u8, 32..=79)
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        matches!(self as u8, 80..=95)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
