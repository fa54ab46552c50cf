use super::*;
use std::collections::HashSet;

// === TokenKind discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    // Identifiers, Keywords & Literals: 0-15
    assert_eq!(TokenKind::Ident as u8, 0);
    assert_eq!(TokenKind::Keyword as u8, 1);
    assert_eq!(TokenKind::Int as u8, 2);
    assert_eq!(TokenKind::Char as u8, 7);

    // Operators: 32-79
    assert_eq!(TokenKind::Slash as u8, 32);
    assert_eq!(TokenKind::BangEqual as u8, 69);

    // Punctuation: 80-95
    assert_eq!(TokenKind::LeftBrace as u8, 80);
    assert_eq!(TokenKind::Dollar as u8, 90);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

#[test]
fn all_is_in_discriminant_order_without_duplicates() {
    let mut seen = HashSet::new();
    let mut previous = None;
    for kind in TokenKind::ALL {
        assert!(seen.insert(kind), "{kind:?} listed twice");
        if let Some(prev) = previous {
            assert!((prev as u8) < (kind as u8), "{kind:?} out of order");
        }
        previous = Some(kind);
    }
}

// === Groups ===

#[test]
fn every_kind_is_in_exactly_one_group() {
    for kind in TokenKind::ALL {
        let word = matches!(kind, TokenKind::Ident | TokenKind::Keyword);
        let groups = [
            word,
            kind.is_literal(),
            kind.is_operator(),
            kind.is_punctuation(),
        ];
        assert_eq!(
            groups.iter().filter(|&&g| g).count(),
            1,
            "{kind:?} is not in exactly one group"
        );
    }
}

#[test]
fn literal_kinds() {
    for kind in [
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::HexInt,
        TokenKind::BinInt,
        TokenKind::String,
        TokenKind::Char,
    ] {
        assert!(kind.is_literal(), "{kind:?}");
    }
    assert!(!TokenKind::Ident.is_literal());
    assert!(!TokenKind::Keyword.is_literal());
}

// === Lexeme ===

#[test]
fn fixed_lexeme_comparison_operators() {
    assert_eq!(TokenKind::Less.lexeme(), Some("<"));
    assert_eq!(TokenKind::LessEqual.lexeme(), Some("<="));
    assert_eq!(TokenKind::Spaceship.lexeme(), Some("<=>"));
    assert_eq!(TokenKind::Greater.lexeme(), Some(">"));
    assert_eq!(TokenKind::GreaterEqual.lexeme(), Some(">="));
    assert_eq!(TokenKind::EqualEqual.lexeme(), Some("=="));
    assert_eq!(TokenKind::BangEqual.lexeme(), Some("!="));
}

#[test]
fn fixed_lexeme_compound_assignment() {
    assert_eq!(TokenKind::SlashEqual.lexeme(), Some("/="));
    assert_eq!(TokenKind::ShlEqual.lexeme(), Some("<<="));
    assert_eq!(TokenKind::ShrEqual.lexeme(), Some(">>="));
    assert_eq!(TokenKind::PipePipeEqual.lexeme(), Some("||="));
    assert_eq!(TokenKind::AmpersandAmpersandEqual.lexeme(), Some("&&="));
    assert_eq!(TokenKind::TildeEqual.lexeme(), Some("~="));
}

#[test]
fn fixed_lexeme_punctuation() {
    assert_eq!(TokenKind::LeftBrace.lexeme(), Some("{"));
    assert_eq!(TokenKind::RightBracket.lexeme(), Some("]"));
    assert_eq!(TokenKind::Semicolon.lexeme(), Some(";"));
    assert_eq!(TokenKind::Dollar.lexeme(), Some("$"));
}

#[test]
fn variable_lexeme_returns_none() {
    assert_eq!(TokenKind::Ident.lexeme(), None);
    assert_eq!(TokenKind::Keyword.lexeme(), None);
    assert_eq!(TokenKind::Int.lexeme(), None);
    assert_eq!(TokenKind::Float.lexeme(), None);
    assert_eq!(TokenKind::HexInt.lexeme(), None);
    assert_eq!(TokenKind::BinInt.lexeme(), None);
    assert_eq!(TokenKind::String.lexeme(), None);
    assert_eq!(TokenKind::Char.lexeme(), None);
}

#[test]
fn fixed_lexemes_are_unique_and_short() {
    let mut seen = HashSet::new();
    for kind in TokenKind::ALL {
        if let Some(text) = kind.lexeme() {
            assert!((1..=3).contains(&text.len()), "{kind:?}");
            assert!(seen.insert(text), "{text} spelled by two kinds");
        }
    }
}

// === Name ===

#[test]
fn name_returns_readable_description() {
    assert_eq!(TokenKind::Ident.name(), "identifier");
    assert_eq!(TokenKind::Keyword.name(), "keyword");
    assert_eq!(TokenKind::Int.name(), "decimal literal");
    assert_eq!(TokenKind::Float.name(), "floating-point literal");
    assert_eq!(TokenKind::HexInt.name(), "hexadecimal literal");
    assert_eq!(TokenKind::BinInt.name(), "binary literal");
    assert_eq!(TokenKind::String.name(), "string literal");
    assert_eq!(TokenKind::Char.name(), "character literal");
    assert_eq!(TokenKind::Spaceship.name(), "`<=>`");
    assert_eq!(TokenKind::Arrow.name(), "`->`");
}

#[test]
fn fixed_names_quote_their_lexeme() {
    for kind in TokenKind::ALL {
        if let Some(text) = kind.lexeme() {
            assert_eq!(kind.name(), format!("`{text}`"));
        }
    }
}

#[test]
fn display_uses_name() {
    assert_eq!(TokenKind::ShlEqual.to_string(), "`<<=`");
    assert_eq!(TokenKind::Ident.to_string(), "identifier");
}
