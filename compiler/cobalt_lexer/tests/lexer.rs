//! End-to-end lexing of classified line tables.

use cobalt_ir::{CommentKind, LineCategory, Position, SourceLine};
use cobalt_lexer::{lex, LexError, LexErrorKind, Token, TokenKind};
use pretty_assertions::assert_eq;

fn classify(text: &str) -> SourceLine {
    let trimmed = text.trim_start();
    let category = if trimmed.is_empty() {
        LineCategory::Blank
    } else if trimmed.starts_with('#') {
        LineCategory::Preprocessor
    } else if trimmed.starts_with("int ") || trimmed.starts_with("std::") {
        LineCategory::Passthrough
    } else {
        LineCategory::Cobalt
    };
    SourceLine::new(category, text)
}

fn load(source: &str) -> Vec<SourceLine> {
    std::iter::once(SourceLine::header())
        .chain(source.lines().map(classify))
        .collect()
}

fn described(tokens: &[Token<'_>]) -> Vec<String> {
    tokens.iter().map(Token::describe).collect()
}

const PROGRAM: &str = r#"#include <iostream>

main: () -> int = {
    /* greet the
       user */
    s: std::string = u8"hi\n";
    return s.size() <=> 0x2A; // done
}
int legacy();
f: (x: int) = x += 1'000;
"#;

#[test]
fn lexes_a_mixed_file() {
    init();
    let lines = load(PROGRAM);
    let mut errors = Vec::new();
    let tokens = lex(&lines, &mut errors);

    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(tokens.sections().keys().copied().collect::<Vec<_>>(), vec![3, 10]);

    let main = tokens.section(3).unwrap_or_default();
    assert_eq!(
        main.iter().map(Token::as_str).collect::<Vec<_>>(),
        vec![
            "main", ":", "(", ")", "->", "int", "=", "{", "s", ":", "std", ":", ":", "string",
            "=", "hi\\n", ";", "return", "s", ".", "size", "(", ")", "<=>", "0x2A", ";", "}",
        ]
    );
    assert_eq!(main[15].kind(), TokenKind::String);
    assert_eq!(main[15].position(), Position::new(6, 25));
    assert_eq!(main[23].kind(), TokenKind::Spaceship);

    let f = tokens.section(10).unwrap_or_default();
    assert_eq!(
        described(&f[8..]),
        vec!["identifier: x", "`+=`: +=", "decimal literal: 1'000", "`;`: ;"]
    );

    let comments: Vec<_> = tokens
        .comments()
        .iter()
        .map(|c| (c.pos, c.as_str(), c.kind))
        .collect();
    assert_eq!(
        comments,
        vec![
            (
                Position::new(4, 5),
                "/* greet the\n       user */",
                CommentKind::Block
            ),
            (Position::new(7, 31), "// done", CommentKind::Line),
        ]
    );
}

#[test]
fn recovers_from_every_error_in_one_pass() {
    let source = "\
a := 0b;
b := 0X1F;
c := '' + 'x;
d := \"open
e := \"\\u12\" @ ok
";
    let lines = load(source);
    let mut errors = Vec::new();
    let tokens = lex(&lines, &mut errors);

    let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            LexErrorKind::EmptyBinaryLiteral,
            LexErrorKind::UppercaseHexPrefix,
            LexErrorKind::EmptyCharLiteral,
            LexErrorKind::UnterminatedChar {
                text: String::from("x")
            },
            LexErrorKind::UnterminatedString {
                text: String::from("open")
            },
            LexErrorKind::InvalidUniversalCharacterName,
            LexErrorKind::UnexpectedText { found: '@' },
        ]
    );
    assert_eq!(errors[0].pos, Position::new(1, 6));
    assert_eq!(errors[5].pos, Position::new(5, 7));

    // Scanning always continues to the end of the section.
    let last = tokens
        .section(1)
        .and_then(|section| section.last())
        .map(Token::as_str);
    assert_eq!(last, Some("ok"));
}

#[test]
fn error_display_includes_position() {
    let lines = load("x := 0b2;");
    let mut errors = Vec::new();
    lex(&lines, &mut errors);
    assert_eq!(
        errors,
        vec![LexError::empty_binary_literal(Position::new(1, 6))]
    );
    assert_eq!(
        errors[0].to_string(),
        "1:6: binary literal cannot be empty (0b must be followed by binary digits)"
    );
}

#[test]
fn unclosed_comment_does_not_cross_passthrough() {
    let source = "\
x := 1; /* dangling
int passthrough();
y := 2; */
";
    let lines = load(source);
    let mut errors = Vec::new();
    let tokens = lex(&lines, &mut errors);

    assert!(errors.is_empty());
    assert_eq!(tokens.comments().len(), 1);
    assert_eq!(tokens.comments()[0].kind, CommentKind::UnclosedBlock);
    assert_eq!(tokens.comments()[0].as_str(), "/* dangling\n");
    assert_eq!(
        tokens
            .section(3)
            .unwrap_or_default()
            .iter()
            .map(Token::as_str)
            .collect::<Vec<_>>(),
        vec!["y", ":", "=", "2", ";", "*", "/"]
    );
}

#[test]
fn init_tracing_is_idempotent() {
    init();
    init();
}

fn init() {
    cobalt_lexer::init_tracing();
}
