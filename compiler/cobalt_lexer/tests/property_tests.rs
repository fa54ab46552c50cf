//! Property-based tests for the Cobalt lexer.
//!
//! These tests use proptest to generate lines and verify:
//! 1. Maximal munch: operator soup always splits into the longest forms
//! 2. Idempotence: lexing the same line table twice gives identical results
//! 3. Round trip: token and comment text reproduces the non-whitespace
//!    content of literal-free input
//! 4. Robustness: arbitrary text never panics and every token is a valid
//!    slice of its line

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use cobalt_ir::{Position, SourceLine};
use cobalt_lexer::{lex, lex_line, CommentState, Token, TokenKind};
use proptest::prelude::*;

// -- Helpers --

fn table(lines: &[String]) -> Vec<SourceLine> {
    std::iter::once(SourceLine::header())
        .chain(lines.iter().map(SourceLine::cobalt))
        .collect()
}

fn lex_one(line: &str) -> (Vec<Token<'_>>, usize) {
    let mut tokens = Vec::new();
    let mut comments = Vec::new();
    let mut errors = Vec::new();
    lex_line(
        line,
        1,
        &mut CommentState::Closed,
        &mut tokens,
        &mut comments,
        &mut errors,
    );
    (tokens, errors.len())
}

fn is_fixed_lexeme(text: &str) -> bool {
    TokenKind::ALL.iter().any(|kind| kind.lexeme() == Some(text))
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

// -- Strategies --

/// Operator and punctuation characters, without `/` (comment introducer).
fn operator_soup() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[<>=+\-|\&*%^\~!{}()\[\]:;,.$]{1,24}").expect("valid regex")
}

/// Lines that lex without errors: no quotes, no radix introducers, no
/// characters outside the token alphabet.
fn literal_free_line() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[ac-wyz_0-9 \t<>=+\-|\&*%^\~!{}()\[\]:;,.$/]{0,40}")
        .expect("valid regex")
}

fn fixed_lexeme() -> impl Strategy<Value = &'static str> {
    let lexemes: Vec<&'static str> = TokenKind::ALL
        .iter()
        .filter_map(|kind| kind.lexeme())
        .filter(|text| !text.starts_with('/'))
        .collect();
    prop::sample::select(lexemes)
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn spaced_operators_lex_to_themselves(ops in prop::collection::vec(fixed_lexeme(), 1..12)) {
        let line = ops.join(" ");
        let (tokens, errors) = lex_one(&line);
        prop_assert_eq!(errors, 0);
        let texts: Vec<&str> = tokens.iter().map(Token::as_str).collect();
        prop_assert_eq!(texts, ops);
    }

    #[test]
    fn operator_soup_takes_longest_forms(soup in operator_soup()) {
        let (tokens, errors) = lex_one(&soup);
        prop_assert_eq!(errors, 0);

        let joined: String = tokens.iter().map(Token::as_str).collect();
        prop_assert_eq!(&joined, &soup);

        for pair in tokens.windows(2) {
            let next = &pair[1].as_str()[..1];
            let extended = format!("{}{}", pair[0].as_str(), next);
            prop_assert!(
                !is_fixed_lexeme(&extended),
                "{:?} then {:?} should have been one token",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn lexing_is_idempotent(lines in prop::collection::vec("\\PC{0,30}", 0..6)) {
        let source = table(&lines);
        let mut first_errors = Vec::new();
        let mut second_errors = Vec::new();
        let first = lex(&source, &mut first_errors);
        let second = lex(&source, &mut second_errors);
        prop_assert_eq!(first.sections(), second.sections());
        prop_assert_eq!(first.comments(), second.comments());
        prop_assert_eq!(first_errors, second_errors);
    }

    #[test]
    fn literal_free_input_round_trips(lines in prop::collection::vec(literal_free_line(), 1..5)) {
        let source = table(&lines);
        let mut errors = Vec::new();
        let tokens = lex(&source, &mut errors);
        prop_assert!(errors.is_empty(), "{:?}", errors);

        let mut pieces: Vec<(Position, &str)> = tokens
            .sections()
            .values()
            .flatten()
            .map(|token| (token.position(), token.as_str()))
            .collect();
        pieces.extend(tokens.comments().iter().map(|c| (c.pos, c.as_str())));
        pieces.sort_by_key(|&(pos, _)| pos);

        let rebuilt: String = pieces.iter().map(|&(_, text)| text).collect();
        prop_assert_eq!(strip_whitespace(&rebuilt), strip_whitespace(&lines.concat()));
    }

    #[test]
    fn arbitrary_text_never_panics(line in "\\PC{0,60}") {
        let (tokens, _) = lex_one(&line);
        let mut last_column = 0;
        for token in &tokens {
            let pos = token.position();
            prop_assert_eq!(pos.line, 1);
            prop_assert!(pos.column > last_column, "tokens out of order");
            prop_assert_eq!(&line[pos.offset() as usize..][..token.as_str().len()], token.as_str());
            last_column = pos.column;
        }
    }
}
