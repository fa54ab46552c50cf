//! Single-line scanner.
//!
//! [`lex_line`] tokenizes one physical line with maximal munch, threading the
//! block comment state through from the previous line of the section.
//!
//! The scanner has two modes. While a block comment is open it only looks
//! for `*/`; everything up to it is appended to the comment. Otherwise it
//! dispatches on the current byte: operators and punctuation, comments,
//! numeric literals, string and character literals (with an optional `u` or
//! `u8` encoding prefix), keywords and identifiers, whitespace. Any other
//! character is reported and skipped.
//!
//! Errors never stop the scan. Each one is appended to the error list and
//! scanning resumes past the offending construct.

use cobalt_ir::{Comment, CommentKind, Position};
use cobalt_lexer_core::chars::{
    is_binary_digit, is_digit, is_hexadecimal_digit, separated_run_len, starts_with_identifier,
};
use cobalt_lexer_core::escape::quoted_char;
use cobalt_lexer_core::{LineCursor, TokenKind};

use crate::keywords::is_keyword;
use crate::{CommentState, LexError, Token};

/// Tokenize one line.
///
/// Tokens and comments are appended to `tokens` and `comments`, diagnostics
/// to `errors`. `state` carries an open block comment in from the previous
/// line and out to the next one.
///
/// Returns `true` if at least one token was added.
pub fn lex_line<'src>(
    line: &'src str,
    lineno: u32,
    state: &mut CommentState,
    tokens: &mut Vec<Token<'src>>,
    comments: &mut Vec<Comment<'src>>,
    errors: &mut Vec<LexError>,
) -> bool {
    let original_count = tokens.len();

    LineLexer {
        cursor: LineCursor::new(line),
        lineno,
        state,
        tokens: &mut *tokens,
        comments,
        errors,
    }
    .run();

    assert!(
        tokens.len() >= original_count,
        "lexer lost tokens on line {lineno}"
    );
    tokens.len() > original_count
}

struct LineLexer<'src, 'a> {
    cursor: LineCursor<'src>,
    lineno: u32,
    state: &'a mut CommentState,
    tokens: &'a mut Vec<Token<'src>>,
    comments: &'a mut Vec<Comment<'src>>,
    errors: &'a mut Vec<LexError>,
}

impl<'src> LineLexer<'src, '_> {
    fn run(&mut self) {
        loop {
            if self.state.is_open() {
                self.comment_body();
            }
            if self.cursor.is_eof() {
                return;
            }
            self.next_token();
        }
    }

    #[inline]
    fn position(&self, offset: u32) -> Position {
        Position::at_offset(self.lineno, offset)
    }

    /// Emit a token of `len` bytes at the cursor and advance past it.
    fn emit(&mut self, len: u32, kind: TokenKind) {
        let start = self.cursor.pos();
        self.emit_at(start, len, kind);
        self.cursor.advance_n(len);
    }

    /// Emit a token at an explicit offset without moving the cursor.
    fn emit_at(&mut self, start: u32, len: u32, kind: TokenKind) {
        let pos = self.position(start);
        self.tokens
            .push(Token::new(self.cursor.line(), start, len, pos, kind));
    }

    #[cold]
    fn error(&mut self, err: LexError) {
        self.errors.push(err);
    }

    // === Dispatch ===

    fn next_token(&mut self) {
        let peek1 = self.cursor.peek();
        let peek2 = self.cursor.peek2();
        match self.cursor.current() {
            b'/' => match peek1 {
                b'*' => self.block_comment_open(),
                b'/' => self.line_comment(),
                b'=' => self.emit(2, TokenKind::SlashEqual),
                _ => self.emit(1, TokenKind::Slash),
            },
            b'<' => match (peek1, peek2) {
                (b'<', b'=') => self.emit(3, TokenKind::ShlEqual),
                (b'<', _) => self.emit(2, TokenKind::Shl),
                (b'=', b'>') => self.emit(3, TokenKind::Spaceship),
                (b'=', _) => self.emit(2, TokenKind::LessEqual),
                _ => self.emit(1, TokenKind::Less),
            },
            b'>' => match (peek1, peek2) {
                (b'>', b'=') => self.emit(3, TokenKind::ShrEqual),
                (b'>', _) => self.emit(2, TokenKind::Shr),
                (b'=', _) => self.emit(2, TokenKind::GreaterEqual),
                _ => self.emit(1, TokenKind::Greater),
            },
            b'+' => match peek1 {
                b'+' => self.emit(2, TokenKind::PlusPlus),
                b'=' => self.emit(2, TokenKind::PlusEqual),
                _ => self.emit(1, TokenKind::Plus),
            },
            b'-' => match peek1 {
                b'-' => self.emit(2, TokenKind::MinusMinus),
                b'=' => self.emit(2, TokenKind::MinusEqual),
                b'>' => self.emit(2, TokenKind::Arrow),
                _ => self.emit(1, TokenKind::Minus),
            },
            b'|' => match (peek1, peek2) {
                (b'|', b'=') => self.emit(3, TokenKind::PipePipeEqual),
                (b'|', _) => self.emit(2, TokenKind::PipePipe),
                (b'=', _) => self.emit(2, TokenKind::PipeEqual),
                _ => self.emit(1, TokenKind::Pipe),
            },
            b'&' => match (peek1, peek2) {
                (b'&', b'=') => self.emit(3, TokenKind::AmpersandAmpersandEqual),
                (b'&', _) => self.emit(2, TokenKind::AmpersandAmpersand),
                (b'=', _) => self.emit(2, TokenKind::AmpersandEqual),
                _ => self.emit(1, TokenKind::Ampersand),
            },
            b'*' => self.with_equal(TokenKind::Star, TokenKind::StarEqual),
            b'%' => self.with_equal(TokenKind::Percent, TokenKind::PercentEqual),
            b'^' => self.with_equal(TokenKind::Caret, TokenKind::CaretEqual),
            b'~' => self.with_equal(TokenKind::Tilde, TokenKind::TildeEqual),
            b'=' => self.with_equal(TokenKind::Equal, TokenKind::EqualEqual),
            b'!' => self.with_equal(TokenKind::Bang, TokenKind::BangEqual),

            b'{' => self.emit(1, TokenKind::LeftBrace),
            b'}' => self.emit(1, TokenKind::RightBrace),
            b'(' => self.emit(1, TokenKind::LeftParen),
            b')' => self.emit(1, TokenKind::RightParen),
            b'[' => self.emit(1, TokenKind::LeftBracket),
            b']' => self.emit(1, TokenKind::RightBracket),
            b':' => self.emit(1, TokenKind::Colon),
            b';' => self.emit(1, TokenKind::Semicolon),
            b',' => self.emit(1, TokenKind::Comma),
            b'.' => self.emit(1, TokenKind::Dot),
            b'$' => self.emit(1, TokenKind::Dollar),

            b'0' if matches!(peek1, b'b' | b'B' | b'x' | b'X') => self.radix_literal(peek1),
            b'0'..=b'9' => self.decimal_literal(),

            _ => self.word_or_other(),
        }
    }

    /// `X=` or `X`.
    fn with_equal(&mut self, plain: TokenKind, compound: TokenKind) {
        if self.cursor.peek() == b'=' {
            self.emit(2, compound);
        } else {
            self.emit(1, plain);
        }
    }

    /// Literals with an encoding prefix, keywords, identifiers, whitespace,
    /// and anything unrecognized.
    fn word_or_other(&mut self) {
        if let Some(prefix) = self.encoding_prefix_and(b'"') {
            self.string_literal(prefix);
        } else if let Some(prefix) = self.encoding_prefix_and(b'\'') {
            self.char_literal(prefix);
        } else {
            let len = starts_with_identifier(self.cursor.rest());
            if len > 0 {
                self.word(len);
                return;
            }
            match self.cursor.current_char() {
                Some(c) if c.is_whitespace() => self.cursor.advance_char(),
                Some(c) => {
                    let pos = self.position(self.cursor.pos());
                    self.error(LexError::unexpected_text(pos, c));
                    self.cursor.advance_char();
                }
                None => {}
            }
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "identifier length is bounded by the line length"
    )]
    fn word(&mut self, len: usize) {
        let start = self.cursor.pos() as usize;
        let kind = if is_keyword(&self.cursor.line()[start..start + len]) {
            TokenKind::Keyword
        } else {
            TokenKind::Ident
        };
        self.emit(len as u32, kind);
    }

    // === Comments ===

    fn line_comment(&mut self) {
        let start = self.cursor.pos();
        let pos = self.position(start);
        self.comments.push(Comment::line(pos, self.cursor.rest()));
        self.cursor.advance_to_end();
    }

    fn block_comment_open(&mut self) {
        let pos = self.position(self.cursor.pos());
        self.state.open(pos);
        self.cursor.advance_n(2);
    }

    /// Consume the open comment up to and including `*/`, or to the end of
    /// the line.
    fn comment_body(&mut self) {
        match self.cursor.find_from(b"*/") {
            Some(offset) => {
                let start = self.cursor.pos();
                self.state
                    .push_str(self.cursor.slice(start, start + offset + 2));
                self.cursor.advance_n(offset + 2);
                if let Some((pos, text)) = self.state.close() {
                    self.comments
                        .push(Comment::new(pos, text, CommentKind::Block));
                }
            }
            None => {
                self.state.push_str(self.cursor.rest());
                self.state.push_str("\n");
                self.cursor.advance_to_end();
            }
        }
    }

    // === Numeric literals ===

    /// `0b`, `0B`, `0x`, `0X`.
    fn radix_literal(&mut self, marker: u8) {
        let start = self.cursor.pos();
        let pos = self.position(start);
        let bytes = self.cursor.bytes();
        match marker {
            b'b' if is_binary_digit(self.cursor.peek2()) => {
                let len = 2 + separated_run_len(bytes, start + 2, is_binary_digit);
                self.emit(len, TokenKind::BinInt);
            }
            b'x' if is_hexadecimal_digit(self.cursor.peek2()) => {
                let len = 2 + separated_run_len(bytes, start + 2, is_hexadecimal_digit);
                self.emit(len, TokenKind::HexInt);
            }
            b'b' => self.introducer_error(LexError::empty_binary_literal(pos)),
            b'B' => self.introducer_error(LexError::uppercase_binary_prefix(pos)),
            b'x' => self.introducer_error(LexError::empty_hex_literal(pos)),
            _ => self.introducer_error(LexError::uppercase_hex_prefix(pos)),
        }
    }

    /// Report a bad radix introducer and skip just the two introducer bytes.
    #[cold]
    fn introducer_error(&mut self, err: LexError) {
        self.error(err);
        self.cursor.advance_n(2);
    }

    /// `digit { ' | digit }*`, optionally followed by `. { ' | digit }*`.
    fn decimal_literal(&mut self) {
        let start = self.cursor.pos();
        let bytes = self.cursor.bytes();
        let mut len = 1 + separated_run_len(bytes, start + 1, is_digit);
        if self.cursor.peek_at(len) == b'.' {
            len += 1 + separated_run_len(bytes, start + len + 1, is_digit);
            self.emit(len, TokenKind::Float);
        } else {
            self.emit(len, TokenKind::Int);
        }
    }

    // === String and character literals ===

    /// Offset of the literal body if the cursor is at an optional `u` / `u8`
    /// prefix followed by `quote`.
    fn encoding_prefix_and(&self, quote: u8) -> Option<u32> {
        let cursor = &self.cursor;
        if cursor.current() == quote {
            Some(1)
        } else if cursor.current() != b'u' {
            None
        } else if cursor.peek() == quote {
            Some(2)
        } else if cursor.peek() == b'8' && cursor.peek2() == quote {
            Some(3)
        } else {
            None
        }
    }

    /// Scan one quoted character at `at`, reporting a malformed universal
    /// character name where it starts.
    fn quoted_char(&mut self, at: u32, quote: u8) -> u32 {
        let scanned = quoted_char(self.cursor.bytes(), at, quote);
        if scanned.malformed_ucn {
            let pos = self.position(at);
            self.error(LexError::invalid_universal_character_name(pos));
        }
        scanned.len
    }

    /// `{ prefix }? " { s-char }* "`
    ///
    /// The token covers the body only. A missing closing quote is reported
    /// but the token is still emitted, and scanning resumes past whatever
    /// ended the body.
    fn string_literal(&mut self, body_offset: u32) {
        let start = self.cursor.pos();
        let body_start = start + body_offset;
        let mut end = body_start;
        loop {
            let len = self.quoted_char(end, b'"');
            if len == 0 {
                break;
            }
            end += len;
        }

        let stop = self.cursor.bytes().get(end as usize).copied();
        if stop != Some(b'"') {
            let pos = self.position(start);
            let text = self.cursor.slice(body_start, end);
            self.error(LexError::unterminated_string(pos, text));
        }
        self.emit_at(body_start, end - body_start, TokenKind::String);
        // Skip the closing quote, or the lone `\` that ended the body.
        self.cursor.advance_n(end - start + u32::from(stop.is_some()));
    }

    /// `{ prefix }? ' c-char '`
    ///
    /// An empty literal is reported and produces no token. Scanning resumes
    /// past its quotes.
    fn char_literal(&mut self, body_offset: u32) {
        let start = self.cursor.pos();
        let body_start = start + body_offset;
        let len = self.quoted_char(body_start, b'\'');

        if len == 0 {
            let pos = self.position(start);
            self.error(LexError::empty_char_literal(pos));
            let closing = u32::from(self.cursor.peek_at(body_offset) == b'\'');
            self.cursor.advance_n(body_offset + closing);
            return;
        }

        let end = body_start + len;
        let closed = self.cursor.bytes().get(end as usize) == Some(&b'\'');
        if !closed {
            let pos = self.position(start);
            let text = self.cursor.slice(body_start, end);
            self.error(LexError::unterminated_char(pos, text));
        }
        self.emit_at(body_start, len, TokenKind::Char);
        self.cursor.advance_n(end - start + u32::from(closed));
    }
}
