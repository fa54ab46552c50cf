//! Section aggregation.
//!
//! A section is a contiguous run of Cobalt lines. [`Tokens::lex`] walks the
//! classified line table, opens one section per run keyed by the run's first
//! line number, and feeds each line of the run to [`lex_line`]. Block
//! comment state is reset at the start of every run, so an unclosed comment
//! never leaks across passthrough text.

use std::collections::BTreeMap;
use std::fmt;

use cobalt_ir::{Comment, SourceLine};
use tracing::{debug, trace};

use crate::{lex_line, CommentState, LexError, Token};

/// Lexed tokens per section, plus every comment in the file.
#[derive(Clone, Debug, Default)]
pub struct Tokens<'src> {
    sections: BTreeMap<u32, Vec<Token<'src>>>,
    comments: Vec<Comment<'src>>,
}

impl<'src> Tokens<'src> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lex every Cobalt section of `lines`.
    ///
    /// `lines[0]` is the reserved header and is never scanned; line numbers
    /// are indices into `lines`. Diagnostics are appended to `errors` in
    /// discovery order.
    #[tracing::instrument(level = "debug", skip_all, fields(lines = lines.len()))]
    pub fn lex(&mut self, lines: &'src [SourceLine], errors: &mut Vec<LexError>) {
        let errors_before = errors.len();
        let mut index = 1;

        while index < lines.len() {
            if !lines[index].category.is_cobalt() {
                index += 1;
                continue;
            }

            let first = line_number(index);
            trace!(line = first, "opening section");
            let mut state = CommentState::Closed;
            let section = self.sections.entry(first).or_default();

            while let Some(line) = lines.get(index).filter(|l| l.category.is_cobalt()) {
                lex_line(
                    &line.text,
                    line_number(index),
                    &mut state,
                    section,
                    &mut self.comments,
                    errors,
                );
                index += 1;
            }

            if let Some(comment) = state.finish() {
                trace!(line = comment.pos.line, "section ended inside a block comment");
                self.comments.push(comment);
            }
        }

        debug!(
            sections = self.sections.len(),
            tokens = self.token_count(),
            comments = self.comments.len(),
            errors = errors.len() - errors_before,
            "lexed"
        );
    }

    /// Every section, keyed by its first line number.
    pub fn sections(&self) -> &BTreeMap<u32, Vec<Token<'src>>> {
        &self.sections
    }

    /// The tokens of the section starting at `line`.
    pub fn section(&self, line: u32) -> Option<&[Token<'src>]> {
        self.sections.get(&line).map(Vec::as_slice)
    }

    /// Every comment, in discovery order.
    pub fn comments(&self) -> &[Comment<'src>] {
        &self.comments
    }

    pub fn token_count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Render the sections and comments for inspection.
    ///
    /// ```text
    /// --- Section starting at line 2
    ///     main (2,1) identifier
    /// --- Comments
    ///     (3,5) // note
    /// ```
    pub fn debug_print(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for (line, tokens) in &self.sections {
            writeln!(out, "--- Section starting at line {line}")?;
            for token in tokens {
                let pos = token.position();
                writeln!(
                    out,
                    "    {} ({},{}) {}",
                    token,
                    pos.line,
                    pos.column,
                    token.kind()
                )?;
            }
        }
        writeln!(out, "--- Comments")?;
        for comment in &self.comments {
            writeln!(
                out,
                "    ({},{}) {}",
                comment.pos.line,
                comment.pos.column,
                comment.as_str()
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Tokens<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.debug_print(f)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "line tables are indexed by u32 line numbers"
)]
#[inline]
fn line_number(index: usize) -> u32 {
    index as u32
}
