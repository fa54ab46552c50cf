//! Cobalt lexer.
//!
//! Turns the classified line table into per-section token lists and a flat
//! comment list, collecting diagnostics without stopping at the first one.
//!
//! # Architecture
//!
//! - `cobalt_lexer_core`: token kinds, the line cursor, character and escape
//!   scanners (pure, no diagnostics)
//! - [`lex_line`]: maximal-munch scan of one physical line
//! - [`Tokens`]: groups contiguous Cobalt lines into sections and owns the
//!   results
//!
//! Tokens and comments borrow from the line table, so the table must
//! outlive them.
//!
//! # Example
//!
//! ```
//! use cobalt_ir::SourceLine;
//!
//! let lines = vec![SourceLine::header(), SourceLine::cobalt("x: int = 0x2A;")];
//! let mut errors = Vec::new();
//! let tokens = cobalt_lexer::lex(&lines, &mut errors);
//!
//! assert!(errors.is_empty());
//! assert_eq!(tokens.section(1).map(<[_]>::len), Some(6));
//! ```

mod comment_state;
pub mod keywords;
mod lex_error;
mod line;
mod sections;
mod token;

use std::sync::Once;

use cobalt_ir::SourceLine;

pub use cobalt_lexer_core::TokenKind;
pub use comment_state::CommentState;
pub use lex_error::{LexError, LexErrorKind};
pub use line::lex_line;
pub use sections::Tokens;
pub use token::Token;

/// Lex `lines` into a fresh [`Tokens`].
pub fn lex<'src>(lines: &'src [SourceLine], errors: &mut Vec<LexError>) -> Tokens<'src> {
    let mut tokens = Tokens::new();
    tokens.lex(lines, errors);
    tokens
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once; only
/// the first call has an effect.
///
/// ```bash
/// RUST_LOG=cobalt_lexer=trace cargo test -p cobalt_lexer
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            use tracing_subscriber::prelude::*;
            use tracing_subscriber::{fmt, EnvFilter};

            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
