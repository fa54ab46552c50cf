//! Low-level scanning primitives for Cobalt.
//!
//! Everything here is pure and allocation-free:
//! - [`TokenKind`]: the closed taxonomy of lexical categories
//! - [`LineCursor`]: a byte cursor over one physical line
//! - [`chars`]: digit, separator and identifier predicates
//! - [`escape`]: lookahead scanners for escapes and quoted-literal characters
//!
//! Nothing in this crate reports diagnostics. Malformed input is encoded in
//! return values and the integration layer (`cobalt_lexer`) turns it into
//! errors.

pub mod chars;
mod cursor;
pub mod escape;
mod tag;

pub use cursor::LineCursor;
pub use tag::TokenKind;
