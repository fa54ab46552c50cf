//! Cobalt IR - shared record types
//!
//! The value types every stage of the translator agrees on:
//! - `Position` for 1-based (line, column) source locations
//! - `SourceLine` and `LineCategory` for the classified line table
//!   produced by the line loader
//! - `Comment` and `CommentKind` for comments extracted by the lexer
//!
//! The lexer only constructs and appends these; it never inspects them
//! beyond construction.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod comment;
mod position;
mod source_line;

pub use comment::{Comment, CommentKind};
pub use position::Position;
pub use source_line::{LineCategory, SourceLine};
