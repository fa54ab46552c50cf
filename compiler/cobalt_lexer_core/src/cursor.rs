//! Byte cursor over a single physical line.
//!
//! The cursor advances through the line byte-by-byte and never moves
//! backward. Reads past the end of the line return `0x00`, mirroring a
//! sentinel-terminated buffer, so lookahead of one or two bytes needs no
//! explicit bounds check at the call site.
//!
//! # Interior Null Bytes
//!
//! A line may contain a literal U+0000. The cursor distinguishes it from the
//! end of the line by comparing `pos` against the line length:
//! [`LineCursor::is_eof`] is the authority, never `current() == 0`.

use crate::chars::utf8_char_width;

/// Cursor over one line of source text.
///
/// [`Copy`], so a scanner can snapshot it cheaply for lookahead.
#[derive(Clone, Copy, Debug)]
pub struct LineCursor<'a> {
    line: &'a str,
    /// Current read position (byte index into `line`).
    pos: u32,
    /// Length of the line in bytes.
    len: u32,
}

/// Size assertion: `&str` = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<LineCursor<'static>>() <= 24);

impl<'a> LineCursor<'a> {
    /// Create a cursor at the start of `line`.
    ///
    /// Lines longer than `u32::MAX` bytes are truncated to that length.
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            pos: 0,
            len: u32::try_from(line.len()).unwrap_or(u32::MAX),
        }
    }

    /// The whole line this cursor walks.
    #[inline]
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// The line as bytes.
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.line.as_bytes()
    }

    /// Returns the byte at the current position, or `0x00` at the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek_at(0)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_at(1)
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.peek_at(2)
    }

    /// Returns the byte `n` positions ahead of current, or `0x00` past the end.
    #[inline]
    pub fn peek_at(&self, n: u32) -> u8 {
        self.bytes()
            .get((self.pos + n) as usize)
            .copied()
            .unwrap_or(0)
    }

    /// The character starting at the current position.
    ///
    /// Returns `None` at the end of the line.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance the cursor by `n` bytes, stopping at the end of the line.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.len);
    }

    /// Advance past one full UTF-8 scalar.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Move the cursor to the end of the line.
    #[inline]
    pub fn advance_to_end(&mut self) {
        self.pos = self.len;
    }

    /// Returns `true` once every byte of the line has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.len
    }

    /// Current byte offset in the line.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Extract a substring of the line.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the line and on `char` boundaries. The
    /// scanners in this crate only ever produce such offsets: every length
    /// they report covers whole UTF-8 scalars.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.len,
            "slice end {end} exceeds line length {}",
            self.len
        );
        &self.line[start as usize..end as usize]
    }

    /// The unconsumed remainder of the line.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.slice(self.pos, self.len)
    }

    /// Offset (relative to the current position) of the next occurrence of
    /// `needle` in the rest of the line.
    ///
    /// Uses `memchr::memmem` for the search; block comment bodies are
    /// skipped in one step instead of byte-by-byte.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < rest().len() <= len which fits in u32"
    )]
    pub fn find_from(&self, needle: &[u8]) -> Option<u32> {
        memchr::memmem::find(self.rest().as_bytes(), needle).map(|offset| offset as u32)
    }
}
