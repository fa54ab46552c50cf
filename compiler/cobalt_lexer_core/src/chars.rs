//! Character-class predicates.
//!
//! Pure byte predicates shared by the numeric and literal scanners, plus the
//! identifier-shape rule. None of these functions allocate or report.

/// Digit-group separator inside numeric literals (`1'000'000`).
pub const SEPARATOR: u8 = b'\'';

#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
pub fn is_binary_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

#[inline]
pub fn is_hexadecimal_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

#[inline]
pub fn is_separator(b: u8) -> bool {
    b == SEPARATOR
}

/// Returns `true` when `b` is the separator or satisfies `pred`.
#[inline]
pub fn is_separator_or(pred: impl Fn(u8) -> bool, b: u8) -> bool {
    is_separator(b) || pred(b)
}

/// Length of the maximal run starting at `from` where every byte is either
/// the separator or satisfies `pred`.
///
/// Returns 0 when `from` is out of range.
#[allow(
    clippy::cast_possible_truncation,
    reason = "callers pass single lines, whose length fits in u32"
)]
pub fn separated_run_len(bytes: &[u8], from: u32, pred: impl Fn(u8) -> bool) -> u32 {
    bytes
        .get(from as usize..)
        .map_or(0, |rest| {
            rest.iter()
                .take_while(|&&b| is_separator_or(&pred, b))
                .count()
        }) as u32
}

#[inline]
fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

#[inline]
fn is_identifier_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Byte length of the identifier-shaped run at the start of `text`.
///
/// An identifier starts with `_` or an alphabetic scalar and continues with
/// `_` or alphanumeric scalars. Returns 0 when `text` does not start with one.
pub fn starts_with_identifier(text: &str) -> usize {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, c)) if is_identifier_start(c) => {}
        _ => return 0,
    }
    chars
        .find(|&(_, c)| !is_identifier_continue(c))
        .map_or(text.len(), |(end, _)| end)
}

/// Width in bytes of the UTF-8 scalar introduced by `lead`.
///
/// Continuation bytes and other invalid leads report 1 so a caller walking
/// bytes always makes progress.
#[inline]
pub fn utf8_char_width(lead: u8) -> u32 {
    match lead {
        0xF0..=0xF7 => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}
