//! Escape and quoted-character sub-scanners.
//!
//! Every function here is pure lookahead over `(bytes, offset)`: it reports
//! how many bytes the construct at that exact offset occupies, or 0 when the
//! construct is absent. Nothing is consumed and nothing is reported; the one
//! malformed-but-recognizable case (a `\u` without 4 or 8 hex digits) is
//! encoded in the return value for the caller to diagnose.
//!
//! ```text
//! simple-escape-sequence:        \ any-char
//! hexadecimal-escape-sequence:   \x hex-digit+
//! universal-character-name:      \u hex-digit{4} hex-digit{4}?
//! escape-sequence:               hexadecimal-escape-sequence | simple-escape-sequence
//! quoted-char:                   universal-character-name | escape-sequence | any-char except quote, \
//! ```

use crate::chars::{is_hexadecimal_digit, utf8_char_width};

#[inline]
fn byte_at(bytes: &[u8], at: u32) -> Option<u8> {
    bytes.get(at as usize).copied()
}

/// `\` followed by any character.
pub fn simple_escape_len(bytes: &[u8], at: u32) -> u32 {
    match (byte_at(bytes, at), byte_at(bytes, at + 1)) {
        (Some(b'\\'), Some(next)) => 1 + utf8_char_width(next),
        _ => 0,
    }
}

/// `\x` followed by one or more hexadecimal digits.
#[allow(
    clippy::cast_possible_truncation,
    reason = "digit run is bounded by the line length"
)]
pub fn hexadecimal_escape_len(bytes: &[u8], at: u32) -> u32 {
    if byte_at(bytes, at) != Some(b'\\') || byte_at(bytes, at + 1) != Some(b'x') {
        return 0;
    }
    let digits = bytes
        .get(at as usize + 2..)
        .map_or(0, |rest| {
            rest.iter().take_while(|&&b| is_hexadecimal_digit(b)).count()
        }) as u32;
    if digits == 0 {
        0
    } else {
        2 + digits
    }
}

/// Outcome of looking for a universal character name.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Ucn {
    /// No `\u` introducer at this offset.
    Absent,
    /// A well-formed name of the given byte length (6 or 10).
    Valid(u32),
    /// `\u` not followed by exactly 4 or 8 hexadecimal digits.
    Malformed,
}

/// `\u` followed by 4 or 8 hexadecimal digits.
///
/// At most 8 digits are examined; a ninth hex digit is left for the next
/// quoted character.
pub fn universal_character_name(bytes: &[u8], at: u32) -> Ucn {
    if byte_at(bytes, at) != Some(b'\\') || byte_at(bytes, at + 1) != Some(b'u') {
        return Ucn::Absent;
    }
    let digits = (0..8)
        .take_while(|&i| byte_at(bytes, at + 2 + i).is_some_and(is_hexadecimal_digit))
        .count();
    match digits {
        4 => Ucn::Valid(6),
        8 => Ucn::Valid(10),
        _ => Ucn::Malformed,
    }
}

/// Hexadecimal escape, falling back to a simple escape.
pub fn escape_sequence_len(bytes: &[u8], at: u32) -> u32 {
    match hexadecimal_escape_len(bytes, at) {
        0 => simple_escape_len(bytes, at),
        len => len,
    }
}

/// One character of a string or character literal body.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct QuotedChar {
    /// Bytes occupied; 0 when no literal character starts here.
    pub len: u32,
    /// A `\u` introducer with the wrong digit count was seen at this offset.
    pub malformed_ucn: bool,
}

/// Scan one literal character at `at`, inside a literal closed by `quote`.
///
/// Tries a universal character name, then an escape sequence, then any
/// character other than `quote` and `\`. A malformed universal character
/// name is flagged and then consumed by the escape rule as `\u`.
pub fn quoted_char(bytes: &[u8], at: u32, quote: u8) -> QuotedChar {
    let malformed_ucn = match universal_character_name(bytes, at) {
        Ucn::Valid(len) => {
            return QuotedChar {
                len,
                malformed_ucn: false,
            }
        }
        Ucn::Malformed => true,
        Ucn::Absent => false,
    };

    let len = match escape_sequence_len(bytes, at) {
        0 => match byte_at(bytes, at) {
            Some(b) if b != quote && b != b'\\' => utf8_char_width(b),
            _ => 0,
        },
        len => len,
    };

    QuotedChar { len, malformed_ucn }
}
