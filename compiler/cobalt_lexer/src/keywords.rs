//! Reserved keyword lookup.
//!
//! A keyword is recognized only when the whole identifier-shaped run at the
//! cursor is a reserved word: `iffy` is an identifier, not `if` followed by
//! `fy`. The scanner first takes the maximal identifier run and then asks
//! [`is_keyword`] about it, so a shorter keyword can never match as a prefix
//! of a longer identifier.
//!
//! The lookup uses the run's length as a first-pass filter (keywords range
//! from 2 to 16 bytes), then matches against the keywords of that length.

/// Every reserved keyword, sorted.
pub const KEYWORDS: &[&str] = &[
    "alignas",
    "alignof",
    "as",
    "asm",
    "auto",
    "bool",
    "break",
    "case",
    "catch",
    "char",
    "char16_t",
    "char32_t",
    "char8_t",
    "class",
    "co_await",
    "co_return",
    "co_yield",
    "concept",
    "const",
    "const_cast",
    "consteval",
    "constexpr",
    "constinit",
    "continue",
    "decltype",
    "default",
    "delete",
    "do",
    "double",
    "dynamic_cast",
    "else",
    "enum",
    "explicit",
    "export",
    "extern",
    "false",
    "float",
    "for",
    "friend",
    "goto",
    "if",
    "inline",
    "int",
    "is",
    "long",
    "mutable",
    "namespace",
    "new",
    "noexcept",
    "nullptr",
    "operator",
    "private",
    "protected",
    "public",
    "register",
    "reinterpret_cast",
    "requires",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "static_assert",
    "static_cast",
    "struct",
    "switch",
    "template",
    "this",
    "thread_local",
    "throw",
    "true",
    "try",
    "typedef",
    "typeid",
    "typename",
    "union",
    "unsigned",
    "using",
    "virtual",
    "void",
    "volatile",
    "wchar_t",
    "while",
];

/// Returns `true` if `text` is exactly a reserved keyword.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    // Guard: all keywords are 2-16 bytes and start with a lowercase letter
    let len = text.len();
    if !(2..=16).contains(&len) || !text.as_bytes()[0].is_ascii_lowercase() {
        return false;
    }

    match len {
        2 => matches!(text, "as" | "do" | "if" | "is"),
        3 => matches!(text, "asm" | "for" | "int" | "new" | "try"),
        4 => matches!(
            text,
            "auto"
                | "bool"
                | "case"
                | "char"
                | "else"
                | "enum"
                | "goto"
                | "long"
                | "this"
                | "true"
                | "void"
        ),
        5 => matches!(
            text,
            "break"
                | "catch"
                | "class"
                | "const"
                | "false"
                | "float"
                | "short"
                | "throw"
                | "union"
                | "using"
                | "while"
        ),
        6 => matches!(
            text,
            "delete"
                | "double"
                | "export"
                | "extern"
                | "friend"
                | "inline"
                | "public"
                | "return"
                | "signed"
                | "sizeof"
                | "static"
                | "struct"
                | "switch"
                | "typeid"
        ),
        7 => matches!(
            text,
            "alignas"
                | "alignof"
                | "char8_t"
                | "concept"
                | "default"
                | "mutable"
                | "nullptr"
                | "private"
                | "typedef"
                | "virtual"
                | "wchar_t"
        ),
        8 => matches!(
            text,
            "char16_t"
                | "char32_t"
                | "co_await"
                | "co_yield"
                | "continue"
                | "decltype"
                | "explicit"
                | "noexcept"
                | "operator"
                | "register"
                | "requires"
                | "template"
                | "typename"
                | "unsigned"
                | "volatile"
        ),
        9 => matches!(
            text,
            "co_return" | "consteval" | "constexpr" | "constinit" | "namespace" | "protected"
        ),
        10 => text == "const_cast",
        11 => text == "static_cast",
        12 => matches!(text, "dynamic_cast" | "thread_local"),
        13 => text == "static_assert",
        16 => text == "reinterpret_cast",
        _ => false,
    }
}
