#![forbid(unsafe_code)]

//! Text measurement shared by the validators and the strength meter.
//!
//! Whitespace is the browser's set (the ECMAScript `WhiteSpace` and
//! `LineTerminator` code points), so U+FEFF counts as space and U+0085 does
//! not. Lengths are UTF-16 code units, the unit a form input reports.

/// Whether `c` is form whitespace.
#[must_use]
pub const fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `value` without leading and trailing form whitespace.
#[must_use]
pub fn trim(value: &str) -> &str {
    value.trim_matches(is_space)
}

/// Whether `value` is empty after trimming.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    trim(value).is_empty()
}

/// Length of `value` in UTF-16 code units.
#[must_use]
pub fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}
