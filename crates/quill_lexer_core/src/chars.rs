//! Character classes used by the scanner.
//!
//! Letters and digits are ASCII only; any other character is scanned as an
//! illegal token unless it appears inside a quoted literal.

/// Space, tab or newline. Carriage returns never reach the scanner: the
/// reader folds them into `\n`.
#[inline]
pub const fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

#[inline]
pub const fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

#[inline]
pub const fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Characters allowed after the first character of a bare identifier.
#[inline]
pub const fn is_ident_char(ch: char) -> bool {
    is_letter(ch) || is_digit(ch) || ch == '_'
}
