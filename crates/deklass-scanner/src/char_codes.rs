//! Character classes used by the scanner.
//!
//! Every character outside whitespace and the string delimiter falls into
//! exactly one class. Characters that belong to no named class are "stray"
//! and get absorbed into the neighbouring word.

pub const STRING_DELIMITER: char = '"';
pub const STATEMENT_END: char = ';';

const OPERATOR_CHARS: &str = "+-/*%>=!";

#[inline]
pub const fn is_punctuation(ch: char) -> bool {
    matches!(ch, '{' | '}' | '(' | ')')
}

#[inline]
pub fn is_operator_char(ch: char) -> bool {
    OPERATOR_CHARS.contains(ch)
}

#[inline]
pub const fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// ASCII letters, digits and underscore.
#[inline]
pub const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[inline]
pub fn is_stray(ch: char) -> bool {
    !ch.is_whitespace()
        && ch != STRING_DELIMITER
        && ch != STATEMENT_END
        && !is_punctuation(ch)
        && !is_operator_char(ch)
        && !is_word_char(ch)
}

/// A word character or a stray character that can be glued onto a word.
#[inline]
pub fn is_word_like(ch: char) -> bool {
    is_word_char(ch) || is_stray(ch)
}
