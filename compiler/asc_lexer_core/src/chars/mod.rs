//! Character classification.
//!
//! Byte predicates (`is_decimal`, `is_octal`, `is_hex_base`) operate on
//! ASCII bytes; the remaining predicates take full `char`s.

/// U+2028 LINE SEPARATOR
pub const LINE_SEPARATOR: char = '\u{2028}';
/// U+2029 PARAGRAPH SEPARATOR
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';
/// U+FEFF ZERO WIDTH NO-BREAK SPACE, used as a byte order mark.
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Whether `c` terminates a line: LF, CR, LS or PS.
#[inline]
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | LINE_SEPARATOR | PARAGRAPH_SEPARATOR)
}

/// Whether `c` is single-line white space.
pub fn is_white_space(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t'
            | '\u{000b}' // vertical tab
            | '\u{000c}' // form feed
            | '\u{00a0}' // no-break space
            | '\u{0085}' // next line
            | '\u{1680}' // ogham space mark
            | '\u{2000}'..='\u{200b}'
            | '\u{202f}' // narrow no-break space
            | '\u{205f}' // medium mathematical space
            | '\u{3000}' // ideographic space
            | BYTE_ORDER_MARK
    )
}

/// `0-9`
#[inline]
pub fn is_decimal(b: u8) -> bool {
    b.is_ascii_digit()
}

/// `0-7`
#[inline]
pub fn is_octal(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

/// `a-f` or `A-F`, the non-decimal hexadecimal digits.
#[inline]
pub fn is_hex_base(b: u8) -> bool {
    matches!(b | 0x20, b'a'..=b'f')
}

/// Whether `c` may start an identifier.
pub fn is_identifier_start(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic() || c == '$' || c == '_';
    }
    c.is_alphabetic()
}

/// Whether `c` may continue an identifier.
pub fn is_identifier_part(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == '$' || c == '_';
    }
    // ZWNJ and ZWJ are valid identifier parts.
    c.is_alphanumeric() || c == '\u{200c}' || c == '\u{200d}'
}

#[cfg(test)]
mod tests;
