//! Integer and float literal readers.
//!
//! All readers accept `_` separators between digits. A separator at the
//! start or end of a digit run, or two in a row, is reported and skipped.
//! Integer values wider than 64 bits are reported once per literal and the
//! reader keeps consuming digits so the literal is not split in two.

use std::borrow::Cow;

use asc_diagnostic::DiagnosticCode;
use asc_lexer_core::chars::{is_decimal, is_identifier_start, is_octal};

use super::Tokenizer;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Radix {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    fn base(self) -> u64 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    fn digit(self, byte: u8) -> Option<u64> {
        let value = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            b'A'..=b'F' => byte - b'A' + 10,
            _ => return None,
        };
        let value = u64::from(value);
        (value < self.base()).then_some(value)
    }

    fn missing_digit(self) -> DiagnosticCode {
        match self {
            Radix::Binary => DiagnosticCode::BinaryDigitExpected,
            Radix::Octal => DiagnosticCode::OctalDigitExpected,
            Radix::Decimal => DiagnosticCode::DigitExpected,
            Radix::Hex => DiagnosticCode::HexDigitExpected,
        }
    }
}

/// Digits read by [`Tokenizer::read_radix_digits`].
#[derive(Copy, Clone, Debug)]
pub(super) struct Digits {
    pub(super) value: u64,
    pub(super) overflowed: bool,
}

impl Tokenizer<'_> {
    /// Whether the numeric literal at the scan position is an integer.
    ///
    /// A `0x`, `0b` or `0o` prefix makes it one. Otherwise the digit run is
    /// an integer unless a `.` or an exponent follows it.
    pub fn test_integer(&self) -> bool {
        let text = self.source.text().as_bytes();
        let pos = self.cursor.pos() as usize;
        let end = self.cursor.end() as usize;
        if pos + 1 < end && text[pos] == b'0' && matches!(text[pos + 1] | 0x20, b'x' | b'b' | b'o')
        {
            return true;
        }
        for &byte in &text[pos..end] {
            if byte == b'.' || (byte | 0x20) == b'e' {
                return false;
            }
            if byte != b'_' && !is_decimal(byte) {
                break;
            }
        }
        true
    }

    /// Reads an integer literal and returns its 64-bit value.
    ///
    /// Handles `0x`, `0b` and `0o` prefixes. A legacy octal literal such as
    /// `017` is read as octal and reported as not allowed.
    pub fn read_integer(&mut self) -> u64 {
        let start = self.cursor.pos();
        if start + 2 < self.cursor.end() && self.cursor.current() == b'0' {
            let radix = match self.cursor.peek() | 0x20 {
                b'x' => Some(Radix::Hex),
                b'b' => Some(Radix::Binary),
                b'o' => Some(Radix::Octal),
                _ => None,
            };
            if let Some(radix) = radix {
                self.cursor.advance_n(2);
                return self.read_radix_digits(radix, start).value;
            }
            if is_octal(self.cursor.peek()) {
                self.cursor.advance();
                let digits = self.read_radix_digits(Radix::Octal, start);
                let range = self.range_between(start, self.cursor.pos());
                self.error(DiagnosticCode::OctalLiteralsNotAllowed, range, &[]);
                return digits.value;
            }
        }
        self.read_radix_digits(Radix::Decimal, start).value
    }

    /// Reads a run of `radix` digits and separators.
    ///
    /// `literal_start` is where the whole literal begins, prefix included;
    /// the overflow diagnostic quotes the literal from there.
    pub(super) fn read_radix_digits(&mut self, radix: Radix, literal_start: u32) -> Digits {
        let start = self.cursor.pos();
        let base = radix.base();
        let mut value: u64 = 0;
        let mut overflowed = false;
        let mut sep_end = start;

        while !self.cursor.is_eof() {
            let pos = self.cursor.pos();
            let byte = self.cursor.current();
            if let Some(digit) = radix.digit(byte) {
                match value.checked_mul(base).and_then(|v| v.checked_add(digit)) {
                    Some(next) => value = next,
                    None => {
                        overflowed = true;
                        value = value.wrapping_mul(base).wrapping_add(digit);
                    }
                }
            } else if byte == b'_' {
                if sep_end == pos {
                    let code = if sep_end == start {
                        DiagnosticCode::NumericSeparatorNotAllowed
                    } else {
                        DiagnosticCode::ConsecutiveNumericSeparators
                    };
                    self.error(code, self.range_at(pos), &[]);
                } else if radix == Radix::Decimal
                    && pos - 1 == start
                    && self.cursor.byte_at(pos - 1) == b'0'
                {
                    self.error(DiagnosticCode::NumericSeparatorNotAllowed, self.range_at(pos), &[]);
                }
                sep_end = pos + 1;
            } else {
                break;
            }
            self.cursor.advance();
        }

        let pos = self.cursor.pos();
        let trailing_separator = pos != start && sep_end == pos;
        if pos == start {
            self.error(radix.missing_digit(), self.range_at(start), &[]);
        } else if trailing_separator {
            self.error(DiagnosticCode::NumericSeparatorNotAllowed, self.range_at(sep_end - 1), &[]);
        }
        if overflowed && (radix == Radix::Hex || !trailing_separator) {
            let range = self.range_between(literal_start, pos);
            let literal = self.cursor.slice(literal_start, pos);
            self.error(DiagnosticCode::LiteralDoesNotFitInt64, range, &[literal]);
        }
        Digits { value, overflowed }
    }

    /// Reads a float literal: digits, an optional fraction and an optional
    /// exponent with sign. Returns NaN if nothing parseable was read.
    pub fn read_float(&mut self) -> f64 {
        let start = self.cursor.pos();
        let mut separators = self.read_float_partial(false);
        if self.cursor.eat(b'.') {
            separators |= self.read_float_partial(true);
        }
        if (self.cursor.current() | 0x20) == b'e' && !self.cursor.is_eof() {
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            separators |= self.read_float_partial(true);
        }
        let text = self.cursor.slice_from(start);
        let digits: Cow<'_, str> = if separators {
            Cow::Owned(text.replace('_', ""))
        } else {
            Cow::Borrowed(text)
        };
        parse_float(&digits)
    }

    /// Reads decimal digits and separators of one float component.
    /// Returns whether any separator was seen.
    fn read_float_partial(&mut self, allow_leading_zero_separator: bool) -> bool {
        let start = self.cursor.pos();
        let mut sep_end = start;
        let mut seen = false;
        while !self.cursor.is_eof() {
            let pos = self.cursor.pos();
            let byte = self.cursor.current();
            if byte == b'_' {
                seen = true;
                if sep_end == pos {
                    let code = if sep_end == start {
                        DiagnosticCode::NumericSeparatorNotAllowed
                    } else {
                        DiagnosticCode::ConsecutiveNumericSeparators
                    };
                    self.error(code, self.range_at(pos), &[]);
                } else if !allow_leading_zero_separator
                    && pos - 1 == start
                    && self.cursor.byte_at(pos - 1) == b'0'
                {
                    self.error(DiagnosticCode::NumericSeparatorNotAllowed, self.range_at(pos), &[]);
                }
                sep_end = pos + 1;
            } else if !is_decimal(byte) {
                break;
            }
            self.cursor.advance();
        }
        let pos = self.cursor.pos();
        if pos != start && sep_end == pos {
            self.error(DiagnosticCode::NumericSeparatorNotAllowed, self.range_at(sep_end - 1), &[]);
        }
        seen
    }

    /// Reports an identifier that starts immediately after a numeric
    /// literal, as in `3in` or `1px`.
    pub fn check_for_identifier_start_after_numeric_literal(&mut self) {
        if self.cursor.current_char().is_some_and(is_identifier_start) {
            let range = self.range_at(self.cursor.pos());
            self.error(DiagnosticCode::IdentifierAfterNumericLiteral, range, &[]);
        }
    }
}

/// Parses separator-free float text. A dangling exponent marker or sign is
/// dropped before giving up.
fn parse_float(text: &str) -> f64 {
    text.parse::<f64>()
        .or_else(|_| {
            text.trim_end_matches(|c: char| matches!(c, 'e' | 'E' | '+' | '-'))
                .parse::<f64>()
        })
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests;
