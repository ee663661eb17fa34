//! String, escape sequence and regular expression readers.

use asc_diagnostic::DiagnosticCode;
use asc_lexer_core::chars::{is_decimal, is_identifier_part, is_line_break};

use super::numeric::Radix;
use super::Tokenizer;

const HIGH_SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

fn hex_value(byte: u8) -> Option<u32> {
    char::from(byte).to_digit(16)
}

impl<'a> Tokenizer<'a> {
    /// Reads a string or template literal body and returns its cooked value.
    ///
    /// With `quote` unset, the opening quote is taken from the scan position
    /// and consumed. Template literals resume with `quote` set to a backtick
    /// after an interpolation. A template stops at `${`, consuming it and
    /// setting [`Tokenizer::reading_template_string`]. With
    /// `is_tagged_template`, invalid escapes are kept raw instead of being
    /// reported.
    pub fn read_string(&mut self, quote: Option<u8>, is_tagged_template: bool) -> String {
        let quote = quote.unwrap_or_else(|| {
            let quote = self.cursor.current();
            self.cursor.advance();
            quote
        });
        let mut start = self.cursor.pos();
        self.read_string_start = start;
        let mut result = String::new();

        loop {
            if self.cursor.is_eof() {
                result.push_str(self.cursor.slice_from(start));
                let range =
                    self.range_between(self.read_string_start.saturating_sub(1), self.cursor.end());
                self.error(DiagnosticCode::UnterminatedStringLiteral, range, &[]);
                self.read_string_end = self.cursor.end();
                break;
            }
            let pos = self.cursor.pos();
            let byte = self.cursor.current();
            if byte == quote {
                self.read_string_end = pos;
                result.push_str(self.cursor.slice_from(start));
                self.cursor.advance();
                break;
            }
            if byte == b'\\' {
                result.push_str(self.cursor.slice_from(start));
                let escaped = self.read_escape_sequence(is_tagged_template);
                result.push_str(&escaped);
                start = self.cursor.pos();
                continue;
            }
            if quote == b'`' {
                if byte == b'$' && self.cursor.peek() == b'{' {
                    result.push_str(self.cursor.slice_from(start));
                    self.read_string_end = pos;
                    self.cursor.advance_n(2);
                    self.reading_template_string = true;
                    return result;
                }
            } else if self.cursor.current_char().is_some_and(is_line_break) {
                result.push_str(self.cursor.slice_from(start));
                let range = self.range_between(self.read_string_start.saturating_sub(1), pos);
                self.error(DiagnosticCode::UnterminatedStringLiteral, range, &[]);
                self.read_string_end = pos;
                break;
            }
            self.cursor.advance_char();
        }

        self.reading_template_string = false;
        result
    }

    /// Raw source text of the last string body read.
    pub fn read_string_raw(&self) -> &'a str {
        self.cursor.slice(self.read_string_start, self.read_string_end)
    }

    /// Reads the escape sequence at the scan position, which is a backslash.
    ///
    /// Line continuations produce nothing. Invalid escapes produce nothing
    /// and are reported, or in tagged templates produce their raw text.
    pub fn read_escape_sequence(&mut self, is_tagged_template: bool) -> String {
        let start = self.cursor.pos();
        self.cursor.advance();
        let Some(c) = self.cursor.current_char() else {
            let range = self.range_at(self.cursor.end());
            self.error(DiagnosticCode::UnexpectedEndOfText, range, &[]);
            return String::new();
        };
        self.cursor.advance_char();
        let tagged_start = is_tagged_template.then_some(start);
        match c {
            '0' => {
                if is_tagged_template && is_decimal(self.cursor.current()) && !self.cursor.is_eof()
                {
                    self.cursor.advance();
                    return self.cursor.slice_from(start).to_owned();
                }
                "\0".to_owned()
            }
            'b' => "\u{8}".to_owned(),
            't' => "\t".to_owned(),
            'n' => "\n".to_owned(),
            'v' => "\u{b}".to_owned(),
            'f' => "\u{c}".to_owned(),
            'r' => "\r".to_owned(),
            '\'' => "'".to_owned(),
            '"' => "\"".to_owned(),
            'u' => {
                if self.cursor.eat(b'{') {
                    return self.read_extended_unicode_escape(start, tagged_start);
                }
                match self.read_hex_escape(4, tagged_start) {
                    Ok(unit) => self.combine_utf16(unit).to_string(),
                    Err(fallback) => fallback,
                }
            }
            'x' => match self.read_hex_escape(2, tagged_start) {
                Ok(value) => char::from_u32(value)
                    .unwrap_or(char::REPLACEMENT_CHARACTER)
                    .to_string(),
                Err(fallback) => fallback,
            },
            '\r' => {
                self.cursor.eat(b'\n');
                String::new()
            }
            '\n' | '\u{2028}' | '\u{2029}' => String::new(),
            other => other.to_string(),
        }
    }

    /// Reads exactly `digits` hex digits.
    ///
    /// On failure returns the text to substitute: the raw escape from
    /// `tagged_start` in tagged templates, otherwise nothing after reporting.
    fn read_hex_escape(&mut self, digits: u32, tagged_start: Option<u32>) -> Result<u32, String> {
        let mut value = 0;
        let mut remain = digits;
        while remain > 0 && !self.cursor.is_eof() {
            let pos = self.cursor.pos();
            match hex_value(self.cursor.current()) {
                Some(digit) => {
                    value = (value << 4) | digit;
                    self.cursor.advance();
                    remain -= 1;
                }
                None => {
                    if let Some(start) = tagged_start {
                        return Err(self.cursor.slice(start, pos).to_owned());
                    }
                    self.cursor.advance_char();
                    let range = self.range_between(pos, self.cursor.pos());
                    self.error(DiagnosticCode::HexDigitExpected, range, &[]);
                    return Err(String::new());
                }
            }
        }
        if remain > 0 {
            if let Some(start) = tagged_start {
                return Err(self.cursor.slice_from(start).to_owned());
            }
            let range = self.range_at(self.cursor.pos());
            self.error(DiagnosticCode::UnexpectedEndOfText, range, &[]);
            return Err(String::new());
        }
        Ok(value)
    }

    /// Turns a UTF-16 code unit into a char, consuming a following `\uXXXX`
    /// low surrogate to complete a pair. Unpaired surrogates become U+FFFD.
    fn combine_utf16(&mut self, unit: u32) -> char {
        if HIGH_SURROGATES.contains(&unit) {
            if let Some(low) = self.peek_low_surrogate() {
                self.cursor.advance_n(6);
                let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                return char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER);
            }
        }
        char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn peek_low_surrogate(&self) -> Option<u32> {
        let pos = self.cursor.pos();
        if self.cursor.current() != b'\\' || self.cursor.peek() != b'u' {
            return None;
        }
        let mut unit = 0;
        for offset in 2..6 {
            if pos + offset >= self.cursor.end() {
                return None;
            }
            unit = (unit << 4) | hex_value(self.cursor.byte_at(pos + offset))?;
        }
        LOW_SURROGATES.contains(&unit).then_some(unit)
    }

    /// Reads `{X...}` after `\u`, with the `{` already consumed.
    /// `escape_start` is the backslash.
    fn read_extended_unicode_escape(
        &mut self,
        escape_start: u32,
        tagged_start: Option<u32>,
    ) -> String {
        let start = self.cursor.pos();
        let tagged = tagged_start.is_some();
        let digits = self.read_radix_digits(Radix::Hex, escape_start);
        let mut invalid = false;

        if digits.overflowed || digits.value > 0x10_FFFF {
            if !tagged {
                let range = self.range_between(start, self.cursor.pos());
                self.error(DiagnosticCode::ExtendedUnicodeEscapeOutOfRange, range, &[]);
            }
            invalid = true;
        }
        if self.cursor.is_eof() {
            if !tagged {
                let range = self.range_between(start, self.cursor.end());
                self.error(DiagnosticCode::UnexpectedEndOfText, range, &[]);
            }
            invalid = true;
        } else if !self.cursor.eat(b'}') {
            if !tagged {
                let range = self.range_between(start, self.cursor.pos());
                self.error(DiagnosticCode::UnterminatedUnicodeEscape, range, &[]);
            }
            invalid = true;
        }

        if invalid {
            return tagged_start
                .map(|s| self.cursor.slice_from(s).to_owned())
                .unwrap_or_default();
        }
        u32::try_from(digits.value)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
            .to_string()
    }

    /// Reads a regular expression body after its opening `/`, leaving the
    /// closing `/` unconsumed.
    pub fn read_regexp_pattern(&mut self) -> &'a str {
        let start = self.cursor.pos();
        let mut escaped = false;
        loop {
            if self.cursor.is_eof() {
                let range = self.range_between(start, self.cursor.end());
                self.error(DiagnosticCode::UnterminatedRegexpLiteral, range, &[]);
                break;
            }
            let c = self.cursor.current();
            if !escaped && c == b'/' {
                break;
            }
            if self.cursor.current_char().is_some_and(is_line_break) {
                let range = self.range_between(start, self.cursor.pos());
                self.error(DiagnosticCode::UnterminatedRegexpLiteral, range, &[]);
                break;
            }
            escaped = !escaped && c == b'\\';
            self.cursor.advance_char();
        }
        self.cursor.slice_from(start)
    }

    /// Reads regular expression flags. Only `g`, `i` and `m` are accepted,
    /// each at most once.
    pub fn read_regexp_flags(&mut self) -> &'a str {
        let start = self.cursor.pos();
        let mut seen = 0u8;
        let mut invalid = false;
        while let Some(c) = self.cursor.current_char() {
            if !is_identifier_part(c) {
                break;
            }
            self.cursor.advance_char();
            let bit = match c {
                'g' => 1,
                'i' => 2,
                'm' => 4,
                _ => {
                    invalid = true;
                    continue;
                }
            };
            invalid |= seen & bit != 0;
            seen |= bit;
        }
        if invalid {
            let range = self.range_between(start, self.cursor.pos());
            self.error(DiagnosticCode::InvalidRegexpFlags, range, &[]);
        }
        self.cursor.slice_from(start)
    }
}

#[cfg(test)]
mod tests;
