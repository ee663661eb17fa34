//! Byte cursor over source text.
//!
//! The cursor reads bytes at a `u32` offset. Reads past the end yield `0`,
//! so callers can peek ahead without bounds checks; [`Cursor::is_eof`]
//! distinguishes the end of input from interior NUL bytes. Multi-byte
//! characters are decoded on demand through [`Cursor::current_char`].

use crate::chars::{is_identifier_part, BYTE_ORDER_MARK};

/// Offset of `len` as `u32`. Texts beyond 4 GiB are clamped.
#[allow(
    clippy::cast_possible_truncation,
    reason = "clamped to u32::MAX before the cast"
)]
fn clamp_len(len: usize) -> u32 {
    len.min(u32::MAX as usize) as u32
}

/// Cheap, `Copy` cursor over source text.
///
/// Copying a cursor snapshots its position, which is how the tokenizer
/// implements lookahead and backtracking.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: u32,
    end: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at offset 0.
    pub fn new(text: &'a str) -> Self {
        Cursor {
            text,
            pos: 0,
            end: clamp_len(text.len()),
        }
    }

    /// The full text this cursor reads.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Moves the cursor to `pos`, clamped to the end of the text.
    #[inline]
    pub fn set_pos(&mut self, pos: u32) {
        self.pos = pos.min(self.end);
    }

    /// Length of the text.
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Byte at `pos`, or `0` past the end.
    #[inline]
    pub fn byte_at(&self, pos: u32) -> u8 {
        self.text.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    /// Byte at the current position, or `0` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Byte two positions ahead.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Character starting at `pos`, if `pos` is a character boundary
    /// before the end.
    #[inline]
    pub fn char_at(&self, pos: u32) -> Option<char> {
        self.text.get(pos as usize..)?.chars().next()
    }

    /// Character at the current position.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advances by `n` bytes, stopping at the end.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.end);
    }

    /// Advances past the current character, however many bytes it takes.
    pub fn advance_char(&mut self) {
        let width = self.current_char().map_or(1, char::len_utf8);
        self.advance_n(u32::try_from(width).unwrap_or(1));
    }

    /// Consumes `byte` if it is the current byte.
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        if !self.is_eof() && self.current() == byte {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Advances while `pred` holds for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advances past identifier-part characters.
    pub fn eat_identifier_rest(&mut self) {
        while let Some(c) = self.current_char() {
            if !is_identifier_part(c) {
                break;
            }
            self.advance_char();
        }
    }

    /// Text between `start` and `end`; empty if the offsets are not
    /// character boundaries.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.text.get(start as usize..end as usize).unwrap_or("")
    }

    /// Text from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advances to the next `\n` or to the end, using memchr.
    ///
    /// The cursor stops *at* the line feed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset is below end, which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.text.as_bytes()[self.pos as usize..self.end as usize];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.end,
        }
    }

    /// Advances past the end of a block comment whose `/*` was consumed.
    ///
    /// Returns `false` and stops at the end if the comment is unterminated.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset is below end, which fits in u32"
    )]
    pub fn eat_block_comment_rest(&mut self) -> bool {
        let remaining = &self.text.as_bytes()[self.pos as usize..self.end as usize];
        match memchr::memmem::find(remaining, b"*/") {
            Some(offset) => {
                self.pos += offset as u32 + 2;
                true
            }
            None => {
                self.pos = self.end;
                false
            }
        }
    }

    /// Skips a leading byte order mark and a `#!` line.
    ///
    /// The shebang line is consumed up to, not including, its line feed.
    /// Only meaningful at offset 0.
    pub fn skip_preamble(&mut self) {
        debug_assert_eq!(self.pos, 0);
        if self.current_char() == Some(BYTE_ORDER_MARK) {
            self.advance_char();
        }
        if self.current() == b'#' && self.peek() == b'!' {
            self.advance_n(2);
            self.eat_until_newline_or_eof();
        }
    }
}

/// Whether `text[start..end]` contains a line break (LF, CR, LS or PS).
pub fn has_line_break(text: &str, start: u32, end: u32) -> bool {
    let bytes = text.as_bytes();
    let end = (end as usize).min(bytes.len());
    let start = (start as usize).min(end);
    let mut haystack = &bytes[start..end];
    // LS and PS encode as E2 80 A8 and E2 80 A9.
    while let Some(i) = memchr::memchr3(b'\n', b'\r', 0xe2, haystack) {
        if haystack[i] != 0xe2 {
            return true;
        }
        if let [0x80, 0xa8 | 0xa9, ..] = haystack[i + 1..] {
            return true;
        }
        haystack = &haystack[i + 1..];
    }
    false
}

#[cfg(test)]
mod tests;
