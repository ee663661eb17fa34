//! The tokenizer state machine.
//!
//! # State
//!
//! - `cursor`: scan position over the source text
//! - `token`, `token_pos`: the current token and where it starts
//! - `next_token`, `next_token_pos`: one token of cached lookahead
//! - `reading_template_string`: a template literal stopped at `${`
//! - `read_string_start`, `read_string_end`: body of the last string read
//!
//! # Protocol
//!
//! [`Tokenizer::next`] advances to the next token. Keyword and punctuation
//! tokens are consumed. Identifier, string, template and numeric tokens
//! leave the position at their first character; the caller reads the value
//! with the matching `read_*` method, which consumes it.

mod numeric;
mod string;
mod template;

use asc_diagnostic::{DiagnosticCode, DiagnosticEmitter, DiagnosticMessage};
use asc_ir::{CommentKind, Range, Source, Token};
use asc_lexer_core::chars::{is_decimal, is_identifier_start, is_line_break, is_white_space};
use asc_lexer_core::{has_line_break, Cursor};
use tracing::trace;

use crate::keywords::keyword_token;

pub use template::{TemplatePart, TemplateReader};

/// No limit on the length of compound operators.
const NO_LIMIT: u32 = u32::MAX;

/// Receives every comment the tokenizer skips: its kind, its text including
/// delimiters (and the trailing line feed of line comments) and its range.
pub type CommentHandler<'a> = Box<dyn FnMut(CommentKind, &str, Range) + 'a>;

/// How identifiers that spell a keyword are classified.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum IdentifierHandling {
    /// Keywords are keyword tokens.
    #[default]
    Default,
    /// Soft keywords are identifiers, other keywords stay keywords.
    Prefer,
    /// Everything that looks like an identifier is one.
    Always,
}

/// Saved scan position, produced by [`Tokenizer::mark`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct State {
    pos: u32,
    token: Token,
    token_pos: u32,
}

impl State {
    pub fn pos(&self) -> u32 {
        self.pos
    }

    pub fn token(&self) -> Token {
        self.token
    }

    pub fn token_pos(&self) -> u32 {
        self.token_pos
    }
}

/// Scans one source into tokens on demand.
pub struct Tokenizer<'a> {
    source: &'a Source,
    cursor: Cursor<'a>,
    token: Token,
    token_pos: u32,
    next_token: Option<Token>,
    next_token_pos: u32,
    next_token_on_new_line: bool,
    reading_template_string: bool,
    read_string_start: u32,
    read_string_end: u32,
    on_comment: Option<CommentHandler<'a>>,
    emitter: DiagnosticEmitter,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer positioned after any byte order mark and
    /// `#!` line. The current token is [`Token::Invalid`] until the first
    /// call to [`Tokenizer::next`].
    pub fn new(source: &'a Source) -> Self {
        Self::with_emitter(source, DiagnosticEmitter::new())
    }

    /// Like [`Tokenizer::new`], appending diagnostics to `emitter`.
    pub fn with_emitter(source: &'a Source, emitter: DiagnosticEmitter) -> Self {
        let mut cursor = Cursor::new(source.text());
        cursor.skip_preamble();
        Tokenizer {
            source,
            cursor,
            token: Token::Invalid,
            token_pos: 0,
            next_token: None,
            next_token_pos: 0,
            next_token_on_new_line: false,
            reading_template_string: false,
            read_string_start: 0,
            read_string_end: 0,
            on_comment: None,
            emitter,
        }
    }

    /// Installs a callback receiving every skipped comment.
    pub fn set_comment_handler(&mut self, handler: impl FnMut(CommentKind, &str, Range) + 'a) {
        self.on_comment = Some(Box::new(handler));
    }

    // === Accessors ===

    pub fn source(&self) -> &'a Source {
        self.source
    }

    /// The current token.
    pub fn token(&self) -> Token {
        self.token
    }

    /// Start offset of the current token.
    pub fn token_pos(&self) -> u32 {
        self.token_pos
    }

    /// Scan position.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Length of the source text.
    pub fn end(&self) -> u32 {
        self.cursor.end()
    }

    /// Start offset of the token cached by the last [`Tokenizer::peek_with`].
    pub fn next_token_pos(&self) -> u32 {
        self.next_token_pos
    }

    /// Whether a line break preceded the token cached by the last
    /// [`Tokenizer::peek_with`] that asked for it.
    pub fn next_token_on_new_line(&self) -> bool {
        self.next_token_on_new_line
    }

    /// Whether the last [`Tokenizer::read_string`] stopped at `${`.
    pub fn reading_template_string(&self) -> bool {
        self.reading_template_string
    }

    pub fn read_string_start(&self) -> u32 {
        self.read_string_start
    }

    pub fn read_string_end(&self) -> u32 {
        self.read_string_end
    }

    pub fn diagnostics(&self) -> &[DiagnosticMessage] {
        self.emitter.diagnostics()
    }

    pub fn emitter_mut(&mut self) -> &mut DiagnosticEmitter {
        &mut self.emitter
    }

    pub fn into_diagnostics(self) -> Vec<DiagnosticMessage> {
        self.emitter.into_diagnostics()
    }

    // === Ranges ===

    /// Range of the current token, from its start to the scan position.
    pub fn range(&self) -> Range {
        self.range_between(self.token_pos, self.cursor.pos())
    }

    /// Zero-width range at `pos`.
    pub fn range_at(&self, pos: u32) -> Range {
        Range::point(self.source.id(), pos)
    }

    pub fn range_between(&self, start: u32, end: u32) -> Range {
        Range::new(self.source.id(), start, end)
    }

    // === Token production ===

    /// Advances to the next token with [`IdentifierHandling::Default`].
    #[allow(clippy::should_implement_trait, reason = "always yields a token, EndOfFile last")]
    pub fn next(&mut self) -> Token {
        self.next_with(IdentifierHandling::Default)
    }

    /// Advances to the next valid token.
    ///
    /// Invalid characters are reported and skipped.
    pub fn next_with(&mut self, handling: IdentifierHandling) -> Token {
        self.next_token = None;
        let token = self.scan_valid(handling, NO_LIMIT);
        self.token = token;
        trace!(?token, pos = self.token_pos, "next");
        token
    }

    /// Peeks at the next token with default settings.
    pub fn peek(&mut self) -> Token {
        self.peek_with(false, IdentifierHandling::Default, NO_LIMIT)
    }

    /// Computes and caches the next token without moving.
    ///
    /// With `check_on_new_line`, also records whether a line break lies
    /// between the scan position and the peeked token. The cache is cleared
    /// by [`Tokenizer::next`], a successful [`Tokenizer::skip`] and
    /// [`Tokenizer::reset`].
    pub fn peek_with(
        &mut self,
        check_on_new_line: bool,
        handling: IdentifierHandling,
        max_compound_length: u32,
    ) -> Token {
        if let Some(token) = self.next_token {
            return token;
        }
        let saved = self.mark();
        let token = self.scan_valid(handling, max_compound_length);
        self.next_token = Some(token);
        self.next_token_pos = self.token_pos;
        if check_on_new_line {
            self.next_token_on_new_line =
                has_line_break(self.source.text(), saved.pos, self.next_token_pos);
        }
        self.restore(saved);
        trace!(?token, pos = self.next_token_pos, "peek");
        token
    }

    /// Consumes the next token if it is `token`.
    pub fn skip(&mut self, token: Token) -> bool {
        self.skip_with(token, IdentifierHandling::Default)
    }

    /// Consumes the next token if it is `token`, otherwise leaves every
    /// position untouched.
    ///
    /// Skipping [`Token::GreaterThan`] scans single-character operators only,
    /// so `>>` closing nested type arguments is matched one `>` at a time.
    pub fn skip_with(&mut self, token: Token, handling: IdentifierHandling) -> bool {
        let saved = self.mark();
        let max_compound_length = if token == Token::GreaterThan {
            1
        } else {
            NO_LIMIT
        };
        if self.scan_valid(handling, max_compound_length) == token {
            self.token = token;
            self.next_token = None;
            true
        } else {
            self.restore(saved);
            false
        }
    }

    /// Consumes the next token if it is an identifier, preferring soft
    /// keywords as identifiers. The identifier text itself stays unread.
    pub fn skip_identifier(&mut self) -> bool {
        self.skip_with(Token::Identifier, IdentifierHandling::Prefer)
    }

    pub fn skip_identifier_with(&mut self, handling: IdentifierHandling) -> bool {
        self.skip_with(Token::Identifier, handling)
    }

    // === Backtracking ===

    /// Snapshot of the scan position and current token.
    ///
    /// Snapshots are plain values: one that is no longer needed is simply
    /// dropped.
    pub fn mark(&self) -> State {
        State {
            pos: self.cursor.pos(),
            token: self.token,
            token_pos: self.token_pos,
        }
    }

    /// Returns to a snapshot taken by [`Tokenizer::mark`].
    pub fn reset(&mut self, state: State) {
        trace!(pos = state.pos, token = ?state.token, "reset");
        self.restore(state);
        self.next_token = None;
    }

    fn restore(&mut self, state: State) {
        self.cursor.set_pos(state.pos);
        self.token = state.token;
        self.token_pos = state.token_pos;
    }

    /// Reads the identifier at the scan position.
    pub fn read_identifier(&mut self) -> &'a str {
        let start = self.cursor.pos();
        debug_assert!(
            self.cursor.current_char().is_some_and(is_identifier_start),
            "no identifier at {start}"
        );
        self.cursor.advance_char();
        self.cursor.eat_identifier_rest();
        self.cursor.slice_from(start)
    }

    // === Scanning ===

    fn scan_valid(&mut self, handling: IdentifierHandling, max_compound_length: u32) -> Token {
        loop {
            let token = self.scan(handling, max_compound_length);
            if token != Token::Invalid {
                return token;
            }
        }
    }

    /// Consumes the `n`th character of a compound operator if it is `byte`
    /// and compounds of that length are allowed.
    #[inline]
    fn eat_compound(&mut self, byte: u8, n: u32, max_compound_length: u32) -> bool {
        max_compound_length >= n && self.cursor.eat(byte)
    }

    /// One scan step: skips trivia and returns the next token, which is
    /// [`Token::Invalid`] after reporting an unexpected character.
    fn scan(&mut self, handling: IdentifierHandling, max_len: u32) -> Token {
        loop {
            let pos = self.cursor.pos();
            self.token_pos = pos;
            if self.cursor.is_eof() {
                return Token::EndOfFile;
            }
            match self.cursor.current() {
                b'\r' | b'\n' | b'\t' | 0x0b | 0x0c | b' ' => self.cursor.advance(),
                b'"' | b'\'' => return Token::StringLiteral,
                b'`' => return Token::TemplateLiteral,
                b'!' => {
                    self.cursor.advance();
                    if self.eat_compound(b'=', 2, max_len) {
                        if self.eat_compound(b'=', 3, max_len) {
                            return Token::ExclamationEqualsEquals;
                        }
                        return Token::ExclamationEquals;
                    }
                    return Token::Exclamation;
                }
                b'%' => {
                    self.cursor.advance();
                    if self.eat_compound(b'=', 2, max_len) {
                        return Token::PercentEquals;
                    }
                    return Token::Percent;
                }
                b'&' => {
                    self.cursor.advance();
                    if self.eat_compound(b'&', 2, max_len) {
                        return Token::AmpersandAmpersand;
                    }
                    if self.eat_compound(b'=', 2, max_len) {
                        return Token::AmpersandEquals;
                    }
                    return Token::Ampersand;
                }
                b'*' => {
                    self.cursor.advance();
                    if self.eat_compound(b'=', 2, max_len) {
                        return Token::AsteriskEquals;
                    }
                    if self.eat_compound(b'*', 2, max_len) {
                        if self.eat_compound(b'=', 3, max_len) {
                            return Token::AsteriskAsteriskEquals;
                        }
                        return Token::AsteriskAsterisk;
                    }
                    return Token::Asterisk;
                }
                b'+' => {
                    self.cursor.advance();
                    if self.eat_compound(b'+', 2, max_len) {
                        return Token::PlusPlus;
                    }
                    if self.eat_compound(b'=', 2, max_len) {
                        return Token::PlusEquals;
                    }
                    return Token::Plus;
                }
                b'-' => {
                    self.cursor.advance();
                    if self.eat_compound(b'-', 2, max_len) {
                        return Token::MinusMinus;
                    }
                    if self.eat_compound(b'=', 2, max_len) {
                        return Token::MinusEquals;
                    }
                    return Token::Minus;
                }
                b'.' => {
                    self.cursor.advance();
                    if max_len > 1 && is_decimal(self.cursor.current()) && !self.cursor.is_eof() {
                        // Leading-dot float; the value is read from the dot.
                        self.cursor.set_pos(pos);
                        return Token::FloatLiteral;
                    }
                    if max_len > 2 && self.cursor.current() == b'.' && self.cursor.peek() == b'.' {
                        self.cursor.advance_n(2);
                        return Token::DotDotDot;
                    }
                    return Token::Dot;
                }
                b'/' => {
                    self.cursor.advance();
                    if max_len > 1 {
                        match self.cursor.current() {
                            b'/' => {
                                self.skip_line_comment(pos);
                                continue;
                            }
                            b'*' => {
                                self.skip_block_comment(pos);
                                continue;
                            }
                            b'=' => {
                                self.cursor.advance();
                                return Token::SlashEquals;
                            }
                            _ => {}
                        }
                    }
                    return Token::Slash;
                }
                b'0'..=b'9' => {
                    return if self.test_integer() {
                        Token::IntegerLiteral
                    } else {
                        Token::FloatLiteral
                    };
                }
                b'<' => {
                    self.cursor.advance();
                    if self.eat_compound(b'<', 2, max_len) {
                        if self.eat_compound(b'=', 3, max_len) {
                            return Token::LessThanLessThanEquals;
                        }
                        return Token::LessThanLessThan;
                    }
                    if self.eat_compound(b'=', 2, max_len) {
                        return Token::LessThanEquals;
                    }
                    return Token::LessThan;
                }
                b'=' => {
                    self.cursor.advance();
                    if self.eat_compound(b'=', 2, max_len) {
                        if self.eat_compound(b'=', 3, max_len) {
                            return Token::EqualsEqualsEquals;
                        }
                        return Token::EqualsEquals;
                    }
                    if self.eat_compound(b'>', 2, max_len) {
                        return Token::EqualsGreaterThan;
                    }
                    return Token::Equals;
                }
                b'>' => {
                    self.cursor.advance();
                    if self.eat_compound(b'>', 2, max_len) {
                        if self.eat_compound(b'>', 3, max_len) {
                            if self.eat_compound(b'=', 4, max_len) {
                                return Token::GreaterThanGreaterThanGreaterThanEquals;
                            }
                            return Token::GreaterThanGreaterThanGreaterThan;
                        }
                        if self.eat_compound(b'=', 3, max_len) {
                            return Token::GreaterThanGreaterThanEquals;
                        }
                        return Token::GreaterThanGreaterThan;
                    }
                    if self.eat_compound(b'=', 2, max_len) {
                        return Token::GreaterThanEquals;
                    }
                    return Token::GreaterThan;
                }
                b'^' => {
                    self.cursor.advance();
                    if self.eat_compound(b'=', 2, max_len) {
                        return Token::CaretEquals;
                    }
                    return Token::Caret;
                }
                b'|' => {
                    self.cursor.advance();
                    if self.eat_compound(b'|', 2, max_len) {
                        return Token::BarBar;
                    }
                    if self.eat_compound(b'=', 2, max_len) {
                        return Token::BarEquals;
                    }
                    return Token::Bar;
                }
                b'(' => return self.single(Token::OpenParen),
                b')' => return self.single(Token::CloseParen),
                b',' => return self.single(Token::Comma),
                b':' => return self.single(Token::Colon),
                b';' => return self.single(Token::Semicolon),
                b'?' => return self.single(Token::Question),
                b'[' => return self.single(Token::OpenBracket),
                b']' => return self.single(Token::CloseBracket),
                b'{' => return self.single(Token::OpenBrace),
                b'}' => return self.single(Token::CloseBrace),
                b'~' => return self.single(Token::Tilde),
                b'@' => return self.single(Token::At),
                _ => {
                    let c = self
                        .cursor
                        .current_char()
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    if is_identifier_start(c) {
                        return self.scan_identifier_or_keyword(pos, handling);
                    }
                    self.cursor.advance_char();
                    if is_white_space(c) || is_line_break(c) {
                        continue;
                    }
                    let range = self.range_between(pos, self.cursor.pos());
                    self.error(DiagnosticCode::InvalidCharacter, range, &[]);
                    return Token::Invalid;
                }
            }
        }
    }

    #[inline]
    fn single(&mut self, token: Token) -> Token {
        self.cursor.advance();
        token
    }

    /// Classifies the word at `start`. Keywords are consumed; identifiers
    /// are left for [`Tokenizer::read_identifier`].
    fn scan_identifier_or_keyword(&mut self, start: u32, handling: IdentifierHandling) -> Token {
        self.cursor.advance_char();
        self.cursor.eat_identifier_rest();
        if handling != IdentifierHandling::Always {
            if let Some(keyword) = keyword_token(self.cursor.slice_from(start)) {
                if !(handling == IdentifierHandling::Prefer && keyword.is_also_identifier()) {
                    return keyword;
                }
            }
        }
        self.cursor.set_pos(start);
        Token::Identifier
    }

    /// Skips `//` or `///` through the end of the line, including its line
    /// feed. The cursor is at the second slash.
    fn skip_line_comment(&mut self, start: u32) {
        self.cursor.advance();
        let kind = if self.cursor.eat(b'/') {
            CommentKind::Triple
        } else {
            CommentKind::Line
        };
        self.cursor.eat_until_newline_or_eof();
        self.cursor.eat(b'\n');
        self.report_comment(kind, start);
    }

    /// Skips a `/* */` comment. The cursor is at the asterisk.
    fn skip_block_comment(&mut self, start: u32) {
        self.cursor.advance();
        if self.cursor.eat_block_comment_rest() {
            self.report_comment(CommentKind::Block, start);
        } else {
            let range = self.range_at(self.cursor.pos());
            self.error(DiagnosticCode::Expected, range, &["*/"]);
        }
    }

    fn report_comment(&mut self, kind: CommentKind, start: u32) {
        let end = self.cursor.pos();
        let range = self.range_between(start, end);
        let text = self.cursor.slice(start, end);
        if let Some(handler) = self.on_comment.as_mut() {
            handler(kind, text, range);
        }
    }

    fn error(&mut self, code: DiagnosticCode, range: Range, args: &[&str]) {
        trace!(code = code.code(), ?range, "lexical error");
        self.emitter.error(code, range, args);
    }
}
