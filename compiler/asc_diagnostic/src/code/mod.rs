//! Diagnostic codes and their message templates.
//!
//! Codes below 1000 are compiler-specific and render with an `AS` prefix;
//! codes from 1000 upwards follow the numbering of the language the source
//! dialect derives from and render with a `TS` prefix.

use std::fmt;

/// Stable identifier of a diagnostic, with a message template.
///
/// Templates contain up to three positional placeholders `{0}`, `{1}` and
/// `{2}`, filled in by [`DiagnosticMessage::create`](crate::DiagnosticMessage::create).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticCode {
    // Internal (AS)
    /// AS100
    NotImplemented,
    /// AS209
    InvalidRegexpFlags,
    /// AS236
    LiteralDoesNotFitInt64,

    // Language-level (TS)
    /// TS1002
    UnterminatedStringLiteral,
    /// TS1003
    IdentifierExpected,
    /// TS1005
    Expected,
    /// TS1012
    UnexpectedToken,
    /// TS1121
    OctalLiteralsNotAllowed,
    /// TS1124
    DigitExpected,
    /// TS1125
    HexDigitExpected,
    /// TS1126
    UnexpectedEndOfText,
    /// TS1127
    InvalidCharacter,
    /// TS1161
    UnterminatedRegexpLiteral,
    /// TS1177
    BinaryDigitExpected,
    /// TS1178
    OctalDigitExpected,
    /// TS1198
    ExtendedUnicodeEscapeOutOfRange,
    /// TS1199
    UnterminatedUnicodeEscape,
    /// TS1351
    IdentifierAfterNumericLiteral,
    /// TS6188
    NumericSeparatorNotAllowed,
    /// TS6189
    ConsecutiveNumericSeparators,
}

impl DiagnosticCode {
    /// All codes, ordered by number.
    pub const ALL: &'static [DiagnosticCode] = &[
        DiagnosticCode::NotImplemented,
        DiagnosticCode::InvalidRegexpFlags,
        DiagnosticCode::LiteralDoesNotFitInt64,
        DiagnosticCode::UnterminatedStringLiteral,
        DiagnosticCode::IdentifierExpected,
        DiagnosticCode::Expected,
        DiagnosticCode::UnexpectedToken,
        DiagnosticCode::OctalLiteralsNotAllowed,
        DiagnosticCode::DigitExpected,
        DiagnosticCode::HexDigitExpected,
        DiagnosticCode::UnexpectedEndOfText,
        DiagnosticCode::InvalidCharacter,
        DiagnosticCode::UnterminatedRegexpLiteral,
        DiagnosticCode::BinaryDigitExpected,
        DiagnosticCode::OctalDigitExpected,
        DiagnosticCode::ExtendedUnicodeEscapeOutOfRange,
        DiagnosticCode::UnterminatedUnicodeEscape,
        DiagnosticCode::IdentifierAfterNumericLiteral,
        DiagnosticCode::NumericSeparatorNotAllowed,
        DiagnosticCode::ConsecutiveNumericSeparators,
    ];

    /// The numeric code.
    pub const fn code(self) -> u32 {
        match self {
            DiagnosticCode::NotImplemented => 100,
            DiagnosticCode::InvalidRegexpFlags => 209,
            DiagnosticCode::LiteralDoesNotFitInt64 => 236,
            DiagnosticCode::UnterminatedStringLiteral => 1002,
            DiagnosticCode::IdentifierExpected => 1003,
            DiagnosticCode::Expected => 1005,
            DiagnosticCode::UnexpectedToken => 1012,
            DiagnosticCode::OctalLiteralsNotAllowed => 1121,
            DiagnosticCode::DigitExpected => 1124,
            DiagnosticCode::HexDigitExpected => 1125,
            DiagnosticCode::UnexpectedEndOfText => 1126,
            DiagnosticCode::InvalidCharacter => 1127,
            DiagnosticCode::UnterminatedRegexpLiteral => 1161,
            DiagnosticCode::BinaryDigitExpected => 1177,
            DiagnosticCode::OctalDigitExpected => 1178,
            DiagnosticCode::ExtendedUnicodeEscapeOutOfRange => 1198,
            DiagnosticCode::UnterminatedUnicodeEscape => 1199,
            DiagnosticCode::IdentifierAfterNumericLiteral => 1351,
            DiagnosticCode::NumericSeparatorNotAllowed => 6188,
            DiagnosticCode::ConsecutiveNumericSeparators => 6189,
        }
    }

    /// Message template.
    pub const fn template(self) -> &'static str {
        match self {
            DiagnosticCode::NotImplemented => "Not implemented: {0}",
            DiagnosticCode::InvalidRegexpFlags => "Invalid regular expression flags.",
            DiagnosticCode::LiteralDoesNotFitInt64 => {
                "Literal '{0}' does not fit into 'i64' or 'u64' types."
            }
            DiagnosticCode::UnterminatedStringLiteral => "Unterminated string literal.",
            DiagnosticCode::IdentifierExpected => "Identifier expected.",
            DiagnosticCode::Expected => "'{0}' expected.",
            DiagnosticCode::UnexpectedToken => "Unexpected token.",
            DiagnosticCode::OctalLiteralsNotAllowed => {
                "Octal literals are not allowed in strict mode."
            }
            DiagnosticCode::DigitExpected => "Digit expected.",
            DiagnosticCode::HexDigitExpected => "Hexadecimal digit expected.",
            DiagnosticCode::UnexpectedEndOfText => "Unexpected end of text.",
            DiagnosticCode::InvalidCharacter => "Invalid character.",
            DiagnosticCode::UnterminatedRegexpLiteral => "Unterminated regular expression literal.",
            DiagnosticCode::BinaryDigitExpected => "Binary digit expected.",
            DiagnosticCode::OctalDigitExpected => "Octal digit expected.",
            DiagnosticCode::ExtendedUnicodeEscapeOutOfRange => {
                "An extended Unicode escape value must be between 0x0 and 0x10FFFF inclusive."
            }
            DiagnosticCode::UnterminatedUnicodeEscape => "Unterminated Unicode escape sequence.",
            DiagnosticCode::IdentifierAfterNumericLiteral => {
                "An identifier or keyword cannot immediately follow a numeric literal."
            }
            DiagnosticCode::NumericSeparatorNotAllowed => {
                "Numeric separators are not allowed here."
            }
            DiagnosticCode::ConsecutiveNumericSeparators => {
                "Multiple consecutive numeric separators are not permitted."
            }
        }
    }

    /// Whether this is a compiler-specific code (below 1000).
    pub const fn is_internal(self) -> bool {
        self.code() < 1000
    }

    /// `AS` for internal codes, `TS` otherwise.
    pub const fn prefix(self) -> &'static str {
        if self.is_internal() {
            "AS"
        } else {
            "TS"
        }
    }

    /// Look up a code by its number.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }
}

/// Renders the bare number, e.g. `1002`.
impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests;
