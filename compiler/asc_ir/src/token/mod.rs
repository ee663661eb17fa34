//! Token kinds produced by the tokenizer.
//!
//! A [`Token`] carries no payload. Literal values are read on demand from
//! the tokenizer's current position once the kind is known.

use std::fmt;

/// Lexical category of a token.
///
/// Keywords come first, in alphabetical order, followed by punctuation and
/// operators, literal markers and the two terminal kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Token {
    // Keywords
    Abstract,
    As,
    Async,
    Await,
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Constructor,
    Debugger,
    Declare,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    False,
    Finally,
    For,
    From,
    Function,
    Get,
    If,
    Implements,
    Import,
    In,
    InstanceOf,
    Interface,
    Is,
    KeyOf,
    Let,
    Module,
    Namespace,
    New,
    Null,
    Of,
    Override,
    Package,
    Private,
    Protected,
    Public,
    Readonly,
    Return,
    Set,
    Static,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    Type,
    TypeOf,
    Var,
    Void,
    While,
    With,
    Yield,

    // Punctuation
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Dot,
    DotDotDot,
    Semicolon,
    Comma,
    LessThan,
    GreaterThan,
    LessThanEquals,
    GreaterThanEquals,
    EqualsEquals,
    ExclamationEquals,
    EqualsEqualsEquals,
    ExclamationEqualsEquals,
    EqualsGreaterThan,
    Plus,
    Minus,
    AsteriskAsterisk,
    Asterisk,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,
    LessThanLessThan,
    GreaterThanGreaterThan,
    GreaterThanGreaterThanGreaterThan,
    Ampersand,
    Bar,
    Caret,
    Exclamation,
    Tilde,
    AmpersandAmpersand,
    BarBar,
    Question,
    Colon,
    Equals,
    PlusEquals,
    MinusEquals,
    AsteriskEquals,
    AsteriskAsteriskEquals,
    SlashEquals,
    PercentEquals,
    LessThanLessThanEquals,
    GreaterThanGreaterThanEquals,
    GreaterThanGreaterThanGreaterThanEquals,
    AmpersandEquals,
    BarEquals,
    CaretEquals,
    At,

    // Literals
    Identifier,
    StringLiteral,
    IntegerLiteral,
    FloatLiteral,
    TemplateLiteral,

    // Meta
    Invalid,
    EndOfFile,
}

impl Token {
    /// Every keyword token, in declaration order.
    pub const KEYWORDS: &'static [Token] = &[
        Token::Abstract,
        Token::As,
        Token::Async,
        Token::Await,
        Token::Break,
        Token::Case,
        Token::Catch,
        Token::Class,
        Token::Const,
        Token::Continue,
        Token::Constructor,
        Token::Debugger,
        Token::Declare,
        Token::Default,
        Token::Delete,
        Token::Do,
        Token::Else,
        Token::Enum,
        Token::Export,
        Token::Extends,
        Token::False,
        Token::Finally,
        Token::For,
        Token::From,
        Token::Function,
        Token::Get,
        Token::If,
        Token::Implements,
        Token::Import,
        Token::In,
        Token::InstanceOf,
        Token::Interface,
        Token::Is,
        Token::KeyOf,
        Token::Let,
        Token::Module,
        Token::Namespace,
        Token::New,
        Token::Null,
        Token::Of,
        Token::Override,
        Token::Package,
        Token::Private,
        Token::Protected,
        Token::Public,
        Token::Readonly,
        Token::Return,
        Token::Set,
        Token::Static,
        Token::Super,
        Token::Switch,
        Token::This,
        Token::Throw,
        Token::True,
        Token::Try,
        Token::Type,
        Token::TypeOf,
        Token::Var,
        Token::Void,
        Token::While,
        Token::With,
        Token::Yield,
    ];

    /// Whether this token is a reserved or contextual keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self <= Token::Yield
    }

    /// Whether this keyword may also be used as an identifier.
    ///
    /// The tokenizer yields [`Token::Identifier`] for these when asked to
    /// prefer identifiers.
    pub fn is_also_identifier(self) -> bool {
        matches!(
            self,
            Token::Abstract
                | Token::As
                | Token::Constructor
                | Token::Declare
                | Token::Delete
                | Token::From
                | Token::For
                | Token::Get
                | Token::InstanceOf
                | Token::Is
                | Token::KeyOf
                | Token::Module
                | Token::Namespace
                | Token::Null
                | Token::Readonly
                | Token::Set
                | Token::Type
                | Token::Void
        )
    }

    /// Source text of an operator token, including keyword operators.
    ///
    /// Returns `None` for tokens that never appear as an operator.
    pub fn operator_text(self) -> Option<&'static str> {
        let text = match self {
            Token::Delete => "delete",
            Token::In => "in",
            Token::InstanceOf => "instanceof",
            Token::New => "new",
            Token::TypeOf => "typeof",
            Token::Void => "void",
            Token::Yield => "yield",
            Token::DotDotDot => "...",
            Token::Comma => ",",
            Token::LessThan => "<",
            Token::GreaterThan => ">",
            Token::LessThanEquals => "<=",
            Token::GreaterThanEquals => ">=",
            Token::EqualsEquals => "==",
            Token::ExclamationEquals => "!=",
            Token::EqualsEqualsEquals => "===",
            Token::ExclamationEqualsEquals => "!==",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::AsteriskAsterisk => "**",
            Token::Asterisk => "*",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::PlusPlus => "++",
            Token::MinusMinus => "--",
            Token::LessThanLessThan => "<<",
            Token::GreaterThanGreaterThan => ">>",
            Token::GreaterThanGreaterThanGreaterThan => ">>>",
            Token::Ampersand => "&",
            Token::Bar => "|",
            Token::Caret => "^",
            Token::Exclamation => "!",
            Token::Tilde => "~",
            Token::AmpersandAmpersand => "&&",
            Token::BarBar => "||",
            Token::Equals => "=",
            Token::PlusEquals => "+=",
            Token::MinusEquals => "-=",
            Token::AsteriskEquals => "*=",
            Token::AsteriskAsteriskEquals => "**=",
            Token::SlashEquals => "/=",
            Token::PercentEquals => "%=",
            Token::LessThanLessThanEquals => "<<=",
            Token::GreaterThanGreaterThanEquals => ">>=",
            Token::GreaterThanGreaterThanGreaterThanEquals => ">>>=",
            Token::AmpersandEquals => "&=",
            Token::BarEquals => "|=",
            Token::CaretEquals => "^=",
            _ => return None,
        };
        Some(text)
    }

    /// Human-readable text of the token, used in diagnostics.
    pub fn text(self) -> &'static str {
        match self {
            Token::Abstract => "abstract",
            Token::As => "as",
            Token::Async => "async",
            Token::Await => "await",
            Token::Break => "break",
            Token::Case => "case",
            Token::Catch => "catch",
            Token::Class => "class",
            Token::Const => "const",
            Token::Continue => "continue",
            Token::Constructor => "constructor",
            Token::Debugger => "debugger",
            Token::Declare => "declare",
            Token::Default => "default",
            Token::Delete => "delete",
            Token::Do => "do",
            Token::Else => "else",
            Token::Enum => "enum",
            Token::Export => "export",
            Token::Extends => "extends",
            Token::False => "false",
            Token::Finally => "finally",
            Token::For => "for",
            Token::From => "from",
            Token::Function => "function",
            Token::Get => "get",
            Token::If => "if",
            Token::Implements => "implements",
            Token::Import => "import",
            Token::In => "in",
            Token::InstanceOf => "instanceof",
            Token::Interface => "interface",
            Token::Is => "is",
            Token::KeyOf => "keyof",
            Token::Let => "let",
            Token::Module => "module",
            Token::Namespace => "namespace",
            Token::New => "new",
            Token::Null => "null",
            Token::Of => "of",
            Token::Override => "override",
            Token::Package => "package",
            Token::Private => "private",
            Token::Protected => "protected",
            Token::Public => "public",
            Token::Readonly => "readonly",
            Token::Return => "return",
            Token::Set => "set",
            Token::Static => "static",
            Token::Super => "super",
            Token::Switch => "switch",
            Token::This => "this",
            Token::Throw => "throw",
            Token::True => "true",
            Token::Try => "try",
            Token::Type => "type",
            Token::TypeOf => "typeof",
            Token::Var => "var",
            Token::Void => "void",
            Token::While => "while",
            Token::With => "with",
            Token::Yield => "yield",
            Token::OpenBrace => "{",
            Token::CloseBrace => "}",
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::OpenBracket => "[",
            Token::CloseBracket => "]",
            Token::Dot => ".",
            Token::Semicolon => ";",
            Token::EqualsGreaterThan => "=>",
            Token::Question => "?",
            Token::Colon => ":",
            Token::At => "@",
            Token::Identifier => "identifier",
            Token::StringLiteral => "string literal",
            Token::IntegerLiteral => "integer literal",
            Token::FloatLiteral => "float literal",
            Token::TemplateLiteral => "template literal",
            Token::Invalid => "invalid token",
            Token::EndOfFile => "end of file",
            operator => operator.operator_text().unwrap_or("operator"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
