//! Keyword resolution.
//!
//! Keywords are looked up by length first, then by text. All keywords are
//! 2 to 11 lower-case ASCII letters, so anything else is rejected before a
//! single comparison.

use asc_ir::Token;

/// Look up the keyword token spelled `text`.
///
/// Returns `None` for anything that is not a keyword, including soft
/// keywords' identifier uses, which the tokenizer decides separately.
pub fn keyword_token(text: &str) -> Option<Token> {
    let bytes = text.as_bytes();
    if !(2..=11).contains(&bytes.len()) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match bytes.len() {
        2 => match text {
            "as" => Some(Token::As),
            "do" => Some(Token::Do),
            "if" => Some(Token::If),
            "in" => Some(Token::In),
            "is" => Some(Token::Is),
            "of" => Some(Token::Of),
            _ => None,
        },
        3 => match text {
            "for" => Some(Token::For),
            "get" => Some(Token::Get),
            "let" => Some(Token::Let),
            "new" => Some(Token::New),
            "set" => Some(Token::Set),
            "try" => Some(Token::Try),
            "var" => Some(Token::Var),
            _ => None,
        },
        4 => match text {
            "case" => Some(Token::Case),
            "else" => Some(Token::Else),
            "enum" => Some(Token::Enum),
            "from" => Some(Token::From),
            "null" => Some(Token::Null),
            "this" => Some(Token::This),
            "true" => Some(Token::True),
            "type" => Some(Token::Type),
            "void" => Some(Token::Void),
            "with" => Some(Token::With),
            _ => None,
        },
        5 => match text {
            "async" => Some(Token::Async),
            "await" => Some(Token::Await),
            "break" => Some(Token::Break),
            "catch" => Some(Token::Catch),
            "class" => Some(Token::Class),
            "const" => Some(Token::Const),
            "false" => Some(Token::False),
            "keyof" => Some(Token::KeyOf),
            "super" => Some(Token::Super),
            "throw" => Some(Token::Throw),
            "while" => Some(Token::While),
            "yield" => Some(Token::Yield),
            _ => None,
        },
        6 => match text {
            "delete" => Some(Token::Delete),
            "export" => Some(Token::Export),
            "import" => Some(Token::Import),
            "module" => Some(Token::Module),
            "public" => Some(Token::Public),
            "return" => Some(Token::Return),
            "static" => Some(Token::Static),
            "switch" => Some(Token::Switch),
            "typeof" => Some(Token::TypeOf),
            _ => None,
        },
        7 => match text {
            "declare" => Some(Token::Declare),
            "default" => Some(Token::Default),
            "extends" => Some(Token::Extends),
            "finally" => Some(Token::Finally),
            "package" => Some(Token::Package),
            "private" => Some(Token::Private),
            _ => None,
        },
        8 => match text {
            "abstract" => Some(Token::Abstract),
            "continue" => Some(Token::Continue),
            "debugger" => Some(Token::Debugger),
            "function" => Some(Token::Function),
            "override" => Some(Token::Override),
            "readonly" => Some(Token::Readonly),
            _ => None,
        },
        9 => match text {
            "interface" => Some(Token::Interface),
            "namespace" => Some(Token::Namespace),
            "protected" => Some(Token::Protected),
            _ => None,
        },
        10 => match text {
            "implements" => Some(Token::Implements),
            "instanceof" => Some(Token::InstanceOf),
            _ => None,
        },
        11 => match text {
            "constructor" => Some(Token::Constructor),
            _ => None,
        },
        _ => None,
    }
}

/// Whether `name` is a soft keyword that still cannot name a variable.
pub fn is_illegal_variable_identifier(name: &str) -> bool {
    matches!(name, "delete" | "for" | "instanceof" | "null" | "void")
}

#[cfg(test)]
mod tests;
