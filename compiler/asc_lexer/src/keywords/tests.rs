use super::*;

#[test]
fn every_keyword_resolves_to_itself() {
    for &token in Token::KEYWORDS {
        assert_eq!(keyword_token(token.text()), Some(token), "{token:?}");
    }
}

#[test]
fn non_keywords() {
    for text in ["", "a", "x1", "If", "returns", "constructors", "_if", "$as", "ifx"] {
        assert_eq!(keyword_token(text), None, "{text:?}");
    }
}

#[test]
fn declaration_keywords() {
    assert_eq!(keyword_token("let"), Some(Token::Let));
    assert_eq!(keyword_token("const"), Some(Token::Const));
    assert_eq!(keyword_token("function"), Some(Token::Function));
    assert_eq!(keyword_token("namespace"), Some(Token::Namespace));
}

#[test]
fn illegal_variable_identifiers() {
    assert!(is_illegal_variable_identifier("null"));
    assert!(is_illegal_variable_identifier("instanceof"));
    assert!(!is_illegal_variable_identifier("type"));
    assert!(!is_illegal_variable_identifier("from"));
}
