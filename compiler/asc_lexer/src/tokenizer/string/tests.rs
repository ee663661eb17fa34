use asc_ir::{SourceKind, SourceMap, Token};
use pretty_assertions::assert_eq;

use crate::{TemplateReader, Tokenizer};

fn with_tokenizer<R>(text: &str, f: impl FnOnce(&mut Tokenizer<'_>) -> R) -> R {
    let mut sources = SourceMap::new();
    let id = sources.add(SourceKind::User, "strings.ts", text);
    let mut tokenizer = Tokenizer::new(&sources[id]);
    f(&mut tokenizer)
}

fn codes(tokenizer: &Tokenizer<'_>) -> Vec<(u32, u32, u32)> {
    tokenizer
        .diagnostics()
        .iter()
        .map(|d| {
            let range = d.range.map_or((0, 0), |r| (r.start, r.end));
            (d.code.code(), range.0, range.1)
        })
        .collect()
}

fn string(text: &str, tagged: bool) -> (String, Vec<(u32, u32, u32)>) {
    with_tokenizer(text, |t| {
        let value = t.read_string(None, tagged);
        (value, codes(t))
    })
}

// === Strings ===

#[test]
fn plain_strings() {
    with_tokenizer("'single' \"double\"", |t| {
        assert_eq!(t.next(), Token::StringLiteral);
        assert_eq!(t.read_string(None, false), "single");
        assert_eq!(t.read_string_raw(), "single");
        assert_eq!(t.next(), Token::StringLiteral);
        assert_eq!(t.read_string(None, false), "double");
        assert_eq!(t.next(), Token::EndOfFile);
    });
}

#[test]
fn unterminated_at_end_of_text() {
    assert_eq!(string("\"abc", false), ("abc".to_owned(), vec![(1002, 0, 4)]));
}

#[test]
fn unterminated_at_line_break() {
    with_tokenizer("\"ab\ncd\"", |t| {
        assert_eq!(t.read_string(None, false), "ab");
        assert_eq!(codes(t), vec![(1002, 0, 3)]);
        assert_eq!(t.pos(), 3);
        assert_eq!(t.read_string_end(), 3);
    });
}

#[test]
fn other_quote_is_plain_text() {
    assert_eq!(string("'say \"hi\"'", false).0, "say \"hi\"");
}

// === Escapes ===

#[test]
fn simple_escapes() {
    let (value, diagnostics) = string(r#""a\nb\t\'\"\\\0\q""#, false);
    assert_eq!(value, "a\nb\t'\"\\\0q");
    assert!(diagnostics.is_empty());
}

#[test]
fn line_continuation_produces_nothing() {
    assert_eq!(string("\"a\\\nb\"", false).0, "ab");
    assert_eq!(string("\"a\\\r\nb\"", false).0, "ab");
}

#[test]
fn unicode_escapes() {
    let (value, diagnostics) = string(r#""A\x42\u{1F600}""#, false);
    assert_eq!(value, "AB\u{1F600}");
    assert!(diagnostics.is_empty());
}

#[test]
fn surrogate_pairs_combine() {
    assert_eq!(string(r#""\uD83D\uDE00""#, false).0, "\u{1F600}");
    assert_eq!(string(r#""\uD83Dx""#, false).0, "\u{FFFD}x");
    assert_eq!(string(r#""\uDE00""#, false).0, "\u{FFFD}");
}

#[test]
fn invalid_hex_escape() {
    assert_eq!(string(r#""\xZZ""#, false), ("Z".to_owned(), vec![(1125, 3, 4)]));
}

#[test]
fn invalid_hex_escape_kept_raw_when_tagged() {
    assert_eq!(string(r#""\xZZ""#, true), (r"\xZZ".to_owned(), vec![]));
}

#[test]
fn tagged_zero_followed_by_digit_stays_raw() {
    assert_eq!(string(r#""\01""#, true).0, r"\01");
    assert_eq!(string(r#""\01""#, false).0, "\u{0}1");
}

#[test]
fn extended_escape_out_of_range() {
    assert_eq!(string(r#""\u{110000}""#, false), (String::new(), vec![(1198, 4, 10)]));
}

#[test]
fn extended_escape_unterminated() {
    assert_eq!(string(r#""\u{41""#, false), (String::new(), vec![(1199, 4, 6)]));
}

#[test]
fn escape_at_end_of_text() {
    let (value, diagnostics) = string("\"\\", false);
    assert_eq!(value, "");
    assert_eq!(diagnostics, vec![(1126, 2, 2), (1002, 0, 2)]);
}

// === Templates ===

#[test]
fn template_stops_at_interpolation() {
    with_tokenizer("`a${1+1}b`", |t| {
        assert_eq!(t.next(), Token::TemplateLiteral);
        assert_eq!(t.read_string(None, false), "a");
        assert!(t.reading_template_string());
        assert_eq!(t.pos(), 4);

        assert_eq!(t.next(), Token::IntegerLiteral);
        assert_eq!(t.read_integer(), 1);
        assert_eq!(t.next(), Token::Plus);
        assert_eq!(t.next(), Token::IntegerLiteral);
        assert_eq!(t.read_integer(), 1);
        assert_eq!(t.next(), Token::CloseBrace);

        assert_eq!(t.read_string(Some(b'`'), false), "b");
        assert!(!t.reading_template_string());
        assert_eq!(t.next(), Token::EndOfFile);
        assert!(t.diagnostics().is_empty());
    });
}

#[test]
fn template_allows_line_breaks() {
    assert_eq!(string("`a\nb`", false), ("a\nb".to_owned(), vec![]));
}

#[test]
fn template_reader_yields_parts() {
    with_tokenizer(r"`x\n${y}z`", |t| {
        let mut reader = TemplateReader::new(true);
        assert_eq!(t.next(), Token::TemplateLiteral);

        let head = reader.read_part(t);
        assert_eq!(head.cooked, "x\n");
        assert_eq!(head.raw, r"x\n");
        assert!(head.interpolation);
        assert!(!reader.is_finished());

        assert_eq!(t.next(), Token::Identifier);
        assert_eq!(t.read_identifier(), "y");
        assert_eq!(t.next(), Token::CloseBrace);

        let tail = reader.read_part(t);
        assert_eq!(tail.cooked, "z");
        assert!(!tail.interpolation);
        assert!(reader.is_finished());
    });
}

// === Regular expressions ===

#[test]
fn regexp_pattern_and_flags() {
    with_tokenizer(r"/ab\/c/gi;", |t| {
        assert_eq!(t.next(), Token::Slash);
        assert_eq!(t.read_regexp_pattern(), r"ab\/c");
        assert!(t.skip(Token::Slash));
        assert_eq!(t.read_regexp_flags(), "gi");
        assert_eq!(t.next(), Token::Semicolon);
        assert!(t.diagnostics().is_empty());
    });
}

#[test]
fn escaped_backslash_ends_before_slash() {
    with_tokenizer(r"/a\\/", |t| {
        t.next();
        assert_eq!(t.read_regexp_pattern(), r"a\\");
    });
}

#[test]
fn unterminated_regexp() {
    with_tokenizer("/abc\nx", |t| {
        t.next();
        assert_eq!(t.read_regexp_pattern(), "abc");
        assert_eq!(codes(t), vec![(1161, 1, 4)]);
    });
}

#[test]
fn invalid_regexp_flags() {
    for (flags, valid) in [("gim", true), ("gg", false), ("x", false), ("", true)] {
        with_tokenizer(flags, |t| {
            assert_eq!(t.read_regexp_flags(), flags);
            assert_eq!(t.diagnostics().is_empty(), valid, "{flags:?}");
        });
    }
}
