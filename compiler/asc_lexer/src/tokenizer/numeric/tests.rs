use asc_diagnostic::DiagnosticCode;
use asc_ir::{SourceKind, SourceMap, Token};
use pretty_assertions::assert_eq;

use crate::Tokenizer;

fn with_tokenizer<R>(text: &str, f: impl FnOnce(&mut Tokenizer<'_>) -> R) -> R {
    let mut sources = SourceMap::new();
    let id = sources.add(SourceKind::User, "numbers.ts", text);
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

fn integer(text: &str) -> (u64, Vec<(u32, u32, u32)>) {
    with_tokenizer(text, |t| {
        assert_eq!(t.next(), Token::IntegerLiteral, "{text:?}");
        let value = t.read_integer();
        (value, codes(t))
    })
}

fn float(text: &str) -> (f64, Vec<(u32, u32, u32)>) {
    with_tokenizer(text, |t| {
        assert_eq!(t.next(), Token::FloatLiteral, "{text:?}");
        let value = t.read_float();
        (value, codes(t))
    })
}

// === Classification ===

#[test]
fn integer_or_float() {
    with_tokenizer("12 1_000 0x1 1.5 1e3 .5", |t| {
        assert!(t.test_integer());
        assert_eq!(t.next(), Token::IntegerLiteral);
        t.read_integer();
        assert_eq!(t.next(), Token::IntegerLiteral);
        t.read_integer();
        assert_eq!(t.next(), Token::IntegerLiteral);
        t.read_integer();
        assert_eq!(t.next(), Token::FloatLiteral);
        t.read_float();
        assert_eq!(t.next(), Token::FloatLiteral);
        t.read_float();
        assert_eq!(t.next(), Token::FloatLiteral);
        t.read_float();
        assert_eq!(t.next(), Token::EndOfFile);
    });
}

// === Integers ===

#[test]
fn prefixed_integers() {
    assert_eq!(integer("0x1F"), (31, vec![]));
    assert_eq!(integer("0XfF"), (255, vec![]));
    assert_eq!(integer("0b101"), (5, vec![]));
    assert_eq!(integer("0o17"), (15, vec![]));
}

#[test]
fn decimal_with_separators() {
    assert_eq!(integer("123_456"), (123_456, vec![]));
    assert_eq!(integer("7"), (7, vec![]));
}

#[test]
fn largest_unsigned_value_fits() {
    assert_eq!(integer("18446744073709551615"), (u64::MAX, vec![]));
    assert_eq!(integer("0xFFFFFFFFFFFFFFFF"), (u64::MAX, vec![]));
}

#[test]
fn overflow_reported_once_with_literal_text() {
    with_tokenizer("99999999999999999999;", |t| {
        t.next();
        t.read_integer();
        assert_eq!(t.pos(), 20);
        let diagnostics = t.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::LiteralDoesNotFitInt64);
        assert_eq!(
            diagnostics[0].message,
            "Literal '99999999999999999999' does not fit into 'i64' or 'u64' types."
        );
        assert_eq!(diagnostics[0].range.map(|r| (r.start, r.end)), Some((0, 20)));
    });
}

#[test]
fn hex_overflow_quotes_prefix() {
    let (_, diagnostics) = integer("0x1FFFFFFFFFFFFFFFF");
    assert_eq!(diagnostics, vec![(236, 0, 19)]);
}

#[test]
fn legacy_octal_is_read_and_rejected() {
    assert_eq!(integer("017"), (15, vec![(1121, 0, 3)]));
}

#[test]
fn missing_digits_after_prefix() {
    assert_eq!(integer("0x;"), (0, vec![(1125, 2, 2)]));
    assert_eq!(integer("0b2"), (0, vec![(1177, 2, 2)]));
    assert_eq!(integer("0o9"), (0, vec![(1178, 2, 2)]));
}

#[test]
fn misplaced_separators() {
    assert_eq!(integer("1__2"), (12, vec![(6189, 2, 2)]));
    assert_eq!(integer("12_ "), (12, vec![(6188, 2, 2)]));
    assert_eq!(integer("0_1"), (1, vec![(6188, 1, 1)]));
    assert_eq!(integer("0x_1"), (1, vec![(6188, 2, 2)]));
}

#[test]
fn trailing_separator_suppresses_decimal_overflow_only() {
    let (_, decimal) = integer("99999999999999999999_");
    assert_eq!(decimal, vec![(6188, 20, 20)]);

    let (_, hex) = integer("0x1FFFFFFFFFFFFFFFF_");
    assert_eq!(hex, vec![(6188, 19, 19), (236, 0, 20)]);
}

#[test]
fn identifier_right_after_literal() {
    with_tokenizer("3in", |t| {
        t.next();
        assert_eq!(t.read_integer(), 3);
        t.check_for_identifier_start_after_numeric_literal();
        assert_eq!(codes(t), vec![(1351, 1, 1)]);
    });
}

// === Floats ===

#[test]
fn float_forms() {
    assert_eq!(float("1.5"), (1.5, vec![]));
    assert_eq!(float("1e3"), (1000.0, vec![]));
    assert_eq!(float("2.5e-3"), (0.0025, vec![]));
    assert_eq!(float("1.5E+2"), (150.0, vec![]));
    assert_eq!(float(".5"), (0.5, vec![]));
    assert_eq!(float("1_000.25"), (1000.25, vec![]));
}

#[test]
fn dangling_exponent_keeps_mantissa() {
    with_tokenizer("1e;", |t| {
        assert_eq!(t.next(), Token::FloatLiteral);
        assert_eq!(t.read_float(), 1.0);
        assert_eq!(t.pos(), 2);
        assert_eq!(t.next(), Token::Semicolon);
    });
}

#[test]
fn float_separator_rules() {
    let (value, diagnostics) = float("0_1.5");
    assert_eq!(value, 1.5);
    assert_eq!(diagnostics, vec![(6188, 1, 1)]);

    let (value, diagnostics) = float("1.0_5");
    assert_eq!(value, 1.05);
    assert!(diagnostics.is_empty());

    let (_, diagnostics) = float("1._5");
    assert_eq!(diagnostics, vec![(6188, 2, 2)]);
}
