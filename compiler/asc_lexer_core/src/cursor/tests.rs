use super::*;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.end(), 3);
}

#[test]
fn advance_n_stops_at_end() {
    let mut cursor = Cursor::new("abcdef");
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    cursor.advance_n(100);
    assert_eq!(cursor.pos(), 6);
    assert!(cursor.is_eof());
}

#[test]
fn peek_past_end_returns_zero() {
    let cursor = Cursor::new("a");
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

#[test]
fn interior_nul_is_not_eof() {
    let cursor = Cursor::new("\0x");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn copy_snapshots_position() {
    let mut cursor = Cursor::new("abc");
    let saved = cursor;
    cursor.advance_n(2);
    assert_eq!(saved.pos(), 0);
    assert_eq!(cursor.pos(), 2);
    cursor = saved;
    assert_eq!(cursor.current(), b'a');
}

// === Characters ===

#[test]
fn advance_char_skips_whole_code_point() {
    let mut cursor = Cursor::new("λx");
    assert_eq!(cursor.current_char(), Some('λ'));
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current_char(), Some('x'));
}

#[test]
fn char_at_inside_code_point_is_none() {
    let cursor = Cursor::new("λ");
    assert_eq!(cursor.char_at(1), None);
    assert_eq!(cursor.char_at(2), None);
}

#[test]
fn eat_only_matching_byte() {
    let mut cursor = Cursor::new("=>");
    assert!(!cursor.eat(b'>'));
    assert!(cursor.eat(b'='));
    assert!(cursor.eat(b'>'));
    assert!(!cursor.eat(b'>'));
}

#[test]
fn identifier_rest_includes_unicode() {
    let mut cursor = Cursor::new("fooλ1$ + 2");
    cursor.eat_identifier_rest();
    assert_eq!(cursor.slice_from(0), "fooλ1$");
}

#[test]
fn eat_while_digits() {
    let mut cursor = Cursor::new("1234abc");
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.slice_from(0), "1234");
}

#[test]
fn slice_off_boundary_is_empty() {
    let cursor = Cursor::new("λ");
    assert_eq!(cursor.slice(0, 1), "");
    assert_eq!(cursor.slice(0, 2), "λ");
}

// === Comments ===

#[test]
fn newline_scan_stops_at_line_feed() {
    let mut cursor = Cursor::new("// hi\nnext");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn newline_scan_without_line_feed_reaches_end() {
    let mut cursor = Cursor::new("// trailing");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn block_comment_end_is_consumed() {
    let mut cursor = Cursor::new("/* a * b */x");
    cursor.advance_n(2);
    assert!(cursor.eat_block_comment_rest());
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn unterminated_block_comment_runs_to_end() {
    let mut cursor = Cursor::new("/* open *");
    cursor.advance_n(2);
    assert!(!cursor.eat_block_comment_rest());
    assert!(cursor.is_eof());
}

// === Preamble ===

#[test]
fn preamble_skips_bom() {
    let mut cursor = Cursor::new("\u{feff}let");
    cursor.skip_preamble();
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'l');
}

#[test]
fn preamble_skips_shebang_up_to_line_feed() {
    let mut cursor = Cursor::new("\u{feff}#!/usr/bin/env node\nlet");
    cursor.skip_preamble();
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn preamble_leaves_plain_text() {
    let mut cursor = Cursor::new("# not a shebang");
    cursor.skip_preamble();
    assert_eq!(cursor.pos(), 0);
}

// === Line Breaks ===

#[test]
fn line_break_detection() {
    assert!(has_line_break("a\nb", 0, 3));
    assert!(has_line_break("a\rb", 0, 3));
    assert!(has_line_break("a\u{2028}b", 0, 5));
    assert!(has_line_break("a\u{2029}b", 0, 5));
    assert!(!has_line_break("a b", 0, 3));
    assert!(!has_line_break("a\nb", 2, 3));
    // U+2026 shares the E2 80 lead bytes.
    assert!(!has_line_break("a\u{2026}b", 0, 5));
}

#[test]
fn line_break_detection_clamps_range() {
    assert!(!has_line_break("ab", 5, 1));
    assert!(has_line_break("a\n", 0, 99));
}

mod proptest_scans {
    use super::super::*;
    use proptest::prelude::*;

    fn naive_has_line_break(text: &str) -> bool {
        text.chars()
            .any(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
    }

    proptest! {
        #[test]
        fn line_break_matches_char_scan(text in "[a \\n\\r\u{2026}\u{2028}\u{2029}é]{0,64}") {
            let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
            prop_assert_eq!(has_line_break(&text, 0, len), naive_has_line_break(&text));
        }

        #[test]
        fn newline_scan_matches_find(text in "[a-z \\n]{0,64}") {
            let mut cursor = Cursor::new(&text);
            cursor.eat_until_newline_or_eof();
            let expected = text.find('\n').unwrap_or(text.len());
            prop_assert_eq!(cursor.pos() as usize, expected);
        }
    }
}
