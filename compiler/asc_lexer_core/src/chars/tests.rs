use super::*;

#[test]
fn line_breaks() {
    for c in ['\n', '\r', LINE_SEPARATOR, PARAGRAPH_SEPARATOR] {
        assert!(is_line_break(c), "{c:?}");
    }
    for c in [' ', '\t', 'a', '\u{0085}'] {
        assert!(!is_line_break(c), "{c:?}");
    }
}

#[test]
fn white_space_excludes_line_breaks() {
    for c in [
        ' ', '\t', '\u{000b}', '\u{000c}', '\u{00a0}', '\u{2003}', '\u{3000}', BYTE_ORDER_MARK,
    ] {
        assert!(is_white_space(c), "{c:?}");
    }
    for c in ['\n', '\r', LINE_SEPARATOR, 'x', '\u{200c}'] {
        assert!(!is_white_space(c), "{c:?}");
    }
}

#[test]
fn digits() {
    assert!(is_decimal(b'0') && is_decimal(b'9'));
    assert!(!is_decimal(b'a'));
    assert!(is_octal(b'7'));
    assert!(!is_octal(b'8'));
    assert!(is_hex_base(b'a') && is_hex_base(b'F'));
    assert!(!is_hex_base(b'g'));
    assert!(!is_hex_base(b'0'));
}

#[test]
fn identifier_characters() {
    for c in ['a', 'Z', '$', '_', 'ä', 'λ', '中'] {
        assert!(is_identifier_start(c), "{c:?}");
        assert!(is_identifier_part(c), "{c:?}");
    }
    assert!(!is_identifier_start('1'));
    assert!(is_identifier_part('1'));
    assert!(is_identifier_part('\u{200d}'));
    assert!(!is_identifier_start('\u{200d}'));
    for c in ['-', ' ', '@', '#', '\u{1f600}'] {
        assert!(!is_identifier_start(c), "{c:?}");
        assert!(!is_identifier_part(c), "{c:?}");
    }
}
