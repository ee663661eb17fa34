use super::*;
use std::fmt::Write as _;
use crate::{DiagnosticCategory, DiagnosticCode};
use asc_ir::{SourceId, SourceKind};
use pretty_assertions::assert_eq;

fn sample() -> (SourceMap, SourceId) {
    let mut sources = SourceMap::new();
    let id = sources.add(SourceKind::User, "src/main.ts", "let a = 1;\nlet b = @;\n");
    (sources, id)
}

fn invalid_char(id: SourceId) -> DiagnosticMessage {
    DiagnosticMessage::create(DiagnosticCode::InvalidCharacter, DiagnosticCategory::Error, &[])
        .with_range(Range::new(id, 19, 20))
}

// === Header ===

#[test]
fn header_without_range() {
    let sources = SourceMap::new();
    let msg = DiagnosticMessage::create(
        DiagnosticCode::LiteralDoesNotFitInt64,
        DiagnosticCategory::Error,
        &["99999999999999999999"],
    );
    assert_eq!(
        format_message(&msg, &sources, FormatOptions::PLAIN),
        "ERROR AS236: Literal '99999999999999999999' does not fit into 'i64' or 'u64' types."
    );
}

#[test]
fn colored_header() {
    let sources = SourceMap::new();
    let msg = DiagnosticMessage::create(
        DiagnosticCode::UnexpectedToken,
        DiagnosticCategory::Warning,
        &[],
    );
    let text = format_message(&msg, &sources, FormatOptions::default().with_colors(true));
    assert_eq!(text, "\x1b[93mWARNING\x1b[0m TS1012: Unexpected token.");
}

// === Locator ===

#[test]
fn one_line_locator() {
    let (sources, id) = sample();
    assert_eq!(
        format_message(&invalid_char(id), &sources, FormatOptions::PLAIN),
        "ERROR TS1127: Invalid character.\n in src/main.ts(2,9)"
    );
}

#[test]
fn related_locator_follows() {
    let (sources, id) = sample();
    let msg = invalid_char(id).with_related_range(Range::new(id, 4, 5));
    assert_eq!(
        format_message(&msg, &sources, FormatOptions::PLAIN),
        "ERROR TS1127: Invalid character.\n in src/main.ts(2,9)\n in src/main.ts(1,5)"
    );
}

// === Context ===

#[test]
fn context_excerpt() {
    let (sources, id) = sample();
    let text = format_message(
        &invalid_char(id),
        &sources,
        FormatOptions::default().with_context(true),
    );
    assert_eq!(
        text,
        concat!(
            "ERROR TS1127: Invalid character.\n",
            "   :\n",
            " 2 │ let b = @;\n",
            "   │         ~\n",
            "   └─ in src/main.ts(2,9)",
        )
    );
}

#[test]
fn zero_width_range_gets_caret() {
    let (sources, id) = sample();
    let text = format_context(Range::new(id, 4, 4), &sources[id], None, false);
    assert_eq!(text, "   :\n 1 │ let a = 1;\n   │     ^\n   └─ in src/main.ts");
}

#[test]
fn underline_stops_at_line_break() {
    let (sources, id) = sample();
    let text = format_context(Range::new(id, 8, 14), &sources[id], None, false);
    assert_eq!(text, "   :\n 1 │ let a = 1;\n   │         ~~~\n   └─ in src/main.ts");
}

#[test]
fn underline_starting_on_line_break_is_caret() {
    let (sources, id) = sample();
    let text = format_context(Range::new(id, 10, 12), &sources[id], None, false);
    assert!(text.contains("│           ^\n"), "{text}");
}

#[test]
fn tabs_are_two_columns_wide() {
    let mut sources = SourceMap::new();
    let id = sources.add(SourceKind::User, "t.ts", "x\t=\ty;");
    let text = format_context(Range::new(id, 1, 2), &sources[id], None, false);
    assert_eq!(text, "   :\n 1 │ x  =  y;\n   │  ~~\n   └─ in t.ts");
}

#[test]
fn leading_white_space_is_trimmed() {
    let mut sources = SourceMap::new();
    let id = sources.add(SourceKind::User, "w.ts", "  foo();");
    let text = format_context(Range::new(id, 2, 5), &sources[id], None, false);
    assert_eq!(text, "   :\n 1 │ foo();\n   │ ~~~\n   └─ in w.ts");
}

#[test]
fn gutter_widens_for_related_line() {
    let mut text = String::new();
    for i in 0..12 {
        let _ = writeln!(text, "line{i}");
    }
    let mut sources = SourceMap::new();
    let id = sources.add(SourceKind::User, "g.ts", text);
    let excerpt = format_context(Range::new(id, 0, 1), &sources[id], Some(12), false);
    assert_eq!(excerpt, "    :\n  1 │ line0\n    │ ~\n    └─ in g.ts");
}

#[test]
fn colored_underline() {
    let (sources, id) = sample();
    let text = format_context(Range::new(id, 19, 20), &sources[id], None, true);
    assert!(text.contains("\x1b[91m~\x1b[0m"), "{text}");
}

#[test]
fn unknown_source_is_skipped() {
    let sources = SourceMap::new();
    let msg = DiagnosticMessage::create(
        DiagnosticCode::InvalidCharacter,
        DiagnosticCategory::Error,
        &[],
    )
    .with_range(Range::new(SourceId::from_raw(7), 0, 1));
    assert_eq!(
        format_message(&msg, &sources, FormatOptions::PLAIN),
        "ERROR TS1127: Invalid character."
    );
}
