use super::*;
use asc_ir::{SourceKind, SourceMap};
use pretty_assertions::assert_eq;

fn two_sources() -> (SourceId, SourceId) {
    let mut sources = SourceMap::new();
    let a = sources.add(SourceKind::User, "a.ts", "let a = 1;");
    let b = sources.add(SourceKind::User, "b.ts", "let b = 2;");
    (a, b)
}

#[test]
fn same_diagnostic_twice_is_recorded_once() {
    let (a, _) = two_sources();
    let range = Range::new(a, 4, 5);
    let mut emitter = DiagnosticEmitter::new();
    emitter.error(DiagnosticCode::InvalidCharacter, range, &[]);
    emitter.error(DiagnosticCode::InvalidCharacter, range, &[]);
    assert_eq!(emitter.len(), 1);
}

#[test]
fn different_message_at_same_range_is_kept() {
    let (a, _) = two_sources();
    let range = Range::new(a, 4, 5);
    let mut emitter = DiagnosticEmitter::new();
    emitter.error(DiagnosticCode::Expected, range, &[";"]);
    emitter.error(DiagnosticCode::Expected, range, &[")"]);
    assert_eq!(emitter.len(), 2);
}

#[test]
fn duplicate_with_other_category_is_dropped() {
    let (a, _) = two_sources();
    let range = Range::new(a, 0, 3);
    let mut emitter = DiagnosticEmitter::new();
    emitter.warning(DiagnosticCode::UnexpectedToken, range, &[]);
    emitter.error(DiagnosticCode::UnexpectedToken, range, &[]);
    assert_eq!(emitter.len(), 1);
    assert_eq!(emitter.warning_count(), 1);
    assert!(!emitter.has_errors());
}

#[test]
fn same_start_different_end_is_kept() {
    let (a, _) = two_sources();
    let mut emitter = DiagnosticEmitter::new();
    emitter.error(DiagnosticCode::InvalidCharacter, Range::new(a, 4, 5), &[]);
    emitter.error(DiagnosticCode::InvalidCharacter, Range::new(a, 4, 6), &[]);
    assert_eq!(emitter.len(), 2);
}

#[test]
fn same_offsets_in_other_source_are_kept() {
    let (a, b) = two_sources();
    let mut emitter = DiagnosticEmitter::new();
    emitter.error(DiagnosticCode::InvalidCharacter, Range::new(a, 4, 5), &[]);
    emitter.error(DiagnosticCode::InvalidCharacter, Range::new(b, 4, 5), &[]);
    assert_eq!(emitter.len(), 2);
}

#[test]
fn related_range_participates_in_dedup() {
    let (a, _) = two_sources();
    let range = Range::new(a, 0, 3);
    let mut emitter = DiagnosticEmitter::new();
    emitter.error_related(DiagnosticCode::UnexpectedToken, range, Range::new(a, 4, 5), &[]);
    emitter.error_related(DiagnosticCode::UnexpectedToken, range, Range::new(a, 6, 7), &[]);
    emitter.error_related(DiagnosticCode::UnexpectedToken, range, Range::new(a, 6, 7), &[]);
    assert_eq!(emitter.len(), 2);
    assert_eq!(
        emitter.diagnostics()[1].related_range,
        Some(Range::new(a, 6, 7))
    );
}

#[test]
fn messages_without_range_are_never_deduplicated() {
    let mut emitter = DiagnosticEmitter::new();
    emitter.info(DiagnosticCode::NotImplemented, None, &["x"]);
    emitter.info(DiagnosticCode::NotImplemented, None, &["x"]);
    assert_eq!(emitter.len(), 2);
}

#[test]
fn wrappers_set_category() {
    let (a, _) = two_sources();
    let mut emitter = DiagnosticEmitter::new();
    emitter.pedantic(DiagnosticCode::UnexpectedToken, Range::new(a, 0, 1), &[]);
    emitter.info(DiagnosticCode::UnexpectedToken, Range::new(a, 1, 2), &[]);
    emitter.warning(DiagnosticCode::UnexpectedToken, Range::new(a, 2, 3), &[]);
    emitter.error(DiagnosticCode::UnexpectedToken, Range::new(a, 3, 4), &[]);
    emitter.pedantic_related(
        DiagnosticCode::UnexpectedToken,
        Range::new(a, 5, 6),
        Range::new(a, 0, 1),
        &[],
    );
    emitter.info_related(
        DiagnosticCode::UnexpectedToken,
        Range::new(a, 6, 7),
        Range::new(a, 0, 1),
        &[],
    );
    emitter.warning_related(
        DiagnosticCode::UnexpectedToken,
        Range::new(a, 7, 8),
        Range::new(a, 0, 1),
        &[],
    );
    let categories: Vec<_> = emitter.diagnostics().iter().map(|d| d.category).collect();
    assert_eq!(
        categories,
        vec![
            DiagnosticCategory::Pedantic,
            DiagnosticCategory::Info,
            DiagnosticCategory::Warning,
            DiagnosticCategory::Error,
            DiagnosticCategory::Pedantic,
            DiagnosticCategory::Info,
            DiagnosticCategory::Warning,
        ]
    );
    assert_eq!(emitter.error_count(), 1);
    assert_eq!(emitter.warning_count(), 2);
}

#[test]
fn into_diagnostics_preserves_order() {
    let (a, _) = two_sources();
    let mut emitter = DiagnosticEmitter::new();
    emitter.error(DiagnosticCode::DigitExpected, Range::new(a, 9, 9), &[]);
    emitter.error(DiagnosticCode::InvalidCharacter, Range::new(a, 1, 2), &[]);
    let codes: Vec<_> = emitter.into_diagnostics().into_iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![DiagnosticCode::DigitExpected, DiagnosticCode::InvalidCharacter]
    );
}
