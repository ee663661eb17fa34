use super::*;
use asc_ir::SourceKind;
use pretty_assertions::assert_eq;

#[test]
fn create_fills_placeholders_once() {
    let msg = DiagnosticMessage::create(
        DiagnosticCode::LiteralDoesNotFitInt64,
        DiagnosticCategory::Error,
        &["0xFFFFFFFFFFFFFFFFF"],
    );
    assert_eq!(
        msg.message,
        "Literal '0xFFFFFFFFFFFFFFFFF' does not fit into 'i64' or 'u64' types."
    );
    assert_eq!(msg.range, None);
}

#[test]
fn create_without_args_keeps_placeholder() {
    let msg = DiagnosticMessage::create(DiagnosticCode::Expected, DiagnosticCategory::Error, &[]);
    assert_eq!(msg.message, "'{0}' expected.");
}

#[test]
fn extra_args_are_ignored() {
    let msg = DiagnosticMessage::create(
        DiagnosticCode::Expected,
        DiagnosticCategory::Error,
        &[")", "unused", "unused", "unused"],
    );
    assert_eq!(msg.message, "')' expected.");
}

#[test]
fn duplicate_ignores_category() {
    let mut sources = SourceMap::new();
    let id = sources.add(SourceKind::User, "a.ts", "let x");
    let range = Range::new(id, 0, 3);
    let error = DiagnosticMessage::create(
        DiagnosticCode::InvalidCharacter,
        DiagnosticCategory::Error,
        &[],
    )
    .with_range(range);
    let mut warning = error.clone();
    warning.category = DiagnosticCategory::Warning;
    assert!(error.is_duplicate_of(&warning));
    assert_ne!(error, warning);

    let related = error.clone().with_related_range(range.at_end());
    assert!(!error.is_duplicate_of(&related));
}

#[test]
fn plain_display() {
    let msg = DiagnosticMessage::create(
        DiagnosticCode::UnexpectedToken,
        DiagnosticCategory::Warning,
        &[],
    );
    assert_eq!(msg.to_string(), "WARNING 1012: Unexpected token.");
}

#[test]
fn located_display() {
    let mut sources = SourceMap::new();
    let id = sources.add(SourceKind::User, "src/main.ts", "let a = 1;\nlet b = @;\n");
    let msg = DiagnosticMessage::create(
        DiagnosticCode::InvalidCharacter,
        DiagnosticCategory::Error,
        &[],
    )
    .with_range(Range::new(id, 19, 20));
    assert_eq!(
        msg.display(&sources).to_string(),
        "ERROR 1127: \"Invalid character.\" in src/main.ts(2,9+1)"
    );
}

#[test]
fn located_display_without_range_is_plain() {
    let sources = SourceMap::new();
    let msg = DiagnosticMessage::create(
        DiagnosticCode::NotImplemented,
        DiagnosticCategory::Info,
        &["decorators"],
    );
    assert_eq!(
        msg.display(&sources).to_string(),
        "INFO 100: Not implemented: decorators"
    );
}
