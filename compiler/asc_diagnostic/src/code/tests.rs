use super::*;

#[test]
fn codes_are_unique_and_sorted() {
    let codes: Vec<u32> = DiagnosticCode::ALL.iter().map(|c| c.code()).collect();
    let mut sorted = codes.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(codes, sorted);
}

#[test]
fn from_code_round_trips_every_entry() {
    for &code in DiagnosticCode::ALL {
        assert_eq!(DiagnosticCode::from_code(code.code()), Some(code));
    }
    assert_eq!(DiagnosticCode::from_code(1), None);
}

#[test]
fn prefix_splits_at_one_thousand() {
    assert_eq!(DiagnosticCode::LiteralDoesNotFitInt64.prefix(), "AS");
    assert!(DiagnosticCode::InvalidRegexpFlags.is_internal());
    assert_eq!(DiagnosticCode::UnterminatedStringLiteral.prefix(), "TS");
    assert!(!DiagnosticCode::ConsecutiveNumericSeparators.is_internal());
}

#[test]
fn templates_end_with_period_unless_formatted() {
    for &code in DiagnosticCode::ALL {
        let template = code.template();
        assert!(
            template.ends_with('.') || template.ends_with("{0}"),
            "{code}: {template}"
        );
    }
}

#[test]
fn display_is_the_number() {
    assert_eq!(DiagnosticCode::InvalidCharacter.to_string(), "1127");
}
