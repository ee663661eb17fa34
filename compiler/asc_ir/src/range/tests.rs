use super::*;
use proptest::prelude::*;

const A: SourceId = SourceId::from_raw(0);
const B: SourceId = SourceId::from_raw(1);

#[test]
fn test_range_basic() {
    let range = Range::new(A, 10, 20);
    assert_eq!(range.len(), 10);
    assert!(!range.is_empty());
    assert!(range.contains(15));
    assert!(!range.contains(20));
    assert_eq!(range.to_std(), 10..20);
}

#[test]
fn test_range_join_covers_both() {
    let a = Range::new(A, 10, 20);
    let b = Range::new(A, 15, 30);
    assert_eq!(a.join(b), Ok(Range::new(A, 10, 30)));
    assert_eq!(b.join(a), Ok(Range::new(A, 10, 30)));
}

#[test]
fn test_range_join_disjoint() {
    let a = Range::new(A, 0, 3);
    let b = Range::new(A, 40, 42);
    assert_eq!(a.join(b), Ok(Range::new(A, 0, 42)));
}

#[test]
fn test_range_join_source_mismatch() {
    let a = Range::new(A, 0, 3);
    let b = Range::new(B, 0, 3);
    assert_eq!(
        a.join(b),
        Err(RangeError::SourceMismatch { left: A, right: B })
    );
    let msg = format!("{}", RangeError::SourceMismatch { left: A, right: B });
    assert!(msg.contains("source mismatch"));
}

#[test]
fn test_range_at_start_and_end() {
    let range = Range::new(A, 4, 9);
    assert_eq!(range.at_start(), Range::new(A, 4, 4));
    assert_eq!(range.at_end(), Range::new(A, 9, 9));
    assert!(range.at_start().is_empty());
}

#[test]
fn test_range_equality_is_structural() {
    assert_eq!(Range::new(A, 1, 2), Range::new(A, 1, 2));
    assert_ne!(Range::new(A, 1, 2), Range::new(B, 1, 2));
    assert_ne!(Range::new(A, 1, 2), Range::new(A, 1, 3));
}

#[test]
fn test_range_try_new() {
    assert_eq!(Range::try_new(A, 2, 5), Ok(Range::new(A, 2, 5)));
    assert_eq!(
        Range::try_new(A, 5, 2),
        Err(RangeError::OutOfBounds { start: 5, end: 2 })
    );
    let large = u32::MAX as usize + 1;
    assert!(matches!(
        Range::try_new(A, 0, large),
        Err(RangeError::OutOfBounds { .. })
    ));
}

#[test]
fn test_range_debug_format() {
    assert_eq!(format!("{:?}", Range::new(B, 3, 7)), "1@3..7");
    assert_eq!(format!("{}", Range::new(B, 3, 7)), "3..7");
}

proptest! {
    #[test]
    fn join_is_min_start_max_end(
        a_start in 0u32..1000, a_len in 0u32..1000,
        b_start in 0u32..1000, b_len in 0u32..1000,
    ) {
        let a = Range::new(A, a_start, a_start + a_len);
        let b = Range::new(A, b_start, b_start + b_len);
        let joined = a.join(b);
        prop_assert!(joined.is_ok());
        if let Ok(joined) = joined {
            prop_assert_eq!(joined.start, a.start.min(b.start));
            prop_assert_eq!(joined.end, a.end.max(b.end));
        }
    }
}
