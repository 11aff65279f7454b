use super::*;

#[test]
fn test_span_merge_covers_both() {
    let lower = Span::new(10, 14);
    let upper = Span::new(17, 20);
    assert_eq!(lower.merge(upper), Span::new(10, 20));
    assert_eq!(upper.merge(lower), Span::new(10, 20));
}

#[test]
fn test_span_contains_is_end_exclusive() {
    let span = Span::new(4, 8);
    assert!(span.contains(4));
    assert!(span.contains(7));
    assert!(!span.contains(8));
    assert!(!span.contains(3));
}

#[test]
fn test_span_try_from_range() {
    assert_eq!(Span::try_from_range(3..9), Ok(Span::new(3, 9)));

    let too_far = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(too_far..too_far + 1),
        Err(SpanError::StartTooLarge(too_far))
    );
    assert_eq!(
        Span::try_from_range(0..too_far),
        Err(SpanError::EndTooLarge(too_far))
    );
    let (start, end) = (9, 3);
    assert_eq!(
        Span::try_from_range(start..end),
        Err(SpanError::Inverted { start: 9, end: 3 })
    );
}

#[test]
fn test_span_error_display() {
    let msg = SpanError::Inverted { start: 9, end: 3 }.to_string();
    assert_eq!(msg, "span end 3 precedes span start 9");
    assert!(SpanError::StartTooLarge(0x1_0000_0000)
        .to_string()
        .contains("0x100000000"));
}

#[test]
fn test_span_dummy() {
    assert!(Span::DUMMY.is_dummy());
    assert!(Span::DUMMY.is_empty());
    assert_eq!(Span::default(), Span::DUMMY);
    assert!(!Span::new(0, 1).is_dummy());
}

#[test]
fn test_span_debug_display() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100..200");
    assert_eq!(span.to_range(), 100..200);
    assert_eq!(span.len(), 100);
}

#[test]
fn test_span_len_of_inverted_span_is_zero() {
    let inverted = Span::new(9, 3);
    assert_eq!(inverted.len(), 0);
    assert!(inverted.is_empty());
    assert_eq!(Span::new(3, 9).len(), 6);
    assert!(!Span::new(3, 9).is_empty());
}
