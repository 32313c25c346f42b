use super::*;

#[test]
fn test_span_len_and_empty() {
    assert_eq!(Span::new(3, 8).len(), 5);
    assert!(Span::at(4).is_empty());
    assert_eq!(Span::new(8, 3).len(), 0);
}

#[test]
fn test_span_cover_and_contains() {
    let outer = Span::new(0, 10).cover(Span::new(5, 20));
    assert_eq!(outer, Span::new(0, 20));
    assert!(outer.contains_span(Span::new(2, 19)));
    assert!(!Span::new(2, 4).contains_span(Span::new(3, 5)));
}

#[test]
fn test_span_slice_out_of_bounds_is_empty() {
    let text = "class Point {}";
    assert_eq!(Span::new(6, 11).slice(text), "Point");
    assert_eq!(Span::new(6, 100).slice(text), "");
}
