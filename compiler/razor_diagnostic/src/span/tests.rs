use super::*;
use pretty_assertions::assert_eq;

#[test]
fn span_end_index_and_contains() {
    let span = SourceSpan::new(10, 1, 4, 5);
    assert_eq!(span.end_index(), 15);
    assert!(span.contains(10));
    assert!(span.contains(14));
    assert!(!span.contains(15));
    assert!(!span.contains(9));
}

#[test]
fn empty_span_contains_nothing() {
    let span = SourceSpan::new(3, 0, 3, 0);
    assert!(span.is_empty());
    assert!(!span.contains(3));
}

#[test]
fn span_display_is_one_based() {
    let span = SourceSpan::new(12, 2, 4, 3).with_file_path("Views/Home.cshtml");
    assert_eq!(span.to_string(), "Views/Home.cshtml(3,5)");
}

#[test]
fn span_display_without_file() {
    let span = SourceSpan::new(0, 0, 0, 1);
    assert_eq!(span.to_string(), "(1,1)");
}

#[test]
fn span_from_location_round_trips_start() {
    let location = SourceLocation::new(7, 1, 2).with_file_path("a.cshtml");
    let span = SourceSpan::from_location(&location, 4);
    assert_eq!(span.start(), location);
    assert_eq!(span.length, 4);
    assert_eq!(span.file_path_or_empty(), "a.cshtml");
}
