use super::*;
use pretty_assertions::assert_eq;

fn loc(line: u32) -> Location {
    Location::new("src/store.rs", line, 1)
}

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::F1001)
        .with_message("type `crate::store::Hidden` is not public")
        .with_label(loc(3), "declared here")
        .with_note("dispatchers are generated outside the declaring module")
        .with_suggestion("mark the type `pub`");

    assert_eq!(diag.code, ErrorCode::F1001);
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 1);
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_primary_location_skips_secondary_labels() {
    let diag = Diagnostic::error(ErrorCode::F2001)
        .with_secondary_label(loc(1), "first used here")
        .with_label(loc(9), "duplicate");
    assert_eq!(diag.primary_location(), Some(&loc(9)));
}

#[test]
fn test_label_at_without_location_is_dropped() {
    let diag = Diagnostic::error(ErrorCode::F1002).with_label_at(None, "here");
    assert!(diag.labels.is_empty());
    assert_eq!(diag.primary_location(), None);

    let diag = Diagnostic::error(ErrorCode::F1002).with_label_at(Some(&loc(4)), "here");
    assert_eq!(diag.primary_location(), Some(&loc(4)));
}

#[test]
fn test_display_header() {
    let diag = Diagnostic::warning(ErrorCode::F9002).with_message("stop");
    assert_eq!(diag.to_string(), "warning[F9002]: stop");
}
