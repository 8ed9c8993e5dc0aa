use super::*;
use forge_ir::Location;
use pretty_assertions::assert_eq;

fn diag_at(message: &str, line: u32) -> Diagnostic {
    Diagnostic::error(ErrorCode::F1001)
        .with_message(message)
        .with_label(Location::new("src/lib.rs", line, 1), "here")
}

#[test]
fn test_flush_sorts_by_location() {
    let mut queue = DiagnosticQueue::new();
    queue.add(diag_at("third", 30));
    queue.add(diag_at("first", 10));
    queue.add(Diagnostic::error(ErrorCode::F0003).with_message("no location"));
    queue.add(diag_at("second", 20));

    let messages: Vec<_> = queue.flush().into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["first", "second", "third", "no location"]);
}

#[test]
fn test_flush_resets_counts() {
    let mut queue = DiagnosticQueue::new();
    queue.add(diag_at("a", 1));
    assert_eq!(queue.error_count(), 1);
    assert!(queue.has_errors().is_some());

    let _ = queue.flush();
    assert_eq!(queue.error_count(), 0);
    assert!(queue.has_errors().is_none());
    assert_eq!(queue.peek().count(), 0);
}

#[test]
fn test_deduplicates_identical_diagnostics() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(diag_at("same", 5)));
    assert!(!queue.add(diag_at("same", 5)));
    assert!(queue.add(diag_at("same", 6)));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_unlimited_config_keeps_duplicates() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    assert!(queue.add(diag_at("same", 5)));
    assert!(queue.add(diag_at("same", 5)));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_error_limit_appends_summary() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: true,
    });
    assert!(queue.add(diag_at("a", 1)));
    assert!(queue.add(diag_at("b", 2)));
    assert!(queue.limit_reached());
    assert!(!queue.add(diag_at("c", 3)));

    let flushed = queue.flush();
    assert_eq!(flushed.len(), 3);
    assert_eq!(flushed[2].code, ErrorCode::F9002);
    assert_eq!(flushed[2].message, "aborting due to 2 previous errors");
}

#[test]
fn test_warnings_do_not_count_as_errors() {
    let mut queue = DiagnosticQueue::new();
    queue.add(Diagnostic::warning(ErrorCode::F3003).with_message("odd attribute"));
    assert_eq!(queue.warning_count(), 1);
    assert!(queue.has_errors().is_none());
}

#[test]
fn test_emit_error_returns_guarantee() {
    let mut queue = DiagnosticQueue::new();
    let _guarantee: ErrorGuaranteed = queue.emit_error(diag_at("boom", 1));
    assert_eq!(queue.error_count(), 1);
}
