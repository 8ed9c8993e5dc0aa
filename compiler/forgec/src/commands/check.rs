//! The `check` command: scan and validate without writing anything.

use crate::cli::ScanArgs;

use super::report_diagnostics;

/// Scan the crate rooted at `args.root` and report its diagnostics.
///
/// Returns 0 when no error was reported, 1 otherwise.
pub fn check_crate(args: &ScanArgs) -> i32 {
    let report = match args.builder().check() {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };
    report_diagnostics(&report, args.format, args.color);

    if report.has_errors() {
        return 1;
    }
    tracing::debug!(
        files = report.files.len(),
        dispatchers = report.artifacts.len(),
        "check passed"
    );
    0
}
