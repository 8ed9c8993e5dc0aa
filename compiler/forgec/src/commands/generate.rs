//! The `generate` command: scan, validate, and write dispatchers.

use std::path::Path;

use crate::cli::ScanArgs;

use super::report_diagnostics;

/// Write the dispatchers of the crate rooted at `args.root` to `out_dir`.
///
/// Nothing is written when the scan reports an error. Returns 0 on success,
/// 1 otherwise.
pub fn generate_crate(args: &ScanArgs, out_dir: &Path) -> i32 {
    let report = match args.builder().out_dir(out_dir).generate() {
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
    for path in &report.written {
        println!("wrote {}", path.display());
    }
    0
}
