//! Command handlers for the forge CLI.
//!
//! Each submodule implements one subcommand. Diagnostic rendering is shared
//! and lives here.

use std::io::{self, IsTerminal, Write};

use forge_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use forge_diagnostic::{Diagnostic, Severity};
use forge_scan::ScanReport;

use crate::cli::OutputFormat;

mod check;
mod explain;
mod generate;

pub use check::check_crate;
pub use explain::explain_error;
pub use generate::generate_crate;

/// Render every diagnostic of `report` to stderr.
pub(crate) fn report_diagnostics(report: &ScanReport, format: OutputFormat, color: ColorMode) {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    render(&report.diagnostics, format, color, is_tty, stderr.lock());
}

/// Render `diagnostics` to `writer`, with a summary line for humans.
pub(crate) fn render<W: Write>(
    diagnostics: &[Diagnostic],
    format: OutputFormat,
    color: ColorMode,
    is_tty: bool,
    writer: W,
) {
    match format {
        OutputFormat::Human => emit(
            TerminalEmitter::with_color_mode(writer, color, is_tty),
            diagnostics,
        ),
        OutputFormat::Json => emit(JsonEmitter::new(writer), diagnostics),
    }
}

fn emit(mut emitter: impl DiagnosticEmitter, diagnostics: &[Diagnostic]) {
    emitter.emit_all(diagnostics);
    let count = |severity| diagnostics.iter().filter(|d| d.severity == severity).count();
    emitter.emit_summary(count(Severity::Error), count(Severity::Warning));
    emitter.flush();
}
