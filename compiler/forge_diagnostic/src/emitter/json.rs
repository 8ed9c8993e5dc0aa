//! JSON Emitter
//!
//! Machine-readable diagnostic output, one JSON object per line.

use std::io::Write;

use serde::Serialize;

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

#[derive(Serialize)]
struct JsonLabel<'a> {
    file: &'a str,
    line: u32,
    column: u32,
    message: &'a str,
    primary: bool,
}

impl<'a> From<&'a Label> for JsonLabel<'a> {
    fn from(label: &'a Label) -> Self {
        JsonLabel {
            file: &label.location.file,
            line: label.location.line,
            column: label.location.column,
            message: &label.message,
            primary: label.is_primary,
        }
    }
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    code: &'static str,
    severity: String,
    message: &'a str,
    labels: Vec<JsonLabel<'a>>,
    notes: &'a [String],
    suggestions: &'a [String],
}

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<W: Write> {
    writer: W,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter { writer }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let record = JsonDiagnostic {
            code: diagnostic.code.as_str(),
            severity: diagnostic.severity.to_string(),
            message: &diagnostic.message,
            labels: diagnostic.labels.iter().map(JsonLabel::from).collect(),
            notes: &diagnostic.notes,
            suggestions: &diagnostic.suggestions,
        };
        if serde_json::to_writer(&mut self.writer, &record).is_ok() {
            let _ = writeln!(self.writer);
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {
        // Consumers count records themselves
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use forge_ir::Location;

    #[test]
    fn test_one_object_per_line() {
        let mut output = Vec::new();
        let mut emitter = JsonEmitter::new(&mut output);
        emitter.emit_all(&[
            Diagnostic::error(ErrorCode::F1001)
                .with_message("type `crate::A` is not public")
                .with_label(Location::new("src/a.rs", 2, 5), "declared here"),
            Diagnostic::error(ErrorCode::F0002).with_message("missing \"id\""),
        ]);
        emitter.flush();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["code"], "F1001");
        assert_eq!(first["severity"], "error");
        assert_eq!(first["labels"][0]["file"], "src/a.rs");
        assert_eq!(first["labels"][0]["line"], 2);
        assert_eq!(first["labels"][0]["primary"], true);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["message"], "missing \"id\"");
        assert_eq!(second["labels"].as_array().map(Vec::len), Some(0));
    }
}
