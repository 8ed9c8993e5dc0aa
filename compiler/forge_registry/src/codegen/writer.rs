//! Indentation-aware text buffer for generated source.

/// Spaces per indentation level.
const INDENT_WIDTH: usize = 4;

#[derive(Default)]
pub(super) struct SourceWriter {
    buffer: String,
    depth: usize,
}

impl SourceWriter {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation.
    pub(super) fn line(&mut self, text: &str) {
        for _ in 0..self.depth * INDENT_WIDTH {
            self.buffer.push(' ');
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    pub(super) fn blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Write `header`, then the lines written by `body` one level deeper,
    /// then `footer` at the original level.
    pub(super) fn block(&mut self, header: &str, footer: &str, body: impl FnOnce(&mut Self)) {
        self.line(header);
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.line(footer);
    }

    /// Text written so far, without consuming the writer.
    pub(super) fn as_str(&self) -> &str {
        &self.buffer
    }

    pub(super) fn finish(self) -> String {
        self.buffer
    }
}
