//! Source locations attached to declarations and diagnostics.

use std::fmt;

/// A position in a source file.
///
/// Lines and columns are 1-based. Ordering is by file, then line, then
/// column, which is the order diagnostics are reported in.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Location {
    /// Path of the file, as the host wants it displayed.
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Location {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
