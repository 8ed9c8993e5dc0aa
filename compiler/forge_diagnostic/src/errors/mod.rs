//! Embedded error documentation for `forgec explain`.
//!
//! Each error code has a markdown file in this directory that explains the
//! error, shows an example, and suggests a fix. The files are embedded at
//! compile time and served through [`ErrorDocs::get`].
//!
//! # Adding New Documentation
//!
//! 1. Create `FXXXX.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    ///
    /// Returns `Some(markdown)` if documentation exists for the code,
    /// `None` otherwise.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Tag errors (F0xxx)
    (ErrorCode::F0001, include_str!("F0001.md")),
    (ErrorCode::F0002, include_str!("F0002.md")),
    (ErrorCode::F0003, include_str!("F0003.md")),
    // Validation errors (F1xxx)
    (ErrorCode::F1001, include_str!("F1001.md")),
    (ErrorCode::F1002, include_str!("F1002.md")),
    (ErrorCode::F1003, include_str!("F1003.md")),
    (ErrorCode::F1004, include_str!("F1004.md")),
    // Group errors (F2xxx)
    (ErrorCode::F2001, include_str!("F2001.md")),
    // Host errors (F3xxx)
    (ErrorCode::F3001, include_str!("F3001.md")),
    (ErrorCode::F3002, include_str!("F3002.md")),
    (ErrorCode::F3003, include_str!("F3003.md")),
    // Internal errors (F9xxx)
    (ErrorCode::F9001, include_str!("F9001.md")),
    (ErrorCode::F9002, include_str!("F9002.md")),
];
