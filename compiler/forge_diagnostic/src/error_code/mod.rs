//! Error codes for all registry diagnostics.
//!
//! Each error code is a unique identifier (e.g., `F1001`) with the first digit
//! indicating the stage that reported it. Used for `forgec explain` lookups
//! and documentation.

use std::fmt;
use std::str::FromStr;

/// Error codes for all registry diagnostics.
///
/// Format: F#### where first digit indicates stage:
/// - F0xxx: Tag and type-reference errors
/// - F1xxx: Structural validation errors
/// - F2xxx: Capability group errors
/// - F3xxx: Host / source scanning errors
/// - F9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Tag Errors (F0xxx)
    /// Tag attached to something that is not a constructible type
    F0001,
    /// Tag id is missing or empty
    F0002,
    /// Capability type cannot be resolved
    F0003,

    // Validation Errors (F1xxx)
    /// Tagged type is not public
    F1001,
    /// Tagged type is abstract
    F1002,
    /// Tagged type does not conform to its capability type
    F1003,
    /// Tagged type has no public zero-argument constructor
    F1004,

    // Group Errors (F2xxx)
    /// Two types share an id within one capability group
    F2001,

    // Host Errors (F3xxx)
    /// Source file could not be read
    F3001,
    /// Source file could not be parsed
    F3002,
    /// Tag attribute is malformed
    F3003,

    // Internal Errors (F9xxx)
    /// Generated artifact could not be emitted
    F9001,
    /// Too many errors
    F9002,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::F0001,
        ErrorCode::F0002,
        ErrorCode::F0003,
        ErrorCode::F1001,
        ErrorCode::F1002,
        ErrorCode::F1003,
        ErrorCode::F1004,
        ErrorCode::F2001,
        ErrorCode::F3001,
        ErrorCode::F3002,
        ErrorCode::F3003,
        ErrorCode::F9001,
        ErrorCode::F9002,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::F0001 => "F0001",
            ErrorCode::F0002 => "F0002",
            ErrorCode::F0003 => "F0003",
            ErrorCode::F1001 => "F1001",
            ErrorCode::F1002 => "F1002",
            ErrorCode::F1003 => "F1003",
            ErrorCode::F1004 => "F1004",
            ErrorCode::F2001 => "F2001",
            ErrorCode::F3001 => "F3001",
            ErrorCode::F3002 => "F3002",
            ErrorCode::F3003 => "F3003",
            ErrorCode::F9001 => "F9001",
            ErrorCode::F9002 => "F9002",
        }
    }

    /// One-line description, as shown in `forgec explain` listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::F0001 => "tag attached to something that is not a type",
            ErrorCode::F0002 => "tag id is missing or empty",
            ErrorCode::F0003 => "capability type cannot be resolved",
            ErrorCode::F1001 => "tagged type is not public",
            ErrorCode::F1002 => "tagged type is abstract",
            ErrorCode::F1003 => "tagged type does not conform to its capability type",
            ErrorCode::F1004 => "tagged type has no public zero-argument constructor",
            ErrorCode::F2001 => "duplicate id within a capability group",
            ErrorCode::F3001 => "source file could not be read",
            ErrorCode::F3002 => "source file could not be parsed",
            ErrorCode::F3003 => "malformed tag attribute",
            ErrorCode::F9001 => "generated artifact could not be emitted",
            ErrorCode::F9002 => "too many errors",
        }
    }

    /// Check if this is a tag error (F0xxx).
    pub fn is_tag_error(&self) -> bool {
        self.as_str().starts_with("F0")
    }

    /// Check if this is a structural validation error (F1xxx).
    pub fn is_validation_error(&self) -> bool {
        self.as_str().starts_with("F1")
    }

    /// Check if this is a capability group error (F2xxx).
    pub fn is_group_error(&self) -> bool {
        self.as_str().starts_with("F2")
    }

    /// Check if this is a host error (F3xxx).
    pub fn is_host_error(&self) -> bool {
        self.as_str().starts_with("F3")
    }

    /// Check if this is an internal error (F9xxx).
    pub fn is_internal_error(&self) -> bool {
        self.as_str().starts_with("F9")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known error code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseErrorCodeError(String);

impl fmt::Display for ParseErrorCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code `{}`", self.0)
    }
}

impl std::error::Error for ParseErrorCodeError {}

impl FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == upper)
            .ok_or_else(|| ParseErrorCodeError(s.to_string()))
    }
}
