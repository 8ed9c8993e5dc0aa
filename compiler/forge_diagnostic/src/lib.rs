//! Diagnostic system for the registry generator.
//!
//! Every compile-time failure becomes a [`Diagnostic`]:
//! - Error codes for searchability (`forgec explain F1003`)
//! - A message stating what went wrong
//! - A primary label at the offending declaration
//! - Secondary labels, notes, and help text where they add context
//!
//! # Error Guarantees
//!
//! The `ErrorGuaranteed` type provides type-level proof that at least one
//! error was emitted. It can only be obtained from a [`DiagnosticQueue`].
//!
//! ```text
//! let guarantee = queue.emit_error(diagnostic);
//! fn run_pass(..) -> Result<PassSummary, ErrorGuaranteed> { ... }
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCode, ParseErrorCodeError};
pub use errors::ErrorDocs;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
