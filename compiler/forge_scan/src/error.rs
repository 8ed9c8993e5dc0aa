//! Errors of the scanning host.
//!
//! Problems with the scanned code itself are diagnostics, not errors; these
//! cover configuration and the final verdict.

use std::io;
use std::path::PathBuf;

use forge_ir::PathError;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A default path needs an environment variable Cargo sets for build
    /// scripts.
    #[error("environment variable `{0}` is not set; are you running from a build script?")]
    MissingEnv(&'static str),

    #[error("invalid external type `{path}`: {source}")]
    InvalidExtern { path: String, source: PathError },

    #[error("failed to create output directory `{}`: {source}", path.display())]
    OutDir { path: PathBuf, source: io::Error },

    /// Diagnostics were reported. They have already been printed.
    #[error("dispatcher generation failed with {errors} error(s)")]
    Failed { errors: usize },
}
