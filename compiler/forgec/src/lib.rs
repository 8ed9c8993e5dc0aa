//! Forge command-line driver.
//!
//! `forgec` runs the same scan a build script would, outside of Cargo:
//!
//! - `forgec check src/lib.rs` reports problems with `#[factory]` tags
//! - `forgec generate src/lib.rs --out-dir gen` also writes the dispatchers
//! - `forgec explain F2001` prints the documentation for an error code

pub mod cli;
pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=forge_registry=debug` or `RUST_LOG=forge_scan=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
