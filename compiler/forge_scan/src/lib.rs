//! Forge Scan - run the registry over a Rust crate.
//!
//! This is the host side of the registry: it reads a crate's module tree
//! with `syn`, turns every `#[factory(id = "...", ty = Path)]` item into a
//! tagged declaration, runs one registry pass, and writes each generated
//! dispatcher to its own file. Files are laid out by the capability type's
//! module, so the dispatcher for `crate::store::Meal` is
//! `crate/store/meal_factory.rs` under the output directory.
//!
//! Typical use is from a build script:
//!
//! ```text
//! // build.rs
//! fn main() -> Result<(), forge_scan::ScanError> {
//!     forge_scan::Builder::new().run()?;
//!     Ok(())
//! }
//!
//! // src/store/mod.rs
//! include!(concat!(env!("OUT_DIR"), "/crate/store/meal_factory.rs"));
//! ```
//!
//! # What counts as what
//!
//! - structs and enums are types; uninhabited enums are abstract
//! - `impl Trait for T` makes `Trait` a direct interface of `T`
//! - `impl Deref for T { type Target = U; }` makes `U` the parent of `T`
//! - an inherent `fn new(..)` without receiver is a constructor
//! - `#[cfg(test)]` modules are skipped

pub mod attr;
mod builder;
mod collect;
mod emit;
mod error;
mod paths;
mod walk;

pub use builder::{Builder, ScanReport};
pub use emit::FileEmitter;
pub use error::ScanError;
