//! Forge IR - declaration model
//!
//! This crate contains the data the registry generator reasons about:
//! - Qualified names for types (`crate::store::Meal`)
//! - Source locations for diagnostics
//! - Declarations (visibility, abstractness, supertypes, constructors)
//! - Tags attaching a `(capability type, id)` pair to a declaration
//!
//! Hosts build these values fresh for every pass. Nothing here performs
//! resolution or validation; that lives in `forge_registry`.
//!
//! # Design Philosophy
//!
//! - **Plain values**: every type is `Clone + Eq + Hash + Debug`
//! - **Canonical names**: a `QualifiedName` is validated once at construction
//! - **Deferred types are opaque**: a `TypeRef::Deferred` handle only means
//!   something to the model that issued it

mod decl;
mod location;
mod path;
mod tag;

pub use decl::{Constructor, DeclKind, Declaration, TypeKind, Visibility};
pub use location::Location;
pub use path::{PathError, QualifiedName};
pub use tag::{SymbolId, Tag, TypeRef};
