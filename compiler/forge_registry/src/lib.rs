//! Forge Registry - the capability registry core.
//!
//! One pass over the tagged declarations of a crate:
//!
//! 1. **Resolve** each tag's capability type ([`resolve`])
//! 2. **Describe** the candidate ([`build_descriptor`])
//! 3. **Validate** it against four ordered checks ([`validate`])
//! 4. **Group** accepted candidates by capability type ([`CapabilityGroups`])
//! 5. **Generate** one dispatcher per group ([`generate`])
//!
//! [`run_pass`] drives all of it. State lives in a [`PassContext`] that is
//! built for one pass and consumed when the pass finishes; nothing carries
//! over to the next invocation.
//!
//! Hosts plug in through two seams: a [`DeclarationModel`] that answers type
//! questions, and a [`SourceEmitter`] that persists generated artifacts.

mod codegen;
mod descriptor;
mod error;
mod group;
mod model;
mod pass;
pub mod resolve;
mod sink;
mod validate;

pub use codegen::{generate, DispatchArtifact};
pub use descriptor::{build_descriptor, CandidateDescriptor};
pub use error::RegistryError;
pub use group::{CapabilityGroup, CapabilityGroups};
pub use model::{DeclTable, DeclarationModel, TaggedDecl};
pub use pass::{run_pass, PassContext, PassOutcome};
pub use sink::{MemoryEmitter, SourceEmitter};
pub use validate::validate;

/// Appended to a capability type's simple name to name its dispatcher.
pub const DISPATCHER_SUFFIX: &str = "Factory";

/// Path of the runtime support crate, as written in generated code.
pub const RUNTIME_CRATE: &str = "::forge_rt";
