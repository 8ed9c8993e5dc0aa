//! Candidate descriptors.

use forge_ir::{DeclKind, Declaration, Location, QualifiedName, Tag};

use crate::resolve::{describe, resolve_type};
use crate::{DeclarationModel, RegistryError};

/// A tagged declaration with its id and resolved capability type.
///
/// Built once per tag and never modified afterwards.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CandidateDescriptor {
    /// The tagged type.
    pub name: QualifiedName,
    pub id: String,
    /// The capability type it is registered under.
    pub target: QualifiedName,
    pub location: Option<Location>,
}

impl CandidateDescriptor {
    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }

    pub fn target_simple_name(&self) -> &str {
        self.target.simple_name()
    }
}

/// Build the descriptor for one tagged declaration.
///
/// Fails when the tag is on something other than a type, when the id is
/// absent or empty, or when the capability type cannot be resolved. The id
/// is checked before the capability type.
pub fn build_descriptor<M: DeclarationModel + ?Sized>(
    model: &M,
    decl: &Declaration,
    tag: &Tag,
) -> Result<CandidateDescriptor, RegistryError> {
    let location = decl.location.clone().or_else(|| tag.location.clone());

    if decl.kind != DeclKind::Class {
        return Err(RegistryError::NotAClass {
            decl: decl.name.clone(),
            kind: decl.kind,
            location,
        });
    }

    let id = match tag.id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            return Err(RegistryError::InvalidTag {
                decl: decl.name.clone(),
                location,
            })
        }
    };

    let Some(target) = resolve_type(model, &tag.target) else {
        return Err(RegistryError::UnresolvedType {
            decl: decl.name.clone(),
            target: describe(&tag.target),
            location,
        });
    };

    Ok(CandidateDescriptor {
        name: decl.name.clone(),
        id,
        target,
        location,
    })
}
