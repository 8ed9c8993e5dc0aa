//! Structural validation of candidates.
//!
//! Four checks run in a fixed order and stop at the first failure, so a
//! declaration produces at most one diagnostic per pass:
//!
//! 1. Visibility: the type must be `pub`
//! 2. Concreteness: the type must not be abstract
//! 3. Conformance: the type must implement (trait) or inherit from (type)
//!    its capability
//! 4. Constructibility: the type must have a public zero-argument constructor

use forge_ir::{Declaration, TypeKind};

use crate::resolve::capability_kind;
use crate::{CandidateDescriptor, DeclarationModel, RegistryError};

/// Validate a candidate, returning the kind of its capability type.
#[tracing::instrument(level = "trace", skip_all, fields(decl = %descriptor.name))]
pub fn validate<M: DeclarationModel + ?Sized>(
    model: &M,
    decl: &Declaration,
    descriptor: &CandidateDescriptor,
) -> Result<TypeKind, RegistryError> {
    check_visibility(decl, descriptor)?;
    check_concrete(decl, descriptor)?;
    let kind = check_conformance(model, decl, descriptor)?;
    check_constructor(decl, descriptor)?;
    Ok(kind)
}

fn check_visibility(
    decl: &Declaration,
    descriptor: &CandidateDescriptor,
) -> Result<(), RegistryError> {
    if decl.visibility.is_public() {
        return Ok(());
    }
    Err(RegistryError::Visibility {
        decl: descriptor.name.clone(),
        target: descriptor.target.clone(),
        location: descriptor.location.clone(),
    })
}

fn check_concrete(decl: &Declaration, descriptor: &CandidateDescriptor) -> Result<(), RegistryError> {
    if !decl.is_abstract {
        return Ok(());
    }
    Err(RegistryError::AbstractType {
        decl: descriptor.name.clone(),
        target: descriptor.target.clone(),
        location: descriptor.location.clone(),
    })
}

/// Traits must be among the declaration's direct interfaces; supertraits
/// are not walked. Types must appear somewhere in the superclass chain.
fn check_conformance<M: DeclarationModel + ?Sized>(
    model: &M,
    decl: &Declaration,
    descriptor: &CandidateDescriptor,
) -> Result<TypeKind, RegistryError> {
    let Some(kind) = capability_kind(model, &descriptor.target) else {
        return Err(RegistryError::UnresolvedType {
            decl: descriptor.name.clone(),
            target: format!("`{}`", descriptor.target),
            location: descriptor.location.clone(),
        });
    };

    let conforms = match kind {
        TypeKind::Interface => decl.implements(&descriptor.target),
        TypeKind::Class => decl.superclasses.iter().any(|s| *s == descriptor.target),
    };
    if conforms {
        return Ok(kind);
    }
    Err(RegistryError::Conformance {
        decl: descriptor.name.clone(),
        target: descriptor.target.clone(),
        target_kind: kind,
        location: descriptor.location.clone(),
    })
}

fn check_constructor(
    decl: &Declaration,
    descriptor: &CandidateDescriptor,
) -> Result<(), RegistryError> {
    if decl.has_public_default_constructor() {
        return Ok(());
    }
    Err(RegistryError::Constructor {
        decl: descriptor.name.clone(),
        target: descriptor.target.clone(),
        location: descriptor.location.clone(),
    })
}
