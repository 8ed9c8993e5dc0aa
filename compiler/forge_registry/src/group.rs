//! Capability groups.
//!
//! Accepted candidates are grouped by capability type. Within a group ids
//! are unique; the first candidate to claim an id keeps it. Groups and
//! their entries iterate in discovery order, which is the order generated
//! dispatchers test ids in.

use forge_ir::{QualifiedName, TypeKind};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::{CandidateDescriptor, RegistryError};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Accepted candidates for one capability type, keyed by id.
#[derive(Clone, Debug)]
pub struct CapabilityGroup {
    name: QualifiedName,
    kind: TypeKind,
    entries: FxIndexMap<String, CandidateDescriptor>,
}

impl CapabilityGroup {
    pub fn new(name: QualifiedName, kind: TypeKind) -> Self {
        CapabilityGroup {
            name,
            kind,
            entries: FxIndexMap::default(),
        }
    }

    /// The capability type.
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CandidateDescriptor> {
        self.entries.get(id)
    }

    /// Ids in discovery order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Descriptors in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &CandidateDescriptor> {
        self.entries.values()
    }

    /// Insert a descriptor, rejecting it if its id is taken.
    ///
    /// On conflict the group is left unchanged. Callers outside the crate go
    /// through [`CapabilityGroups::add`], which picks the group by target.
    pub(crate) fn add(&mut self, descriptor: CandidateDescriptor) -> Result<(), RegistryError> {
        debug_assert_eq!(descriptor.target, self.name);
        if let Some(existing) = self.entries.get(&descriptor.id) {
            return Err(RegistryError::DuplicateId {
                id: descriptor.id,
                target: descriptor.target,
                decl: descriptor.name,
                location: descriptor.location,
                existing: existing.name.clone(),
                existing_location: existing.location.clone(),
            });
        }
        self.entries.insert(descriptor.id.clone(), descriptor);
        Ok(())
    }
}

/// All capability groups of one pass, created on first use.
#[derive(Clone, Debug, Default)]
pub struct CapabilityGroups {
    groups: FxIndexMap<QualifiedName, CapabilityGroup>,
}

impl CapabilityGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor to the group for its capability type.
    ///
    /// `kind` is only used when the group does not exist yet.
    pub fn add(
        &mut self,
        descriptor: CandidateDescriptor,
        kind: TypeKind,
    ) -> Result<(), RegistryError> {
        self.groups
            .entry(descriptor.target.clone())
            .or_insert_with_key(|name| CapabilityGroup::new(name.clone(), kind))
            .add(descriptor)
    }

    pub fn get(&self, name: &QualifiedName) -> Option<&CapabilityGroup> {
        self.groups.get(name)
    }

    /// Groups in the order their first candidate was discovered.
    pub fn iter(&self) -> impl Iterator<Item = &CapabilityGroup> {
        self.groups.values()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
