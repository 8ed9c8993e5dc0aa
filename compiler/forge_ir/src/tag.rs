//! Tags and capability type references.

use crate::{Location, QualifiedName};

/// Handle to a type the host is still compiling.
///
/// Only the model that issued the handle can turn it into a name.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct SymbolId(u32);

impl SymbolId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        SymbolId(raw)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Reference to the capability type named in a tag.
///
/// Types from already-built dependencies are `Known` by name. Types that
/// belong to the crate being processed are `Deferred`: the host hands out a
/// symbol handle and resolves it on request. Consumers never match on this
/// directly; they go through the registry's resolver.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeRef {
    Known(QualifiedName),
    Deferred(SymbolId),
}

/// `(capability type, id)` metadata attached to one declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Tag {
    /// The dispatch id. `None` when the host found no id at all.
    pub id: Option<String>,
    /// The capability type the declaration claims to provide.
    pub target: TypeRef,
    /// Where the tag itself was written, if the host knows.
    pub location: Option<Location>,
}

impl Tag {
    pub fn new(id: impl Into<String>, target: TypeRef) -> Self {
        Tag {
            id: Some(id.into()),
            target,
            location: None,
        }
    }

    /// A tag whose id is absent.
    pub fn without_id(target: TypeRef) -> Self {
        Tag {
            id: None,
            target,
            location: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}
