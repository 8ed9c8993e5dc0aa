//! Type declarations as the host sees them.

use std::fmt;

use crate::{Location, QualifiedName};

/// Visibility of a declaration or constructor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Visibility {
    /// `pub`
    Public,
    /// `pub(crate)`, `pub(super)`, `pub(in path)`
    Restricted,
    /// No visibility modifier.
    Private,
}

impl Visibility {
    #[inline]
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// What kind of item carries a tag.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    /// A constructible type (`struct` or `enum`).
    Class,
    /// A trait.
    Interface,
    /// Anything else (functions, constants, modules, ...).
    Other,
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclKind::Class => write!(f, "type"),
            DeclKind::Interface => write!(f, "trait"),
            DeclKind::Other => write!(f, "item"),
        }
    }
}

/// Kind of a capability type.
///
/// Decides how conformance is checked: interfaces must be implemented
/// directly, classes must appear in the superclass chain.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    Interface,
    Class,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Interface => write!(f, "trait"),
            TypeKind::Class => write!(f, "type"),
        }
    }
}

/// One constructor of a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Constructor {
    /// Number of parameters.
    pub arity: usize,
    pub visibility: Visibility,
}

impl Constructor {
    pub const fn new(arity: usize, visibility: Visibility) -> Self {
        Constructor { arity, visibility }
    }

    /// `pub fn new() -> Self`
    pub const fn public_default() -> Self {
        Constructor {
            arity: 0,
            visibility: Visibility::Public,
        }
    }

    #[inline]
    pub fn is_public_default(self) -> bool {
        self.arity == 0 && self.visibility.is_public()
    }
}

/// A type declaration supplied by the host.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Declaration {
    pub name: QualifiedName,
    pub kind: DeclKind,
    pub visibility: Visibility,
    pub is_abstract: bool,
    /// Ancestors, nearest first. Empty when the type has no superclass.
    pub superclasses: Vec<QualifiedName>,
    /// Interfaces implemented directly by this declaration.
    pub interfaces: Vec<QualifiedName>,
    pub constructors: Vec<Constructor>,
    pub location: Option<Location>,
}

impl Declaration {
    /// Create a declaration with no supertypes and no constructors.
    pub fn new(name: QualifiedName, kind: DeclKind, visibility: Visibility) -> Self {
        Declaration {
            name,
            kind,
            visibility,
            is_abstract: false,
            superclasses: Vec::new(),
            interfaces: Vec::new(),
            constructors: Vec::new(),
            location: None,
        }
    }

    #[must_use]
    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// Append the next ancestor in the superclass chain.
    #[must_use]
    pub fn with_superclass(mut self, name: QualifiedName) -> Self {
        self.superclasses.push(name);
        self
    }

    #[must_use]
    pub fn with_interface(mut self, name: QualifiedName) -> Self {
        self.interfaces.push(name);
        self
    }

    #[must_use]
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }

    /// Whether a public zero-argument constructor exists.
    pub fn has_public_default_constructor(&self) -> bool {
        self.constructors.iter().any(|c| c.is_public_default())
    }

    /// Whether `name` is an interface this declaration implements directly.
    pub fn implements(&self, name: &QualifiedName) -> bool {
        self.interfaces.contains(name)
    }
}

#[cfg(test)]
mod tests;
