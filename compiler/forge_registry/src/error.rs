//! Compile-time registry errors.
//!
//! Each stage returns `Result<_, RegistryError>` and stops at the first
//! failure. The pass driver turns errors into diagnostics with
//! [`RegistryError::to_diagnostic`].

use forge_diagnostic::{Diagnostic, ErrorCode};
use forge_ir::{DeclKind, Location, QualifiedName, TypeKind};

/// Why a tagged declaration was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The tag sits on something that cannot be instantiated.
    #[error("only types can be tagged with `#[factory]`, but `{decl}` is a {kind}")]
    NotAClass {
        decl: QualifiedName,
        kind: DeclKind,
        location: Option<Location>,
    },

    /// The tag's id is absent or empty.
    #[error("id in `#[factory]` for type `{decl}` is missing or empty")]
    InvalidTag {
        decl: QualifiedName,
        location: Option<Location>,
    },

    /// The capability type, or its kind, is unknown to the model.
    #[error("cannot resolve capability type {target} of `{decl}`")]
    UnresolvedType {
        decl: QualifiedName,
        /// Rendered reference, see [`crate::resolve::describe`].
        target: String,
        location: Option<Location>,
    },

    #[error("the type `{decl}` is not public")]
    Visibility {
        decl: QualifiedName,
        target: QualifiedName,
        location: Option<Location>,
    },

    #[error("the type `{decl}` is abstract, abstract types cannot be tagged with `#[factory]`")]
    AbstractType {
        decl: QualifiedName,
        target: QualifiedName,
        location: Option<Location>,
    },

    #[error(
        "the type `{decl}` tagged with `#[factory]` must {} `{target}`",
        conformance_requirement(.target_kind)
    )]
    Conformance {
        decl: QualifiedName,
        target: QualifiedName,
        target_kind: TypeKind,
        location: Option<Location>,
    },

    #[error("the type `{decl}` must provide a public zero-argument constructor")]
    Constructor {
        decl: QualifiedName,
        target: QualifiedName,
        location: Option<Location>,
    },

    /// The id is already taken within the capability group.
    #[error(
        "conflict: the type `{decl}` is tagged with `#[factory]` with id = '{id}' \
         but `{existing}` already uses the same id"
    )]
    DuplicateId {
        id: String,
        target: QualifiedName,
        decl: QualifiedName,
        location: Option<Location>,
        existing: QualifiedName,
        existing_location: Option<Location>,
    },
}

fn conformance_requirement(kind: &TypeKind) -> &'static str {
    match kind {
        TypeKind::Interface => "implement the trait",
        TypeKind::Class => "inherit from the type",
    }
}

impl RegistryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistryError::NotAClass { .. } => ErrorCode::F0001,
            RegistryError::InvalidTag { .. } => ErrorCode::F0002,
            RegistryError::UnresolvedType { .. } => ErrorCode::F0003,
            RegistryError::Visibility { .. } => ErrorCode::F1001,
            RegistryError::AbstractType { .. } => ErrorCode::F1002,
            RegistryError::Conformance { .. } => ErrorCode::F1003,
            RegistryError::Constructor { .. } => ErrorCode::F1004,
            RegistryError::DuplicateId { .. } => ErrorCode::F2001,
        }
    }

    /// The rejected declaration.
    pub fn decl(&self) -> &QualifiedName {
        match self {
            RegistryError::NotAClass { decl, .. }
            | RegistryError::InvalidTag { decl, .. }
            | RegistryError::UnresolvedType { decl, .. }
            | RegistryError::Visibility { decl, .. }
            | RegistryError::AbstractType { decl, .. }
            | RegistryError::Conformance { decl, .. }
            | RegistryError::Constructor { decl, .. }
            | RegistryError::DuplicateId { decl, .. } => decl,
        }
    }

    /// The capability group the declaration was headed for, when resolved.
    pub fn target(&self) -> Option<&QualifiedName> {
        match self {
            RegistryError::NotAClass { .. }
            | RegistryError::InvalidTag { .. }
            | RegistryError::UnresolvedType { .. } => None,
            RegistryError::Visibility { target, .. }
            | RegistryError::AbstractType { target, .. }
            | RegistryError::Conformance { target, .. }
            | RegistryError::Constructor { target, .. }
            | RegistryError::DuplicateId { target, .. } => Some(target),
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            RegistryError::NotAClass { location, .. }
            | RegistryError::InvalidTag { location, .. }
            | RegistryError::UnresolvedType { location, .. }
            | RegistryError::Visibility { location, .. }
            | RegistryError::AbstractType { location, .. }
            | RegistryError::Conformance { location, .. }
            | RegistryError::Constructor { location, .. }
            | RegistryError::DuplicateId { location, .. } => location.as_ref(),
        }
    }

    /// Convert to a diagnostic attached to the rejected declaration.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        let location = self.location();

        match self {
            RegistryError::NotAClass { kind, .. } => diag
                .with_label_at(location, format!("this {kind} cannot be constructed"))
                .with_suggestion("move `#[factory]` to a struct or enum"),
            RegistryError::InvalidTag { .. } => diag
                .with_label_at(location, "tagged here")
                .with_suggestion("give the type a non-empty `id = \"...\"`"),
            RegistryError::UnresolvedType { .. } => diag
                .with_label_at(location, "tagged here")
                .with_note("capability types from other crates must be registered with their kind"),
            RegistryError::Visibility { .. } => diag
                .with_label_at(location, "not `pub`")
                .with_note("dispatchers construct the type from outside its module")
                .with_suggestion("declare the type with `pub`"),
            RegistryError::AbstractType { .. } => diag
                .with_label_at(location, "this type has no values")
                .with_suggestion("tag a type that can be instantiated"),
            RegistryError::Conformance {
                target,
                target_kind,
                ..
            } => {
                let diag = diag.with_label_at(location, format!("does not conform to `{target}`"));
                match target_kind {
                    TypeKind::Interface => diag
                        .with_note("only traits implemented directly are considered")
                        .with_suggestion(format!("add `impl {target} for ...`")),
                    TypeKind::Class => diag.with_note(format!(
                        "`{target}` must appear in the type's `Deref` chain"
                    )),
                }
            }
            RegistryError::Constructor { decl, .. } => diag
                .with_label_at(location, "no `pub fn new()`")
                .with_suggestion(format!(
                    "add `pub fn new() -> Self` to `impl {}`",
                    decl.simple_name()
                )),
            RegistryError::DuplicateId {
                id,
                target,
                existing_location,
                ..
            } => {
                let diag = diag
                    .with_label_at(location, format!("id '{id}' is already in use"))
                    .with_note(format!("ids must be unique among `{target}` factories"));
                match existing_location {
                    Some(existing) => {
                        diag.with_secondary_label(existing.clone(), "first registered here")
                    }
                    None => diag,
                }
            }
        }
    }
}
