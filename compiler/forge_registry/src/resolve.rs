//! Type reference resolution.
//!
//! A tag names its capability type either by name (`TypeRef::Known`) or by a
//! handle into the host's symbol table (`TypeRef::Deferred`). This module is
//! the only place that tells the two apart. Everything downstream sees a
//! plain [`QualifiedName`].

use forge_ir::{QualifiedName, TypeKind, TypeRef};

use crate::DeclarationModel;

/// Resolve a capability type reference to its qualified name.
///
/// Known names resolve to themselves without consulting the model.
/// Deferred handles go through [`DeclarationModel::resolve_symbol`].
pub fn resolve_type<M: DeclarationModel + ?Sized>(
    model: &M,
    target: &TypeRef,
) -> Option<QualifiedName> {
    match target {
        TypeRef::Known(name) => Some(name.clone()),
        TypeRef::Deferred(symbol) => {
            let resolved = model.resolve_symbol(*symbol);
            tracing::trace!(symbol = symbol.index(), ?resolved, "resolved deferred type");
            resolved
        }
    }
}

/// Kind of a resolved capability type.
pub fn capability_kind<M: DeclarationModel + ?Sized>(
    model: &M,
    name: &QualifiedName,
) -> Option<TypeKind> {
    model.type_kind(name)
}

/// Human-readable form of a reference, for diagnostics about unresolved types.
pub fn describe(target: &TypeRef) -> String {
    match target {
        TypeRef::Known(name) => format!("`{name}`"),
        TypeRef::Deferred(symbol) => format!("#{}", symbol.index()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

    use super::*;
    use crate::DeclTable;
    use forge_ir::SymbolId;
    use pretty_assertions::assert_eq;

    fn name(path: &str) -> QualifiedName {
        QualifiedName::parse(path).unwrap()
    }

    #[test]
    fn test_both_paths_yield_the_same_name() {
        let mut table = DeclTable::new();
        let symbol = table.declare(name("crate::store::Meal"), TypeKind::Interface);

        let deferred = resolve_type(&table, &TypeRef::Deferred(symbol));
        let known = resolve_type(&table, &TypeRef::Known(name("crate::store::Meal")));

        assert_eq!(deferred, Some(name("crate::store::Meal")));
        assert_eq!(deferred, known);
    }

    #[test]
    fn test_known_name_does_not_need_the_model() {
        let table = DeclTable::new();
        let resolved = resolve_type(&table, &TypeRef::Known(name("menu::Meal")));
        assert_eq!(resolved, Some(name("menu::Meal")));
        assert_eq!(capability_kind(&table, &name("menu::Meal")), None);
    }

    #[test]
    fn test_dangling_symbol_is_unresolved() {
        let table = DeclTable::new();
        assert_eq!(resolve_type(&table, &TypeRef::Deferred(SymbolId::new(3))), None);
        assert_eq!(describe(&TypeRef::Deferred(SymbolId::new(3))), "#3");
    }
}
