//! The declaration model seam.
//!
//! The registry never inspects source code. Whatever it needs to know about
//! types beyond a [`Declaration`] comes from a [`DeclarationModel`].

use forge_ir::{Declaration, QualifiedName, SymbolId, Tag, TypeKind};
use rustc_hash::FxHashMap;

/// Type information supplied by the host.
///
/// Covers both resolution paths: names of types the host is still compiling
/// (through their [`SymbolId`]) and the kind of any capability type,
/// in-progress or already built.
pub trait DeclarationModel {
    /// Name of the in-progress type behind `symbol`, if the handle is valid.
    fn resolve_symbol(&self, symbol: SymbolId) -> Option<QualifiedName>;

    /// Whether `name` is a trait or a type. `None` for unknown types.
    fn type_kind(&self, name: &QualifiedName) -> Option<TypeKind>;
}

impl<M: DeclarationModel + ?Sized> DeclarationModel for &M {
    fn resolve_symbol(&self, symbol: SymbolId) -> Option<QualifiedName> {
        (**self).resolve_symbol(symbol)
    }

    fn type_kind(&self, name: &QualifiedName) -> Option<TypeKind> {
        (**self).type_kind(name)
    }
}

/// A declaration paired with the tag found on it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TaggedDecl {
    pub decl: Declaration,
    pub tag: Tag,
}

impl TaggedDecl {
    pub fn new(decl: Declaration, tag: Tag) -> Self {
        TaggedDecl { decl, tag }
    }
}

/// In-memory [`DeclarationModel`].
///
/// Types of the crate being processed are `declare`d and receive a
/// [`SymbolId`]; types from dependencies are registered by name with
/// `register_extern`.
#[derive(Clone, Debug, Default)]
pub struct DeclTable {
    /// Indexed by `SymbolId`.
    symbols: Vec<QualifiedName>,
    symbols_by_name: FxHashMap<QualifiedName, SymbolId>,
    kinds: FxHashMap<QualifiedName, TypeKind>,
}

impl DeclTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an in-progress type and get its deferred handle.
    ///
    /// Declaring the same name twice returns the first handle.
    pub fn declare(&mut self, name: QualifiedName, kind: TypeKind) -> SymbolId {
        if let Some(&symbol) = self.symbols_by_name.get(&name) {
            return symbol;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "symbol tables never approach u32::MAX entries"
        )]
        let symbol = SymbolId::new(self.symbols.len() as u32);
        self.symbols.push(name.clone());
        self.symbols_by_name.insert(name.clone(), symbol);
        self.kinds.insert(name, kind);
        symbol
    }

    /// Register an already-built type by name.
    pub fn register_extern(&mut self, name: QualifiedName, kind: TypeKind) {
        self.kinds.insert(name, kind);
    }

    /// Handle of a declared type.
    pub fn symbol(&self, name: &QualifiedName) -> Option<SymbolId> {
        self.symbols_by_name.get(name).copied()
    }

    /// Whether `name` was declared or registered.
    pub fn contains(&self, name: &QualifiedName) -> bool {
        self.kinds.contains_key(name)
    }

    /// Number of declared in-progress types.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }
}

impl DeclarationModel for DeclTable {
    fn resolve_symbol(&self, symbol: SymbolId) -> Option<QualifiedName> {
        self.symbols.get(symbol.index()).cloned()
    }

    fn type_kind(&self, name: &QualifiedName) -> Option<TypeKind> {
        self.kinds.get(name).copied()
    }
}
