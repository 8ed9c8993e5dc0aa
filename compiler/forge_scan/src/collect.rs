//! Declaration collection.
//!
//! Turns walked modules into the registry's inputs: a [`DeclTable`] that
//! knows every struct, enum, and trait of the crate (plus configured
//! external types), and one [`TaggedDecl`] per `#[factory]` item in source
//! order.

use forge_diagnostic::{Diagnostic, ErrorCode};
use forge_ir::{
    Constructor, DeclKind, Declaration, QualifiedName, Tag, TypeKind, TypeRef, Visibility,
};
use forge_registry::{DeclTable, TaggedDecl};
use rustc_hash::FxHashMap;
use syn::{FnArg, ImplItem, Item, ItemImpl, Type};

use crate::attr::{factory_attrs, FactoryArgs};
use crate::paths::{Imports, Resolver, Scope};
use crate::walk::{span_location, SourceModule};

/// Names the `Deref` trait may resolve to.
const DEREF_PATHS: &[&str] = &["std::ops::Deref", "core::ops::Deref", "Deref"];

#[derive(Debug, Default)]
pub(crate) struct Collected {
    pub model: DeclTable,
    pub candidates: Vec<TaggedDecl>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Build the model and candidates for `modules`.
#[tracing::instrument(level = "debug", skip_all, fields(modules = modules.len()))]
pub(crate) fn collect(modules: &[SourceModule], externs: &[(QualifiedName, TypeKind)]) -> Collected {
    let scopes: Vec<Scope> = modules
        .iter()
        .map(|module| Scope::new(&module.path, &module.items))
        .collect();
    let imports = Imports::new(&scopes);

    let mut types = TypeIndex::default();
    let mut collected = Collected::default();
    for (name, kind) in externs {
        collected.model.register_extern(name.clone(), *kind);
    }

    // Declarations first, so impls and tags anywhere can refer to them.
    for module in modules {
        for item in &module.items {
            types.declare(module, item, &mut collected.model);
        }
    }

    let mut parents: FxHashMap<QualifiedName, QualifiedName> = FxHashMap::default();
    for (module, scope) in modules.iter().zip(&scopes) {
        for item in &module.items {
            if let Item::Impl(item_impl) = item {
                types.record_impl(item_impl, imports.within(scope), &mut parents);
            }
        }
    }
    types.link_superclasses(&parents);

    for (module, scope) in modules.iter().zip(&scopes) {
        for item in &module.items {
            collect_tags(module, imports.within(scope), item, &types, &mut collected);
        }
    }

    tracing::debug!(
        types = types.decls.len(),
        candidates = collected.candidates.len(),
        "collected declarations"
    );
    collected
}

/// Structs and enums of the crate, by name.
#[derive(Debug, Default)]
struct TypeIndex {
    decls: Vec<Declaration>,
    by_name: FxHashMap<QualifiedName, usize>,
}

impl TypeIndex {
    fn declare(&mut self, module: &SourceModule, item: &Item, model: &mut DeclTable) {
        let (ident, vis, kind, is_abstract) = match item {
            Item::Struct(item) => (&item.ident, &item.vis, TypeKind::Class, false),
            Item::Enum(item) => (&item.ident, &item.vis, TypeKind::Class, item.variants.is_empty()),
            Item::Trait(item) => (&item.ident, &item.vis, TypeKind::Interface, false),
            _ => return,
        };
        let Ok(name) = module.path.child(&ident.to_string()) else {
            return;
        };
        model.declare(name.clone(), kind);

        if kind == TypeKind::Class {
            let decl = Declaration::new(name.clone(), DeclKind::Class, visibility(vis))
                .with_abstract(is_abstract)
                .with_location(span_location(&module.file, ident.span()));
            self.by_name.insert(name, self.decls.len());
            self.decls.push(decl);
        }
    }

    fn get_mut(&mut self, name: &QualifiedName) -> Option<&mut Declaration> {
        let index = *self.by_name.get(name)?;
        self.decls.get_mut(index)
    }

    fn get(&self, name: &QualifiedName) -> Option<&Declaration> {
        self.by_name.get(name).and_then(|&index| self.decls.get(index))
    }

    /// Record interfaces, `Deref` parents, and constructors from one impl.
    fn record_impl(
        &mut self,
        item_impl: &ItemImpl,
        resolver: Resolver<'_>,
        parents: &mut FxHashMap<QualifiedName, QualifiedName>,
    ) {
        let Some(self_name) = type_path(&item_impl.self_ty).and_then(|p| resolver.resolve(p)) else {
            return;
        };
        let Some(decl) = self.get_mut(&self_name) else {
            return;
        };

        match &item_impl.trait_ {
            // Negative impls (`impl !Trait for T`) grant nothing.
            Some((Some(_), _, _)) => {}
            Some((None, trait_path, _)) => {
                let Some(trait_name) = resolver.resolve(trait_path) else {
                    return;
                };
                if DEREF_PATHS.contains(&trait_name.as_str()) {
                    if let Some(target) = deref_target(item_impl, resolver) {
                        parents.insert(self_name, target);
                    }
                } else if !decl.implements(&trait_name) {
                    decl.interfaces.push(trait_name);
                }
            }
            None => {
                for impl_item in &item_impl.items {
                    if let Some(constructor) = constructor(impl_item) {
                        decl.constructors.push(constructor);
                    }
                }
            }
        }
    }

    /// Fill in every declaration's superclass chain, nearest first.
    fn link_superclasses(&mut self, parents: &FxHashMap<QualifiedName, QualifiedName>) {
        for decl in &mut self.decls {
            let mut current = &decl.name;
            while let Some(parent) = parents.get(current) {
                // Deref cycles do not compile, but do not hang on them.
                if *parent == decl.name || decl.superclasses.contains(parent) {
                    break;
                }
                decl.superclasses.push(parent.clone());
                current = parent;
            }
        }
    }
}

fn visibility(vis: &syn::Visibility) -> Visibility {
    match vis {
        syn::Visibility::Public(_) => Visibility::Public,
        syn::Visibility::Restricted(_) => Visibility::Restricted,
        syn::Visibility::Inherited => Visibility::Private,
    }
}

fn type_path(ty: &Type) -> Option<&syn::Path> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => Some(&type_path.path),
        _ => None,
    }
}

/// `U` in `impl Deref for T { type Target = U; }`.
fn deref_target(item_impl: &ItemImpl, resolver: Resolver<'_>) -> Option<QualifiedName> {
    item_impl.items.iter().find_map(|impl_item| match impl_item {
        ImplItem::Type(assoc) if assoc.ident == "Target" => {
            type_path(&assoc.ty).and_then(|p| resolver.resolve(p))
        }
        _ => None,
    })
}

/// An associated `fn new(..)` without receiver.
fn constructor(impl_item: &ImplItem) -> Option<Constructor> {
    let ImplItem::Fn(method) = impl_item else {
        return None;
    };
    if method.sig.ident != "new" {
        return None;
    }
    if matches!(method.sig.inputs.first(), Some(FnArg::Receiver(_))) {
        return None;
    }
    Some(Constructor::new(
        method.sig.inputs.len(),
        visibility(&method.vis),
    ))
}

fn collect_tags(
    module: &SourceModule,
    resolver: Resolver<'_>,
    item: &Item,
    types: &TypeIndex,
    collected: &mut Collected,
) {
    let (attrs, ident, vis, kind) = match item {
        Item::Struct(item) => (&item.attrs, &item.ident, &item.vis, DeclKind::Class),
        Item::Enum(item) => (&item.attrs, &item.ident, &item.vis, DeclKind::Class),
        Item::Trait(item) => (&item.attrs, &item.ident, &item.vis, DeclKind::Interface),
        Item::Union(item) => (&item.attrs, &item.ident, &item.vis, DeclKind::Other),
        Item::Fn(item) => (&item.attrs, &item.sig.ident, &item.vis, DeclKind::Other),
        Item::Const(item) => (&item.attrs, &item.ident, &item.vis, DeclKind::Other),
        Item::Static(item) => (&item.attrs, &item.ident, &item.vis, DeclKind::Other),
        Item::Type(item) => (&item.attrs, &item.ident, &item.vis, DeclKind::Other),
        Item::Mod(item) => (&item.attrs, &item.ident, &item.vis, DeclKind::Other),
        _ => return,
    };

    let mut tags = factory_attrs(attrs);
    let Some(attr) = tags.next() else {
        return;
    };
    let attr_location = span_location(&module.file, syn::spanned::Spanned::span(attr));
    if let Some(extra) = tags.next() {
        collected.diagnostics.push(
            Diagnostic::error(ErrorCode::F3003)
                .with_message(format!("`{ident}` has more than one `#[factory]` attribute"))
                .with_label(
                    span_location(&module.file, syn::spanned::Spanned::span(extra)),
                    "second attribute",
                )
                .with_secondary_label(attr_location, "first attribute"),
        );
        return;
    }

    let args = match FactoryArgs::from_attribute(attr) {
        Ok(args) => args,
        Err(err) => {
            collected.diagnostics.push(malformed(
                format!("malformed `#[factory]` attribute: {err}"),
                span_location(&module.file, err.span()),
            ));
            return;
        }
    };

    let Some(target) = resolver.resolve(&args.ty) else {
        collected.diagnostics.push(malformed(
            "`ty` is not a path to a type".to_string(),
            span_location(&module.file, syn::spanned::Spanned::span(&args.ty)),
        ));
        return;
    };
    let target = match collected.model.symbol(&target) {
        Some(symbol) => TypeRef::Deferred(symbol),
        None => TypeRef::Known(target),
    };

    let Ok(name) = module.path.child(&ident.to_string()) else {
        return;
    };
    let decl = match types.get(&name) {
        Some(decl) => decl.clone(),
        None => Declaration::new(name, kind, visibility(vis))
            .with_location(span_location(&module.file, ident.span())),
    };
    let tag = Tag {
        id: args.id_value(),
        target,
        location: Some(attr_location),
    };
    collected.candidates.push(TaggedDecl::new(decl, tag));
}

#[cold]
fn malformed(message: String, location: forge_ir::Location) -> Diagnostic {
    Diagnostic::error(ErrorCode::F3003)
        .with_message(message)
        .with_label(location, "here")
        .with_note("expected `#[factory(id = \"...\", ty = Path)]`")
}
