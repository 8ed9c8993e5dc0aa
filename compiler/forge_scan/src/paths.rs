//! Path resolution.
//!
//! Resolves the paths written in `ty = ...`, `impl Trait for Type`, and
//! `type Target = ...` to absolute names. A [`Scope`] handles `crate`,
//! `self`, `super`, leading `::`, names declared in the module, and `use`
//! imports (including groups and renames). [`Imports`] then follows the
//! result through the `use` items of other modules, so a type reached via
//! `pub use` re-exports resolves to where it is declared. Glob imports are
//! not followed; a path that matches nothing is taken as written, which is
//! how other crates are named.

use forge_ir::QualifiedName;
use rustc_hash::{FxHashMap, FxHashSet};
use syn::{Item, UseTree};

/// Names visible in one module.
#[derive(Debug, Default)]
pub(crate) struct Scope {
    /// `["crate", "store"]` for `crate::store`.
    module: Vec<String>,
    /// Alias -> absolute path.
    uses: FxHashMap<String, Vec<String>>,
    /// Items declared directly in the module.
    locals: FxHashSet<String>,
}

impl Scope {
    pub(crate) fn new(module: &QualifiedName, items: &[Item]) -> Self {
        let mut scope = Scope {
            module: module.segments().map(str::to_string).collect(),
            ..Scope::default()
        };
        for item in items {
            if let Some(name) = declared_name(item) {
                scope.locals.insert(name);
            }
        }

        let mut uses = FxHashMap::default();
        for item in items {
            let Item::Use(item_use) = item else {
                continue;
            };
            let mut imports = Vec::new();
            flatten_use(&item_use.tree, Vec::new(), &mut imports);
            for (alias, path) in imports {
                if let Some(absolute) = scope.anchor(item_use.leading_colon.is_some(), path) {
                    uses.insert(alias, absolute);
                }
            }
        }
        scope.uses = uses;
        scope
    }

    /// Resolve a path written in this module.
    pub(crate) fn resolve(&self, path: &syn::Path) -> Option<QualifiedName> {
        let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        let first = segments.first()?;

        let absolute = if path.leading_colon.is_none() {
            match self.uses.get(first) {
                Some(target) => {
                    let mut absolute = target.clone();
                    absolute.extend(segments.into_iter().skip(1));
                    absolute
                }
                None => self.anchor(false, segments)?,
            }
        } else {
            self.anchor(true, segments)?
        };
        QualifiedName::from_segments(absolute).ok()
    }

    /// Turn a relative path into an absolute one without consulting `uses`.
    fn anchor(&self, leading_colon: bool, segments: Vec<String>) -> Option<Vec<String>> {
        if leading_colon {
            return Some(segments);
        }
        let first = segments.first()?.as_str();
        match first {
            "crate" => Some(segments),
            "self" => {
                let mut absolute = self.module.clone();
                absolute.extend(segments.into_iter().skip(1));
                Some(absolute)
            }
            "super" => {
                let supers = segments.iter().take_while(|s| *s == "super").count();
                // `crate` itself cannot be left.
                if supers >= self.module.len() {
                    return None;
                }
                let mut absolute = self.module[..self.module.len() - supers].to_vec();
                absolute.extend(segments.into_iter().skip(supers));
                Some(absolute)
            }
            _ if self.locals.contains(first) => {
                let mut absolute = self.module.clone();
                absolute.extend(segments);
                Some(absolute)
            }
            _ => Some(segments),
        }
    }
}

/// Longest chain of `use` items followed before giving up.
const MAX_HOPS: usize = 32;

/// Every `use` item of the crate, keyed by the path it introduces.
///
/// `pub use store::Meal;` in the crate root maps `crate::Meal` to
/// `crate::store::Meal`.
#[derive(Debug, Default)]
pub(crate) struct Imports {
    aliases: FxHashMap<Vec<String>, Vec<String>>,
}

impl Imports {
    pub(crate) fn new(scopes: &[Scope]) -> Self {
        let mut aliases = FxHashMap::default();
        for scope in scopes {
            for (alias, target) in &scope.uses {
                let mut key = scope.module.clone();
                key.push(alias.clone());
                aliases.insert(key, target.clone());
            }
        }
        Imports { aliases }
    }

    /// Resolver for paths written in the module of `scope`.
    pub(crate) fn within<'a>(&'a self, scope: &'a Scope) -> Resolver<'a> {
        Resolver {
            scope,
            imports: self,
        }
    }

    /// Rewrite `name` through imports until no prefix of it is an import.
    ///
    /// The longest matching prefix is replaced first. Cyclic imports do not
    /// compile; they stop after [`MAX_HOPS`] rewrites.
    pub(crate) fn follow(&self, name: QualifiedName) -> QualifiedName {
        let mut segments: Vec<String> = name.segments().map(str::to_string).collect();
        let mut hops = 0;
        while hops < MAX_HOPS {
            let Some((len, target)) = (1..=segments.len())
                .rev()
                .find_map(|len| Some((len, self.aliases.get(&segments[..len])?)))
            else {
                break;
            };
            let mut rewritten = target.clone();
            rewritten.extend(segments.iter().skip(len).cloned());
            if rewritten == segments {
                break;
            }
            segments = rewritten;
            hops += 1;
        }
        if hops == 0 {
            return name;
        }
        QualifiedName::from_segments(segments).unwrap_or(name)
    }
}

/// A [`Scope`] paired with the crate's [`Imports`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Resolver<'a> {
    scope: &'a Scope,
    imports: &'a Imports,
}

impl Resolver<'_> {
    /// Resolve a path written in the scope's module to where it is declared.
    pub(crate) fn resolve(&self, path: &syn::Path) -> Option<QualifiedName> {
        self.scope
            .resolve(path)
            .map(|name| self.imports.follow(name))
    }
}

/// Name an item introduces into its module's namespace.
pub(crate) fn declared_name(item: &Item) -> Option<String> {
    let ident = match item {
        Item::Struct(item) => &item.ident,
        Item::Enum(item) => &item.ident,
        Item::Union(item) => &item.ident,
        Item::Trait(item) => &item.ident,
        Item::TraitAlias(item) => &item.ident,
        Item::Type(item) => &item.ident,
        Item::Mod(item) => &item.ident,
        Item::Fn(item) => &item.sig.ident,
        Item::Const(item) => &item.ident,
        Item::Static(item) => &item.ident,
        _ => return None,
    };
    Some(ident.to_string())
}

/// Collect `(alias, path)` pairs from a use tree.
fn flatten_use(tree: &UseTree, prefix: Vec<String>, out: &mut Vec<(String, Vec<String>)>) {
    match tree {
        UseTree::Path(path) => {
            let mut prefix = prefix;
            prefix.push(path.ident.to_string());
            flatten_use(&path.tree, prefix, out);
        }
        UseTree::Name(name) => {
            if name.ident == "self" {
                if let Some(last) = prefix.last() {
                    out.push((last.clone(), prefix));
                }
            } else {
                let mut path = prefix;
                path.push(name.ident.to_string());
                out.push((name.ident.to_string(), path));
            }
        }
        UseTree::Rename(rename) => {
            if rename.rename == "_" {
                return;
            }
            let mut path = prefix;
            if rename.ident != "self" {
                path.push(rename.ident.to_string());
            }
            out.push((rename.rename.to_string(), path));
        }
        UseTree::Glob(_) => {}
        UseTree::Group(group) => {
            for tree in &group.items {
                flatten_use(tree, prefix.clone(), out);
            }
        }
    }
}

#[cfg(test)]
mod tests;
