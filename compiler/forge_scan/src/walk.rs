//! Module tree walking.
//!
//! Starts at the crate root file and follows `mod name;` declarations to
//! `name.rs` or `name/mod.rs`, descending into inline `mod name { .. }`
//! blocks along the way. Every module becomes one [`SourceModule`] holding
//! its own items. `#[cfg(test)]` modules are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use forge_diagnostic::{Diagnostic, ErrorCode};
use forge_ir::{Location, QualifiedName};
use proc_macro2::Span;
use syn::Item;

/// The items of one module.
#[derive(Debug)]
pub(crate) struct SourceModule {
    pub path: QualifiedName,
    /// File the items were read from.
    pub file: PathBuf,
    /// Direct items. Child modules appear as contentless `mod` items.
    pub items: Vec<Item>,
}

#[derive(Debug, Default)]
pub(crate) struct ModuleTree {
    /// Parents before children, siblings in source order.
    pub modules: Vec<SourceModule>,
    /// Every file that was read, including ones that failed to parse.
    pub files: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Walk the module tree rooted at `root`.
#[tracing::instrument(level = "debug", skip_all, fields(root = %root.display()))]
pub(crate) fn walk(root: &Path) -> ModuleTree {
    let mut tree = ModuleTree::default();
    if let Some(file) = load(root, None, &mut tree) {
        let dir = root.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
        walk_items(file.items, QualifiedName::crate_root(), root, &dir, &mut tree);
    }
    tree
}

/// Location of `span` in `file`, with a 1-based column.
pub(crate) fn span_location(file: &Path, span: Span) -> Location {
    let start = span.start();
    Location::new(
        file.display().to_string(),
        u32::try_from(start.line).unwrap_or(u32::MAX),
        u32::try_from(start.column + 1).unwrap_or(u32::MAX),
    )
}

fn walk_items(
    items: Vec<Item>,
    module: QualifiedName,
    file: &Path,
    child_dir: &Path,
    tree: &mut ModuleTree,
) {
    tracing::trace!(module = %module, file = %file.display(), "walking module");

    let mut kept = Vec::with_capacity(items.len());
    let mut children = Vec::new();
    for item in items {
        match item {
            Item::Mod(item_mod) if is_cfg_test(&item_mod.attrs) => {}
            Item::Mod(mut item_mod) => {
                let content = item_mod.content.take().map(|(_, items)| items);
                let site = span_location(file, item_mod.ident.span());
                children.push((item_mod.ident.to_string(), content, site));
                kept.push(Item::Mod(item_mod));
            }
            other => kept.push(other),
        }
    }

    tree.modules.push(SourceModule {
        path: module.clone(),
        file: file.to_path_buf(),
        items: kept,
    });

    for (name, content, site) in children {
        let Ok(child) = module.child(&name) else {
            continue;
        };
        match content {
            Some(items) => walk_items(items, child, file, &child_dir.join(&name), tree),
            None => walk_module_file(child, &name, child_dir, site, tree),
        }
    }
}

fn walk_module_file(
    module: QualifiedName,
    name: &str,
    dir: &Path,
    site: Location,
    tree: &mut ModuleTree,
) {
    let flat = dir.join(format!("{name}.rs"));
    let nested = dir.join(name).join("mod.rs");

    let (path, child_dir) = if flat.is_file() {
        (flat, dir.join(name))
    } else if nested.is_file() {
        (nested, dir.join(name))
    } else {
        tree.diagnostics.push(
            Diagnostic::error(ErrorCode::F3001)
                .with_message(format!("file not found for module `{name}`"))
                .with_label(site, "declared here")
                .with_note(format!(
                    "looked for `{}` and `{}`",
                    flat.display(),
                    nested.display()
                )),
        );
        return;
    };

    if let Some(file) = load(&path, Some(site), tree) {
        walk_items(file.items, module, &path, &child_dir, tree);
    }
}

/// Read and parse one file, reporting failures.
fn load(path: &Path, site: Option<Location>, tree: &mut ModuleTree) -> Option<syn::File> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            tree.diagnostics.push(
                Diagnostic::error(ErrorCode::F3001)
                    .with_message(format!("cannot read `{}`: {err}", path.display()))
                    .with_label_at(site.as_ref(), "module declared here"),
            );
            return None;
        }
    };
    tree.files.push(path.to_path_buf());

    match syn::parse_file(&source) {
        Ok(file) => Some(file),
        Err(err) => {
            tree.diagnostics.push(
                Diagnostic::error(ErrorCode::F3002)
                    .with_message(format!("cannot parse `{}`: {err}", path.display()))
                    .with_label(span_location(path, err.span()), "syntax error"),
            );
            None
        }
    }
}

fn is_cfg_test(attrs: &[syn::Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<syn::Ident>()
                .is_ok_and(|predicate| predicate == "test")
    })
}
