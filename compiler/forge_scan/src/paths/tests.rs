#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn scope(module: &str, src: &str) -> Scope {
    let file = syn::parse_file(src).unwrap();
    Scope::new(&QualifiedName::parse(module).unwrap(), &file.items)
}

fn resolve(scope: &Scope, path: &str) -> Option<String> {
    let path: syn::Path = syn::parse_str(path).unwrap();
    scope.resolve(&path).map(|name| name.to_string())
}

#[test]
fn test_local_items_resolve_into_module() {
    let scope = scope("crate::store", "pub trait Meal {} pub struct Pizza;");
    assert_eq!(resolve(&scope, "Meal").as_deref(), Some("crate::store::Meal"));
    assert_eq!(resolve(&scope, "self::Pizza").as_deref(), Some("crate::store::Pizza"));
}

#[test]
fn test_super_and_crate() {
    let scope = scope("crate::store::pizza", "");
    assert_eq!(resolve(&scope, "super::Meal").as_deref(), Some("crate::store::Meal"));
    assert_eq!(resolve(&scope, "super::super::Menu").as_deref(), Some("crate::Menu"));
    assert_eq!(resolve(&scope, "crate::a::B").as_deref(), Some("crate::a::B"));
    assert_eq!(resolve(&scope, "super::super::super::X"), None);
}

#[test]
fn test_use_imports() {
    let scope = scope(
        "crate::store::pizza",
        r"
        use super::Meal;
        use crate::menu::{self, Dish as Plate, drinks::{Cola}};
        use std::ops::Deref;
        use other::*;
        use crate::hidden as _;
        ",
    );
    assert_eq!(resolve(&scope, "Meal").as_deref(), Some("crate::store::Meal"));
    assert_eq!(resolve(&scope, "Plate").as_deref(), Some("crate::menu::Dish"));
    assert_eq!(resolve(&scope, "menu::Soup").as_deref(), Some("crate::menu::Soup"));
    assert_eq!(resolve(&scope, "Cola").as_deref(), Some("crate::menu::drinks::Cola"));
    assert_eq!(resolve(&scope, "Deref").as_deref(), Some("std::ops::Deref"));
    // Globs are not followed.
    assert_eq!(resolve(&scope, "Anything").as_deref(), Some("Anything"));
}

#[test]
fn test_use_of_local_module() {
    let scope = scope("crate", "mod store; use store::Meal;");
    assert_eq!(resolve(&scope, "Meal").as_deref(), Some("crate::store::Meal"));
}

#[test]
fn test_external_paths_stay_as_written() {
    let scope = scope("crate", "");
    assert_eq!(resolve(&scope, "menu::Meal").as_deref(), Some("menu::Meal"));
    assert_eq!(resolve(&scope, "::menu::Meal").as_deref(), Some("menu::Meal"));
}

#[test]
fn test_generic_arguments_are_ignored() {
    let scope = scope("crate", "struct Wrapper;");
    assert_eq!(resolve(&scope, "Wrapper<u8>").as_deref(), Some("crate::Wrapper"));
}

#[test]
fn test_imports_follow_reexports() {
    let scopes = [
        scope("crate", "pub mod store; pub use store::Meal;"),
        scope("crate::menu", "pub use crate::Meal as Dish; pub use crate::store as shop;"),
    ];
    let imports = Imports::new(&scopes);
    let follow = |path: &str| imports.follow(QualifiedName::parse(path).unwrap()).to_string();

    assert_eq!(follow("crate::Meal"), "crate::store::Meal");
    assert_eq!(follow("crate::menu::Dish"), "crate::store::Meal");
    assert_eq!(follow("crate::menu::shop::Pizza"), "crate::store::Pizza");
    assert_eq!(follow("crate::store::Meal"), "crate::store::Meal");
    assert_eq!(follow("menu::Meal"), "menu::Meal");

    let kitchen = scope("crate::kitchen", "use crate::menu::Dish;");
    let path: syn::Path = syn::parse_str("Dish").unwrap();
    assert_eq!(
        imports.within(&kitchen).resolve(&path).map(|n| n.to_string()).as_deref(),
        Some("crate::store::Meal")
    );
}

#[test]
fn test_import_cycles_terminate() {
    let scopes = [
        scope("crate::a", "pub use crate::b::X;"),
        scope("crate::b", "pub use crate::a::X;"),
    ];
    let imports = Imports::new(&scopes);
    let followed = imports.follow(QualifiedName::parse("crate::a::X").unwrap());
    assert!(["crate::a::X", "crate::b::X"].contains(&followed.as_str()));
}
