#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;

fn name(path: &str) -> QualifiedName {
    QualifiedName::parse(path).unwrap()
}

#[test]
fn test_public_default_constructor_detection() {
    let decl = Declaration::new(name("crate::Pizza"), DeclKind::Class, Visibility::Public)
        .with_constructor(Constructor::new(1, Visibility::Public))
        .with_constructor(Constructor::new(0, Visibility::Private));
    assert!(!decl.has_public_default_constructor());

    let decl = decl.with_constructor(Constructor::public_default());
    assert!(decl.has_public_default_constructor());
}

#[test]
fn test_restricted_is_not_public() {
    assert!(Visibility::Public.is_public());
    assert!(!Visibility::Restricted.is_public());
    assert!(!Visibility::Private.is_public());
}

#[test]
fn test_builder_keeps_supertype_order() {
    let decl = Declaration::new(name("crate::C"), DeclKind::Class, Visibility::Public)
        .with_superclass(name("crate::B"))
        .with_superclass(name("crate::A"))
        .with_interface(name("crate::Meal"));
    let chain: Vec<_> = decl.superclasses.iter().map(QualifiedName::as_str).collect();
    assert_eq!(chain, vec!["crate::B", "crate::A"]);
    assert!(decl.implements(&name("crate::Meal")));
    assert!(!decl.implements(&name("crate::A")));
    assert_eq!(decl.simple_name(), "C");
}
