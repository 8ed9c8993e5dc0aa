#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::CandidateDescriptor;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn name(path: &str) -> QualifiedName {
    QualifiedName::parse(path).unwrap()
}

fn group_of(target: &str, kind: TypeKind, entries: &[(&str, &str)]) -> CapabilityGroup {
    let mut group = CapabilityGroup::new(name(target), kind);
    for (decl, id) in entries {
        group
            .add(CandidateDescriptor {
                name: name(decl),
                id: (*id).to_string(),
                target: name(target),
                location: None,
            })
            .unwrap();
    }
    group
}

fn meal_group() -> CapabilityGroup {
    group_of(
        "crate::store::Meal",
        TypeKind::Interface,
        &[
            ("crate::store::MargheritaPizza", "Margherita"),
            ("crate::store::CalzonePizza", "Calzone"),
            ("crate::store::Tiramisu", "Tiramisu"),
        ],
    )
}

#[test]
fn test_meal_factory_source() {
    let artifact = generate(&meal_group());

    assert_eq!(artifact.name, "MealFactory");
    assert_eq!(artifact.package, Some(name("crate::store")));
    assert_eq!(artifact.ids, ["Margherita", "Calzone", "Tiramisu"]);
    assert_eq!(
        artifact.source,
        r#"// @generated by forge. Do not edit.

/// Creates `crate::store::Meal` instances by id.
pub struct MealFactory;

impl MealFactory {
    /// Ids this factory can create, in registration order.
    pub const IDS: &'static [&'static str] = &["Margherita", "Calzone", "Tiramisu"];

    /// Creates a new instance registered under `id`.
    pub fn create(id: Option<&str>) -> Result<Box<dyn crate::store::Meal>, ::forge_rt::DispatchError> {
        let Some(id) = id else {
            return Err(::forge_rt::DispatchError::NullArgument);
        };
        if id == "Margherita" {
            return Ok(Box::new(crate::store::MargheritaPizza::new()));
        }
        if id == "Calzone" {
            return Ok(Box::new(crate::store::CalzonePizza::new()));
        }
        if id == "Tiramisu" {
            return Ok(Box::new(crate::store::Tiramisu::new()));
        }
        Err(::forge_rt::DispatchError::unknown_id(id))
    }
}

impl ::forge_rt::Dispatch for MealFactory {
    type Output = Box<dyn crate::store::Meal>;

    fn ids() -> &'static [&'static str] {
        Self::IDS
    }

    fn create(id: Option<&str>) -> Result<Self::Output, ::forge_rt::DispatchError> {
        MealFactory::create(id)
    }
}
"#
    );
}

#[test]
fn test_operation_body_is_null_check_branches_fallback() {
    let group = group_of(
        "crate::Meal",
        TypeKind::Interface,
        &[("crate::Soup", "Soup")],
    );
    assert_eq!(
        generate(&group).operation_body,
        "let Some(id) = id else {\n    \
         return Err(::forge_rt::DispatchError::NullArgument);\n\
         };\n\
         if id == \"Soup\" {\n    \
         return Ok(Box::new(crate::Soup::new()));\n\
         }\n\
         Err(::forge_rt::DispatchError::unknown_id(id))\n"
    );
}

#[test]
fn test_class_capability_converts_by_value() {
    let group = group_of("crate::menu::Dish", TypeKind::Class, &[("crate::menu::Stew", "Stew")]);
    let artifact = generate(&group);

    assert_eq!(artifact.name, "DishFactory");
    assert!(artifact
        .source
        .contains("pub fn create(id: Option<&str>) -> Result<crate::menu::Dish, ::forge_rt::DispatchError> {"));
    assert!(artifact
        .source
        .contains("return Ok(::core::convert::Into::into(crate::menu::Stew::new()));"));
    assert!(artifact.source.contains("type Output = crate::menu::Dish;"));
}

#[test]
fn test_ids_are_escaped() {
    let group = group_of(
        "crate::Meal",
        TypeKind::Interface,
        &[("crate::Odd", "say \"hi\"\\\n")],
    );
    let artifact = generate(&group);
    assert!(artifact.source.contains(r#"if id == "say \"hi\"\\\n" {"#));
}

#[test]
fn test_single_segment_capability_has_no_package() {
    let group = group_of("Meal", TypeKind::Interface, &[("Soup", "Soup")]);
    assert_eq!(generate(&group).package, None);
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(generate(&meal_group()), generate(&meal_group()));
}

proptest! {
    /// Every id appears in exactly one branch, in registration order.
    #[test]
    fn prop_branches_follow_registration_order(
        ids in proptest::collection::hash_set("[A-Za-z][A-Za-z0-9 ]{0,8}", 1..12)
    ) {
        let ids: Vec<String> = ids.into_iter().collect();
        let mut group = CapabilityGroup::new(name("crate::Meal"), TypeKind::Interface);
        for (index, id) in ids.iter().enumerate() {
            group
                .add(CandidateDescriptor {
                    name: name(&format!("crate::Type{index}")),
                    id: id.clone(),
                    target: name("crate::Meal"),
                    location: None,
                })
                .unwrap();
        }

        let body = generate(&group).operation_body;
        let branches: Vec<&str> = body
            .lines()
            .filter(|line| line.starts_with("if id == "))
            .collect();
        let expected: Vec<String> = ids
            .iter()
            .map(|id| format!("if id == {id:?} {{"))
            .collect();
        prop_assert_eq!(branches, expected);
    }
}
