//! The generated `MealFactory`, end to end.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pizzastore::{add_to_bill, bill, BillError, Dispatch, DispatchError, Meal, MealFactory};
use pretty_assertions::assert_eq;

#[test]
fn test_creates_registered_meals() {
    let meal = MealFactory::create(Some("Margherita")).unwrap();
    assert_eq!(meal.name(), "Margherita");
    assert_eq!(meal.price_cents(), 600);

    assert_eq!(MealFactory::create(Some("Calzone")).unwrap().price_cents(), 850);
    assert_eq!(MealFactory::create(Some("Tiramisu")).unwrap().price_cents(), 450);
}

#[test]
fn test_ids_in_registration_order() {
    assert_eq!(MealFactory::IDS, ["Margherita", "Calzone", "Tiramisu"]);
    assert_eq!(<MealFactory as Dispatch>::ids(), MealFactory::IDS);
}

#[test]
fn test_unknown_id() {
    let err = MealFactory::create(Some("Bogus")).err().unwrap();
    assert_eq!(err, DispatchError::UnknownId("Bogus".to_string()));
    assert_eq!(err.to_string(), "Unknown id = Bogus");
}

#[test]
fn test_null_id() {
    let err = MealFactory::create(None).err().unwrap();
    assert_eq!(err, DispatchError::NullArgument);
    assert_eq!(err.to_string(), "id is null!");
}

#[test]
fn test_ids_are_case_sensitive() {
    assert!(MealFactory::create(Some("margherita")).is_err());
    assert!(!MealFactory::contains("margherita"));
    assert!(MealFactory::contains("Margherita"));
}

#[test]
fn test_create_all_follows_registration_order() {
    let all = MealFactory::create_all().unwrap();
    let names: Vec<_> = all.iter().map(|m| m.name()).collect();
    assert_eq!(names, ["Margherita", "Calzone", "Tiramisu"]);
}

#[test]
fn test_bill() {
    assert_eq!(bill(&[]).unwrap(), 0);
    assert_eq!(bill(&["Margherita", "Tiramisu", "Tiramisu"]).unwrap(), 1500);
    assert_eq!(
        bill(&["Calzone", "Pineapple"]),
        Err(BillError::Dispatch(DispatchError::UnknownId(
            "Pineapple".to_string()
        )))
    );
}

struct Banquet;

impl Meal for Banquet {
    fn name(&self) -> &'static str {
        "Banquet"
    }

    fn price_cents(&self) -> u32 {
        u32::MAX
    }
}

#[test]
fn test_bill_overflow_is_an_error() {
    assert_eq!(add_to_bill(0, &Banquet), Ok(u32::MAX));
    assert_eq!(add_to_bill(1, &Banquet), Err(BillError::Overflow));

    let pizza = MealFactory::create(Some("Margherita")).unwrap();
    assert_eq!(add_to_bill(u32::MAX - 600, &*pizza), Ok(u32::MAX));
    assert_eq!(
        add_to_bill(u32::MAX - 599, &*pizza),
        Err(BillError::Overflow)
    );
}
