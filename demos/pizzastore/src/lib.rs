//! A pizza store whose menu is assembled at build time.
//!
//! Every meal type carries `#[factory(id = "...", ty = Meal)]`; the build
//! script generates [`MealFactory`], which creates meals by id.

pub mod store;

pub use forge_rt::{Dispatch, DispatchError};
pub use store::{CalzonePizza, MargheritaPizza, Meal, MealFactory, Tiramisu};

/// Why an order could not be billed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BillError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error("order total exceeds {} cents", u32::MAX)]
    Overflow,
}

/// Total price of an order in cents.
///
/// Fails on the first id that is not on the menu, or once the total no
/// longer fits in a `u32`.
pub fn bill(order: &[&str]) -> Result<u32, BillError> {
    order.iter().try_fold(0, |total, &id| {
        let meal = MealFactory::create(Some(id))?;
        add_to_bill(total, &*meal)
    })
}

/// Add one meal to a running total.
pub fn add_to_bill(total: u32, meal: &dyn Meal) -> Result<u32, BillError> {
    total
        .checked_add(meal.price_cents())
        .ok_or(BillError::Overflow)
}
