//! The menu.

mod pizza;
mod sweets;

pub use pizza::{CalzonePizza, MargheritaPizza};
pub use sweets::Tiramisu;

/// Anything the store sells.
pub trait Meal {
    fn name(&self) -> &'static str;

    fn price_cents(&self) -> u32;
}

include!(concat!(env!("OUT_DIR"), "/crate/store/meal_factory.rs"));
