//! A type registered under a trait capability.

use forge_macros::factory;

pub trait Meal {
    fn name(&self) -> &'static str;
}

#[factory(id = "Margherita", ty = Meal)]
pub struct MargheritaPizza;

impl MargheritaPizza {
    pub fn new() -> Self {
        MargheritaPizza
    }
}

impl Meal for MargheritaPizza {
    fn name(&self) -> &'static str {
        "Margherita"
    }
}

fn main() {
    assert_eq!(MargheritaPizza::new().name(), "Margherita");
}
