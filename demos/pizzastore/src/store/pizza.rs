use forge_macros::factory;

use super::Meal;

#[factory(id = "Margherita", ty = Meal)]
#[derive(Debug, Default)]
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

    fn price_cents(&self) -> u32 {
        600
    }
}

#[factory(id = "Calzone", ty = Meal)]
#[derive(Debug, Default)]
pub struct CalzonePizza;

impl CalzonePizza {
    pub fn new() -> Self {
        CalzonePizza
    }
}

impl Meal for CalzonePizza {
    fn name(&self) -> &'static str {
        "Calzone"
    }

    fn price_cents(&self) -> u32 {
        850
    }
}
