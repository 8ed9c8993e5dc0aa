use forge_macros::factory;

use super::Meal;

#[factory(id = "Tiramisu", ty = Meal)]
#[derive(Debug, Default)]
pub struct Tiramisu;

impl Tiramisu {
    pub fn new() -> Self {
        Tiramisu
    }
}

impl Meal for Tiramisu {
    fn name(&self) -> &'static str {
        "Tiramisu"
    }

    fn price_cents(&self) -> u32 {
        450
    }
}
