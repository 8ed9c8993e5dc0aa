//! Argument order, trailing commas, and qualified paths are all accepted.

use forge_macros::factory;

mod menu {
    pub trait Drink {}
}

#[factory(ty = menu::Drink, id = "Espresso",)]
pub struct Espresso;

#[forge_macros::factory(id = "Cola", ty = crate::menu::Drink)]
pub enum Cola {
    Regular,
    Zero,
}

// The registry, not the attribute, reports a missing id.
#[factory(ty = menu::Drink)]
pub struct Water;

impl menu::Drink for Espresso {}
impl menu::Drink for Cola {}
impl menu::Drink for Water {}

fn main() {
    let _ = (Espresso, Cola::Regular, Cola::Zero, Water);
}
