//! Component ports
//!
//! The burger aggregate only needs a name and a price from its bun, plus a
//! kind from each ingredient. Anything that can answer those questions can
//! go into a burger, which is how tests slot in recording stubs.

use crate::domain::entities::IngredientType;

/// Something sold on the menu: it has a display name and a price
pub trait MenuItem {
    /// Display name shown on the receipt
    fn name(&self) -> &str;

    /// Price in whole currency units
    fn price(&self) -> u64;
}

/// A menu item that can be stacked between the bun halves
pub trait Topping: MenuItem {
    fn kind(&self) -> IngredientType;
}

impl<T: MenuItem + ?Sized> MenuItem for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn price(&self) -> u64 {
        (**self).price()
    }
}

impl<T: Topping + ?Sized> Topping for &T {
    fn kind(&self) -> IngredientType {
        (**self).kind()
    }
}
