//! Stub implementations of the component ports
//!
//! Each stub answers with a configured name/price and records how many
//! times it was asked, so tests can check what the aggregate queried.

use std::cell::Cell;

use crate::domain::entities::IngredientType;
use crate::domain::ports::{MenuItem, Topping};

// ============================================================================
// Stub Bun
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubBun {
    name: String,
    price: u64,
    name_calls: Cell<usize>,
    price_calls: Cell<usize>,
}

impl StubBun {
    pub fn new(name: &str, price: u64) -> Self {
        Self {
            name: name.to_string(),
            price,
            name_calls: Cell::new(0),
            price_calls: Cell::new(0),
        }
    }

    /// A bun where only the price matters
    pub fn priced(price: u64) -> Self {
        Self::new("stub bun", price)
    }

    /// A bun where only the name matters
    pub fn named(name: &str) -> Self {
        Self::new(name, 0)
    }

    pub fn name_calls(&self) -> usize {
        self.name_calls.get()
    }

    pub fn price_calls(&self) -> usize {
        self.price_calls.get()
    }
}

impl MenuItem for StubBun {
    fn name(&self) -> &str {
        self.name_calls.set(self.name_calls.get() + 1);
        &self.name
    }

    fn price(&self) -> u64 {
        self.price_calls.set(self.price_calls.get() + 1);
        self.price
    }
}

// ============================================================================
// Stub Ingredient
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubIngredient {
    kind: IngredientType,
    name: String,
    price: u64,
    price_calls: Cell<usize>,
}

impl StubIngredient {
    pub fn new(kind: IngredientType, name: &str, price: u64) -> Self {
        Self {
            kind,
            name: name.to_string(),
            price,
            price_calls: Cell::new(0),
        }
    }

    pub fn priced(price: u64) -> Self {
        Self::new(IngredientType::Filling, "stub ingredient", price)
    }

    pub fn named(name: &str) -> Self {
        Self::new(IngredientType::Sauce, name, 0)
    }

    pub fn price_calls(&self) -> usize {
        self.price_calls.get()
    }
}

impl MenuItem for StubIngredient {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> u64 {
        self.price_calls.set(self.price_calls.get() + 1);
        self.price
    }
}

impl Topping for StubIngredient {
    fn kind(&self) -> IngredientType {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_bun_counts_queries() {
        let bun = StubBun::new("Краторная булка", 1255);
        assert_eq!(bun.price(), 1255);
        assert_eq!(bun.price(), 1255);
        assert_eq!(bun.name(), "Краторная булка");

        assert_eq!(bun.price_calls(), 2);
        assert_eq!(bun.name_calls(), 1);
    }

    #[test]
    fn stub_ingredient_defaults() {
        let sauce = StubIngredient::named("Соус Spicy-X");
        assert_eq!(sauce.kind(), IngredientType::Sauce);
        assert_eq!(sauce.price(), 0);

        let filling = StubIngredient::priced(4400);
        assert_eq!(filling.kind(), IngredientType::Filling);
        assert_eq!(filling.price_calls(), 0);
    }
}
