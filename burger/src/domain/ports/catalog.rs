//! Menu catalog port
//!
//! Abstracts the list of buns and ingredients an order can be assembled
//! from. Implementations are provided by adapters (e.g., `InMemoryMenu`).

use crate::domain::entities::{Bun, Ingredient};
use crate::error::DomainError;

use super::MenuItem;

/// Read-only access to the buns and ingredients on offer
pub trait MenuCatalog {
    /// All buns, in menu order
    fn available_buns(&self) -> &[Bun];

    /// All sauces and fillings, in menu order
    fn available_ingredients(&self) -> &[Ingredient];

    /// Find a bun by name (case-insensitive)
    fn find_bun(&self, name: &str) -> Result<&Bun, DomainError> {
        find_by_name(self.available_buns(), name)
    }

    /// Find an ingredient by name (case-insensitive)
    fn find_ingredient(&self, name: &str) -> Result<&Ingredient, DomainError> {
        find_by_name(self.available_ingredients(), name)
    }
}

fn find_by_name<'a, T: MenuItem>(items: &'a [T], name: &str) -> Result<&'a T, DomainError> {
    let wanted = name.trim().to_lowercase();
    items
        .iter()
        .find(|item| item.name().to_lowercase() == wanted)
        .ok_or_else(|| {
            tracing::warn!(name, "Menu lookup failed");
            DomainError::UnknownItem(name.trim().to_string())
        })
}
