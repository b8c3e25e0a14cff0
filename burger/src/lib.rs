//! Stellar Burgers order model
//!
//! A burger is a bun plus an ordered stack of sauces and fillings. This
//! crate provides the aggregate, the menu it is assembled from, and the
//! receipt it prints.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod error;
pub mod receipt;

#[cfg(test)]
mod test_utils;


pub use adapters::InMemoryMenu;
pub use app::OrderService;
pub use domain::entities::{render_receipt, Bun, Burger, Ingredient, IngredientType};
pub use domain::ports::{MenuCatalog, MenuItem, Topping};
pub use error::DomainError;
pub use receipt::ReceiptSummary;
