//! Domain entities
//!
//! Immutable menu components (`Bun`, `Ingredient`) and the mutable
//! `Burger` aggregate assembled from them.

pub mod bun;
pub mod burger;
pub mod ingredient;
pub mod receipt_text;

pub use bun::Bun;
pub use burger::Burger;
pub use ingredient::{Ingredient, IngredientType};
pub use receipt_text::render_receipt;
