//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Buns, ingredients and the burger aggregate
//! - `ports`: Trait definitions the aggregate and the menu are built on

pub mod entities;
pub mod ports;
