//! Domain ports (traits)
//!
//! Port traits define the interfaces the domain layer depends on.
//! The value types in `entities` implement the component ports; adapters
//! provide concrete menu catalogs.

pub mod catalog;
pub mod menu;

pub use catalog::MenuCatalog;
pub use menu::{MenuItem, Topping};
