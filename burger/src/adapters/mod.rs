//! Adapters layer
//!
//! Concrete implementations of domain port traits.

pub mod memory_menu;

pub use memory_menu::InMemoryMenu;
