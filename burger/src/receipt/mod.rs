//! Structured receipts
//!
//! The text receipt printed at the counter is rendered by the burger
//! itself; this module holds the summary read by machines.

pub mod summary;

pub use summary::{BunLine, IngredientLine, ReceiptSummary};
