//! Error types for the burger domain
//!
//! `DomainError` covers every way an order operation can be rejected.
//! There is no recovery logic here: callers are expected to validate
//! positions and lookups before calling.

use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Ingredient index {index} out of range (burger has {len} ingredients)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No bun set on this burger")]
    BunNotSet,

    #[error("Unknown menu item: {0}")]
    UnknownItem(String),

    #[error("Menu has no buns")]
    EmptyMenu,

    #[error("Burger price exceeds the representable total")]
    PriceOverflow,
}

impl DomainError {
    /// Whether this error was caused by a bad ingredient position
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, DomainError::IndexOutOfRange { .. })
    }
}
