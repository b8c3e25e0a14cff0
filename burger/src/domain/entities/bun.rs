//! Bun domain entity
//!
//! The bread around a burger. A burger uses two halves of the same bun,
//! so its price is counted twice in the total.

use serde::{Deserialize, Serialize};

use crate::domain::ports::MenuItem;

/// A bun from the menu
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bun {
    name: String,
    price: u64,
}

impl Bun {
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl MenuItem for Bun {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> u64 {
        self.price
    }
}
