//! Structured receipt
//!
//! A serializable snapshot of a finished burger, used where a machine
//! reads the receipt instead of a person.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Burger, IngredientType};
use crate::domain::ports::{MenuItem, Topping};
use crate::error::DomainError;

/// The bun line of a receipt (price per half)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BunLine {
    pub name: String,
    pub price: u64,
}

/// One ingredient line of a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub kind: IngredientType,
    pub name: String,
    pub price: u64,
}

/// Everything on a receipt, in stacking order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptSummary {
    pub bun: BunLine,
    pub ingredients: Vec<IngredientLine>,
    pub total: u64,
}

impl ReceiptSummary {
    /// Snapshot a burger. Fails if no bun has been set.
    pub fn from_burger<B, I>(burger: &Burger<B, I>) -> Result<Self, DomainError>
    where
        B: MenuItem,
        I: Topping,
    {
        let bun = burger.bun().ok_or(DomainError::BunNotSet)?;

        Ok(Self {
            bun: BunLine {
                name: bun.name().to_string(),
                price: bun.price(),
            },
            ingredients: burger
                .ingredients()
                .iter()
                .map(|i| IngredientLine {
                    kind: i.kind(),
                    name: i.name().to_string(),
                    price: i.price(),
                })
                .collect(),
            total: burger.get_price()?,
        })
    }

    /// Pretty-printed JSON form
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
