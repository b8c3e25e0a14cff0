//! Ingredient domain entity
//!
//! Sauces and fillings stacked between the bun halves.

use serde::{Deserialize, Serialize};

use crate::domain::ports::{MenuItem, Topping};

/// Ingredient category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientType {
    Sauce,
    Filling,
}

impl std::fmt::Display for IngredientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngredientType::Sauce => write!(f, "sauce"),
            IngredientType::Filling => write!(f, "filling"),
        }
    }
}

impl std::str::FromStr for IngredientType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sauce" => Ok(IngredientType::Sauce),
            "filling" => Ok(IngredientType::Filling),
            _ => Err(format!("Unknown ingredient type: {}", s)),
        }
    }
}

/// A sauce or filling from the menu
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "type")]
    kind: IngredientType,
    name: String,
    price: u64,
}

impl Ingredient {
    pub fn new(kind: IngredientType, name: impl Into<String>, price: u64) -> Self {
        Self {
            kind,
            name: name.into(),
            price,
        }
    }

    pub fn sauce(name: impl Into<String>, price: u64) -> Self {
        Self::new(IngredientType::Sauce, name, price)
    }

    pub fn filling(name: impl Into<String>, price: u64) -> Self {
        Self::new(IngredientType::Filling, name, price)
    }
}

impl MenuItem for Ingredient {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> u64 {
        self.price
    }
}

impl Topping for Ingredient {
    fn kind(&self) -> IngredientType {
        self.kind
    }
}
