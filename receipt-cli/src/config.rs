//! Environment configuration
//!
//! Read once at startup. A `.env` file in the working directory is loaded
//! first; real environment variables win over it.

use std::env;

use anyhow::{anyhow, Context, Result};

/// Which built-in menu to order from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Standard,
    Stellar,
}

impl std::str::FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(MenuChoice::Standard),
            "stellar" => Ok(MenuChoice::Stellar),
            _ => Err(format!("Unknown menu: {}", s)),
        }
    }
}

/// How the receipt is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub menu: MenuChoice,
    /// Bun name; the first bun on the menu when unset
    pub bun: Option<String>,
    /// Ingredient names in stacking order; the house demo order when unset
    pub ingredients: Option<Vec<String>>,
    pub format: OutputFormat,
    /// Log filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let menu = lookup("RECEIPT_MENU")
            .map(|v| v.parse::<MenuChoice>())
            .transpose()
            .map_err(|e| anyhow!(e))
            .context("Invalid RECEIPT_MENU")?
            .unwrap_or(MenuChoice::Standard);

        let format = lookup("RECEIPT_FORMAT")
            .map(|v| v.parse::<OutputFormat>())
            .transpose()
            .map_err(|e| anyhow!(e))
            .context("Invalid RECEIPT_FORMAT")?
            .unwrap_or(OutputFormat::Text);

        Ok(Self {
            menu,
            bun: lookup("RECEIPT_BUN").filter(|v| !v.trim().is_empty()),
            ingredients: lookup("RECEIPT_INGREDIENTS").map(|v| parse_list(&v)),
            format,
            log_filter: lookup("RECEIPT_LOG")
                .unwrap_or_else(|| "info,stellar_burger=debug".to_string()),
        })
    }

    /// Whether the order was spelled out instead of using the demo order
    pub fn is_custom_order(&self) -> bool {
        self.bun.is_some() || self.ingredients.is_some()
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
