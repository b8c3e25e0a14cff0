//! Stellar Burgers receipt printer
//!
//! Assembles a burger from a built-in menu and prints its receipt.
//! Without configuration it prints the house demo order; set
//! RECEIPT_BUN / RECEIPT_INGREDIENTS to order something else.

mod config;

use anyhow::{Context, Result};
use stellar_burger::{Bun, Burger, InMemoryMenu, Ingredient, OrderService, ReceiptSummary};
use tracing_subscriber::EnvFilter;

use config::{Config, MenuChoice, OutputFormat};

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so the receipt on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(menu = ?config.menu, format = ?config.format, "Starting receipt printer");

    let menu = match config.menu {
        MenuChoice::Standard => InMemoryMenu::standard(),
        MenuChoice::Stellar => InMemoryMenu::stellar(),
    };
    let service = OrderService::new(menu);

    let burger = if config.is_custom_order() {
        service
            .custom_order(
                config.bun.as_deref(),
                config.ingredients.as_deref().unwrap_or_default(),
            )
            .context("Failed to assemble order")?
    } else {
        service.demo_order().context("Failed to assemble demo order")?
    };

    println!("{}", render(&burger, config.format)?);
    Ok(())
}

fn render(burger: &Burger<&Bun, &Ingredient>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => burger.get_receipt().context("Failed to render receipt"),
        OutputFormat::Json => {
            let summary =
                ReceiptSummary::from_burger(burger).context("Failed to summarize receipt")?;
            summary.to_json().context("Failed to serialize receipt")
        }
    }
}
