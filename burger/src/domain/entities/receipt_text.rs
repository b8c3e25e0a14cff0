//! Text receipt layout
//!
//! The receipt shows the burger the way it is stacked: bun on top, each
//! ingredient in order, bun at the bottom, then the total.

use crate::domain::ports::{MenuItem, Topping};

/// Render a text receipt
pub fn render_receipt<B, I>(bun: &B, ingredients: &[I], total: u64) -> String
where
    B: MenuItem,
    I: Topping,
{
    let mut buf = String::new();

    buf.push_str(&render_bun(bun));
    for ingredient in ingredients {
        buf.push_str(&render_ingredient(ingredient));
    }
    buf.push_str(&render_bun(bun));

    buf.push('\n');
    buf.push_str(&format!("Price: {}", total));

    buf
}

fn render_bun<B: MenuItem>(bun: &B) -> String {
    format!("(==== {} ====)\n", bun.name())
}

fn render_ingredient<I: Topping>(ingredient: &I) -> String {
    format!("= {} {} =\n", ingredient.kind(), ingredient.name())
}
