//! Test fixtures
//!
//! Factory functions producing random but real Stellar Burgers menu
//! entries. Every call draws afresh, so tests must not assume a particular
//! name or price.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::adapters::memory_menu::{STELLAR_BUNS, STELLAR_FILLINGS, STELLAR_SAUCES};
use crate::domain::entities::{Bun, Burger, Ingredient, IngredientType};

fn pick(table: &[(&'static str, u64)]) -> (&'static str, u64) {
    *table
        .choose(&mut rand::thread_rng())
        .expect("fixture table is not empty")
}

/// Create a random Stellar bun
pub fn new_bun() -> Bun {
    let (name, price) = pick(STELLAR_BUNS);
    Bun::new(name, price)
}

/// Create a random Stellar sauce
pub fn new_sauce() -> Ingredient {
    let (name, price) = pick(STELLAR_SAUCES);
    Ingredient::new(IngredientType::Sauce, name, price)
}

/// Create a random Stellar filling
pub fn new_filling() -> Ingredient {
    let (name, price) = pick(STELLAR_FILLINGS);
    Ingredient::new(IngredientType::Filling, name, price)
}

/// Create a random sauce or filling
pub fn new_ingredient() -> Ingredient {
    if rand::thread_rng().gen_bool(0.5) {
        new_sauce()
    } else {
        new_filling()
    }
}

/// Create a burger with a random bun, then a filling and a sauce
pub fn new_burger() -> Burger {
    let mut burger = Burger::new();
    burger.set_buns(new_bun());
    burger.add_ingredient(new_filling());
    burger.add_ingredient(new_sauce());
    burger
}

/// Create a burger with a random bun and `count` random ingredients
pub fn new_burger_with(count: usize) -> Burger {
    let mut burger = Burger::new();
    burger.set_buns(new_bun());
    for _ in 0..count {
        burger.add_ingredient(new_ingredient());
    }
    burger
}
