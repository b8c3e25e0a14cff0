//! In-memory menu catalog
//!
//! Static menus compiled into the binary. `standard` is the small demo
//! menu; `stellar` is the Stellar Burgers menu.

use crate::domain::entities::{Bun, Ingredient, IngredientType};
use crate::domain::ports::MenuCatalog;

/// Stellar Burgers buns: (name, price)
pub const STELLAR_BUNS: &[(&str, u64)] = &[
    ("Краторная булка N-200i", 1255),
    ("Флюоресцентная булка R2-D3", 988),
];

/// Stellar Burgers sauces: (name, price)
pub const STELLAR_SAUCES: &[(&str, u64)] = &[
    ("Соус Spicy-X", 90),
    ("Соус фирменный Space Sauce", 80),
    ("Соус традиционный галактический", 15),
    ("Соус с шипами Антарианского плоскоходца", 88),
];

/// Stellar Burgers fillings: (name, price)
pub const STELLAR_FILLINGS: &[(&str, u64)] = &[
    ("Мясо бессмертных моллюсков Protostomia", 1337),
    ("Говяжий метеорит (отбивная)", 3000),
    ("Биокотлета из марсианской Магнолии", 424),
    ("Филе Люминесцентного тетраодонтимформа", 988),
    ("Хрустящие минеральные кольца", 300),
    ("Плоды Фалленианского дерева", 874),
    ("Кристаллы марсианских альфа-сахаридов", 762),
    ("Мини-салат Экзо-Плантаго", 4400),
    ("Сыр с астероидной плесенью", 4142),
];

/// A menu held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryMenu {
    buns: Vec<Bun>,
    ingredients: Vec<Ingredient>,
}

impl InMemoryMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo menu: three buns, three sauces, three fillings
    pub fn standard() -> Self {
        Self::new()
            .with_bun(Bun::new("black bun", 100))
            .with_bun(Bun::new("white bun", 200))
            .with_bun(Bun::new("red bun", 300))
            .with_ingredient(Ingredient::sauce("hot sauce", 100))
            .with_ingredient(Ingredient::sauce("sour cream", 200))
            .with_ingredient(Ingredient::sauce("chili sauce", 300))
            .with_ingredient(Ingredient::filling("cutlet", 100))
            .with_ingredient(Ingredient::filling("dinosaur", 200))
            .with_ingredient(Ingredient::filling("sausage", 300))
    }

    /// The Stellar Burgers menu
    pub fn stellar() -> Self {
        let buns = STELLAR_BUNS
            .iter()
            .map(|&(name, price)| Bun::new(name, price))
            .collect();
        let sauces = STELLAR_SAUCES
            .iter()
            .map(|&(name, price)| Ingredient::new(IngredientType::Sauce, name, price));
        let fillings = STELLAR_FILLINGS
            .iter()
            .map(|&(name, price)| Ingredient::new(IngredientType::Filling, name, price));

        Self {
            buns,
            ingredients: sauces.chain(fillings).collect(),
        }
    }

    /// Add a bun to the end of the menu
    pub fn with_bun(mut self, bun: Bun) -> Self {
        self.buns.push(bun);
        self
    }

    /// Add an ingredient to the end of the menu
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }
}

impl MenuCatalog for InMemoryMenu {
    fn available_buns(&self) -> &[Bun] {
        &self.buns
    }

    fn available_ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }
}
