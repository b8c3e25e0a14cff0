//! Order service
//!
//! Assembles burgers from a menu catalog. Burgers built here borrow their
//! components from the catalog instead of cloning them.

use crate::domain::entities::{Bun, Burger, Ingredient};
use crate::domain::ports::MenuCatalog;
use crate::error::DomainError;

/// Menu positions used by the demo order
const DEMO_INGREDIENTS: [usize; 4] = [1, 4, 3, 5];

/// Service for assembling orders from a menu
pub struct OrderService<C>
where
    C: MenuCatalog,
{
    catalog: C,
}

impl<C> OrderService<C>
where
    C: MenuCatalog,
{
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// The house demo order
    ///
    /// 1. First bun on the menu
    /// 2. Ingredients at menu positions 1, 4, 3 and 5
    /// 3. Move the third ingredient up to second place
    /// 4. Drop the fourth ingredient
    pub fn demo_order(&self) -> Result<Burger<&Bun, &Ingredient>, DomainError> {
        let buns = self.catalog.available_buns();
        let ingredients = self.catalog.available_ingredients();

        let mut burger = Burger::new();
        burger.set_buns(buns.first().ok_or(DomainError::EmptyMenu)?);
        for index in DEMO_INGREDIENTS {
            let ingredient = ingredients.get(index).ok_or(DomainError::IndexOutOfRange {
                index,
                len: ingredients.len(),
            })?;
            burger.add_ingredient(ingredient);
        }
        burger.move_ingredient(2, 1)?;
        burger.remove_ingredient(3)?;

        tracing::info!(ingredients = burger.len(), "Assembled demo order");
        Ok(burger)
    }

    /// Assemble a burger from menu names
    ///
    /// With no bun name the first bun on the menu is used.
    pub fn custom_order<S>(
        &self,
        bun: Option<&str>,
        ingredients: &[S],
    ) -> Result<Burger<&Bun, &Ingredient>, DomainError>
    where
        S: AsRef<str>,
    {
        let bun = match bun {
            Some(name) => self.catalog.find_bun(name)?,
            None => self
                .catalog
                .available_buns()
                .first()
                .ok_or(DomainError::EmptyMenu)?,
        };

        let mut burger = Burger::new();
        burger.set_buns(bun);
        for name in ingredients {
            burger.add_ingredient(self.catalog.find_ingredient(name.as_ref())?);
        }

        tracing::info!(ingredients = burger.len(), "Assembled custom order");
        Ok(burger)
    }
}
