//! Burger aggregate
//!
//! A bun plus an ordered stack of ingredients. The aggregate owns its
//! components and is generic over the component ports, so it can hold
//! owned menu entries, borrowed ones (`Burger<&Bun, &Ingredient>`), or
//! test stubs.

use crate::domain::ports::{MenuItem, Topping};
use crate::error::DomainError;
use super::{render_receipt, Bun, Ingredient};

/// A burger being assembled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Burger<B = Bun, I = Ingredient> {
    bun: Option<B>,
    ingredients: Vec<I>,
}

impl<B, I> Burger<B, I> {
    /// An empty burger: no bun, no ingredients
    pub fn new() -> Self {
        Self {
            bun: None,
            ingredients: Vec::new(),
        }
    }

    pub fn bun(&self) -> Option<&B> {
        self.bun.as_ref()
    }

    /// Ingredients in stacking order
    pub fn ingredients(&self) -> &[I] {
        &self.ingredients
    }

    /// Number of ingredients (the bun is not counted)
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), DomainError> {
        if index < self.ingredients.len() {
            Ok(())
        } else {
            tracing::warn!(index, len = self.ingredients.len(), "Ingredient index rejected");
            Err(DomainError::IndexOutOfRange {
                index,
                len: self.ingredients.len(),
            })
        }
    }
}

impl<B, I> Default for Burger<B, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, I> Burger<B, I>
where
    B: MenuItem,
    I: Topping,
{
    /// Set the bun, replacing any bun already set
    pub fn set_buns(&mut self, bun: B) {
        tracing::debug!(bun = bun.name(), "Setting bun");
        self.bun = Some(bun);
    }

    /// Append an ingredient to the top of the stack
    pub fn add_ingredient(&mut self, ingredient: I) {
        tracing::debug!(
            ingredient = ingredient.name(),
            position = self.ingredients.len(),
            "Adding ingredient"
        );
        self.ingredients.push(ingredient);
    }

    /// Remove the ingredient at `index` and hand it back
    pub fn remove_ingredient(&mut self, index: usize) -> Result<I, DomainError> {
        self.check_index(index)?;
        let removed = self.ingredients.remove(index);
        tracing::debug!(ingredient = removed.name(), index, "Removed ingredient");
        Ok(removed)
    }

    /// Move the ingredient at `from` so that it ends up at position `to`.
    ///
    /// Both positions must refer to existing ingredients; on error the
    /// stack is left untouched.
    pub fn move_ingredient(&mut self, from: usize, to: usize) -> Result<(), DomainError> {
        self.check_index(from)?;
        self.check_index(to)?;
        let ingredient = self.ingredients.remove(from);
        tracing::debug!(ingredient = ingredient.name(), from, to, "Moving ingredient");
        self.ingredients.insert(to, ingredient);
        Ok(())
    }

    /// Total price: both bun halves plus every ingredient
    pub fn get_price(&self) -> Result<u64, DomainError> {
        let bun = self.bun.as_ref().ok_or(DomainError::BunNotSet)?;
        let bun_price = bun.price();
        self.ingredients
            .iter()
            .try_fold(bun_price, |total, i| total.checked_add(i.price()))
            .and_then(|total| total.checked_add(bun_price))
            .ok_or_else(|| {
                tracing::warn!(ingredients = self.ingredients.len(), "Burger price overflowed");
                DomainError::PriceOverflow
            })
    }

    /// Render the text receipt for this burger
    pub fn get_receipt(&self) -> Result<String, DomainError> {
        let bun = self.bun.as_ref().ok_or(DomainError::BunNotSet)?;
        let total = self.get_price()?;
        Ok(render_receipt(bun, &self.ingredients, total))
    }
}
