//! Total map from [`Ingredient`] to a value
//!
//! Holds exactly one slot per ingredient, so guesses, verdicts and recipes
//! can never be partially populated.

use super::ingredient::Ingredient;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientMap<T> {
    slots: [T; 4],
}

impl<T> IngredientMap<T> {
    /// Build a map by computing the value of every ingredient
    pub fn from_fn(mut f: impl FnMut(Ingredient) -> T) -> Self {
        Self {
            slots: Ingredient::ALL.map(&mut f),
        }
    }

    pub fn get(&self, ingredient: Ingredient) -> &T {
        &self.slots[ingredient.index()]
    }

    pub fn set(&mut self, ingredient: Ingredient, value: T) {
        self.slots[ingredient.index()] = value;
    }

    /// Iterate `(ingredient, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Ingredient, &T)> {
        Ingredient::ALL.into_iter().zip(self.slots.iter())
    }

    pub fn map<U>(&self, mut f: impl FnMut(Ingredient, &T) -> U) -> IngredientMap<U> {
        IngredientMap::from_fn(|ingredient| f(ingredient, self.get(ingredient)))
    }
}

impl<T> Index<Ingredient> for IngredientMap<T> {
    type Output = T;

    fn index(&self, ingredient: Ingredient) -> &T {
        self.get(ingredient)
    }
}

impl<T> IndexMut<Ingredient> for IngredientMap<T> {
    fn index_mut(&mut self, ingredient: Ingredient) -> &mut T {
        &mut self.slots[ingredient.index()]
    }
}
