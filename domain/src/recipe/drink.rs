//! Drink entity

use super::ingredient::Ingredient;
use super::ingredient_map::IngredientMap;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Reference value per ingredient for one drink
pub type Recipe = IngredientMap<String>;

/// An entry of the drink dataset (Entity)
///
/// Read-only once loaded. Reference values are not required to be catalog
/// labels; an off-catalog value simply can never be guessed correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    name: String,
    recipe: Recipe,
}

impl Drink {
    /// Create a drink, rejecting blank names
    pub fn new(name: impl Into<String>, recipe: Recipe) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidDrink("drink name cannot be empty".to_string()));
        }
        Ok(Self { name, recipe })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Reference value for one ingredient
    pub fn reference(&self, ingredient: Ingredient) -> &str {
        &self.recipe[ingredient]
    }

    /// Ingredients whose reference value is not a catalog label
    pub fn off_catalog_ingredients(&self) -> Vec<Ingredient> {
        self.recipe
            .iter()
            .filter(|(ingredient, value)| !ingredient.accepts(value))
            .map(|(ingredient, _)| ingredient)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(temp: &str, syrup: &str, milk: &str, blended: &str) -> Recipe {
        let mut recipe = Recipe::default();
        recipe[Ingredient::Temperature] = temp.to_string();
        recipe[Ingredient::Syrup] = syrup.to_string();
        recipe[Ingredient::Milk] = milk.to_string();
        recipe[Ingredient::Blended] = blended.to_string();
        recipe
    }

    #[test]
    fn test_drink_creation() {
        let drink = Drink::new("Latte", recipe("hot", "vanilla", "oat", "no")).unwrap();
        assert_eq!(drink.name(), "Latte");
        assert_eq!(drink.reference(Ingredient::Milk), "oat");
        assert!(drink.off_catalog_ingredients().is_empty());
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Drink::new("   ", recipe("hot", "none", "none", "no"));
        assert!(matches!(result, Err(DomainError::InvalidDrink(_))));
    }

    #[test]
    fn test_off_catalog_ingredients() {
        let drink = Drink::new("Odd", recipe("warm", "none", "soy", "no")).unwrap();
        assert_eq!(
            drink.off_catalog_ingredients(),
            vec![Ingredient::Temperature, Ingredient::Milk]
        );
    }
}
