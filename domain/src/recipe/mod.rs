//! Recipe vocabulary: ingredients, their catalogs, and drinks.
//!
//! - [`ingredient::Ingredient`]: the four guessable dimensions and their catalogs
//! - [`ingredient_map::IngredientMap`]: one value per ingredient, never partial
//! - [`drink::Drink`]: a named drink with its reference [`drink::Recipe`]

pub mod drink;
pub mod ingredient;
pub mod ingredient_map;

pub use drink::{Drink, Recipe};
pub use ingredient::Ingredient;
pub use ingredient_map::IngredientMap;
