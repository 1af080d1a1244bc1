//! JSON-backed drink repository.
//!
//! Dataset format:
//!
//! ```json
//! { "drinks": [ { "name": "Latte",
//!                 "ingredients": { "temp": "hot", "syrup": "vanilla",
//!                                  "milk": "oat", "blended": "no" } } ] }
//! ```
//!
//! Ingredient keys are matched case-insensitively and `temperature` is accepted
//! for `temp`. Each ingredient must appear exactly once.

use barista_application::DrinkRepository;
use barista_domain::{DomainError, Drink, Ingredient, IngredientMap, Recipe};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Dataset bundled into the binary
const EMBEDDED_DRINKS: &str = include_str!("../../assets/drinks.json");

/// Errors that can occur while loading a drink dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read drink dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed drink dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Drink #{index} is invalid: {source}")]
    InvalidDrink {
        index: usize,
        #[source]
        source: DomainError,
    },
}

/// Raw dataset file structure
#[derive(Debug, Deserialize)]
struct FileDrinkDataset {
    drinks: Vec<FileDrink>,
}

#[derive(Debug, Deserialize)]
struct FileDrink {
    name: String,
    ingredients: BTreeMap<String, String>,
}

impl FileDrink {
    fn into_drink(self) -> Result<Drink, DomainError> {
        let mut values: IngredientMap<Option<String>> = IngredientMap::default();
        for (key, value) in self.ingredients {
            let ingredient: Ingredient = key.parse()?;
            if values[ingredient].replace(value).is_some() {
                return Err(DomainError::InvalidDrink(format!(
                    "ingredient '{}' is given more than once",
                    ingredient.recipe_key()
                )));
            }
        }

        let mut recipe = Recipe::default();
        for ingredient in Ingredient::ALL {
            recipe[ingredient] = values[ingredient].take().ok_or_else(|| {
                DomainError::InvalidDrink(format!(
                    "missing ingredient '{}'",
                    ingredient.recipe_key()
                ))
            })?;
        }

        Drink::new(self.name, recipe)
    }
}

/// Drink repository loaded once from JSON and read-only afterwards
#[derive(Debug, Clone)]
pub struct JsonDrinkRepository {
    drinks: Vec<Drink>,
    source: String,
}

impl JsonDrinkRepository {
    /// Load the dataset bundled with the binary
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json_str(EMBEDDED_DRINKS, "embedded")
    }

    /// Load a dataset file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content, path.display().to_string())
    }

    /// Parse a dataset from a JSON string. `source` is only used for logging.
    pub fn from_json_str(json: &str, source: impl Into<String>) -> Result<Self, DatasetError> {
        let source = source.into();
        let dataset: FileDrinkDataset = serde_json::from_str(json)?;

        let drinks = dataset
            .drinks
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                raw.into_drink()
                    .map_err(|source| DatasetError::InvalidDrink { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for drink in &drinks {
            let off_catalog = drink.off_catalog_ingredients();
            if !off_catalog.is_empty() {
                warn!(
                    "Drink '{}' has reference values outside the catalog for: {}",
                    drink.name(),
                    off_catalog
                        .iter()
                        .map(|i| i.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        }

        debug!("Loaded {} drinks from {}", drinks.len(), source);
        Ok(Self { drinks, source })
    }

    /// Where the dataset came from ("embedded" or a file path)
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl DrinkRepository for JsonDrinkRepository {
    fn get_all(&self) -> &[Drink] {
        &self.drinks
    }
}
