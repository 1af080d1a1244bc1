//! Ingredient value object and the fixed ingredient catalog

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four recipe dimensions a player has to guess.
///
/// The order of [`Ingredient::ALL`] is the display order and the slot order
/// of [`IngredientMap`](super::IngredientMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ingredient {
    Temperature,
    Syrup,
    Milk,
    Blended,
}

impl Ingredient {
    /// All ingredients in display order
    pub const ALL: [Ingredient; 4] = [
        Ingredient::Temperature,
        Ingredient::Syrup,
        Ingredient::Milk,
        Ingredient::Blended,
    ];

    /// Slot index inside an `IngredientMap`
    pub fn index(self) -> usize {
        match self {
            Ingredient::Temperature => 0,
            Ingredient::Syrup => 1,
            Ingredient::Milk => 2,
            Ingredient::Blended => 3,
        }
    }

    /// Stable lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Ingredient::Temperature => "temperature",
            Ingredient::Syrup => "syrup",
            Ingredient::Milk => "milk",
            Ingredient::Blended => "blended",
        }
    }

    /// Heading shown above the guess field
    pub fn title(&self) -> &'static str {
        match self {
            Ingredient::Temperature => "Temperature",
            Ingredient::Syrup => "Syrup Option",
            Ingredient::Milk => "Milk",
            Ingredient::Blended => "Blended",
        }
    }

    /// Key used for this ingredient in the drink dataset
    pub fn recipe_key(&self) -> &'static str {
        match self {
            Ingredient::Temperature => "temp",
            other => other.as_str(),
        }
    }

    /// The fixed, ordered valid-choice labels for this ingredient
    pub fn catalog(&self) -> &'static [&'static str] {
        match self {
            Ingredient::Temperature => &["hot", "lukewarm", "cold"],
            Ingredient::Syrup => &[
                "mocha", "vanilla", "toffee", "maple", "caramel", "other", "none",
            ],
            Ingredient::Milk => &["cow", "oat", "goat", "almond", "none"],
            Ingredient::Blended => &["yes", "no"],
        }
    }

    /// Whether `value` is one of the catalog labels (exact, case-sensitive)
    pub fn accepts(&self, value: &str) -> bool {
        self.catalog().contains(&value)
    }

    /// Next ingredient in display order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous ingredient in display order, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ingredient {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "temperature" | "temp" => Ok(Ingredient::Temperature),
            "syrup" => Ok(Ingredient::Syrup),
            "milk" => Ok(Ingredient::Milk),
            "blended" => Ok(Ingredient::Blended),
            other => Err(DomainError::UnknownIngredient(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        assert_eq!(Ingredient::Temperature.catalog(), &["hot", "lukewarm", "cold"]);
        assert_eq!(Ingredient::Blended.catalog(), &["yes", "no"]);
        assert_eq!(Ingredient::Syrup.catalog().len(), 7);
        assert_eq!(Ingredient::Milk.catalog().len(), 5);
    }

    #[test]
    fn test_accepts_is_case_sensitive() {
        assert!(Ingredient::Milk.accepts("oat"));
        assert!(!Ingredient::Milk.accepts("Oat"));
        assert!(!Ingredient::Milk.accepts(" oat"));
        assert!(!Ingredient::Milk.accepts(""));
    }

    #[test]
    fn test_none_is_shared_between_syrup_and_milk() {
        assert!(Ingredient::Syrup.accepts("none"));
        assert!(Ingredient::Milk.accepts("none"));
        assert!(!Ingredient::Blended.accepts("none"));
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, ingredient) in Ingredient::ALL.iter().enumerate() {
            assert_eq!(ingredient.index(), i);
        }
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Ingredient::Blended.next(), Ingredient::Temperature);
        assert_eq!(Ingredient::Temperature.prev(), Ingredient::Blended);
        assert_eq!(Ingredient::Syrup.next().prev(), Ingredient::Syrup);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("temp".parse::<Ingredient>().unwrap(), Ingredient::Temperature);
        assert_eq!("Milk".parse::<Ingredient>().unwrap(), Ingredient::Milk);
        assert_eq!(
            "foam".parse::<Ingredient>(),
            Err(DomainError::UnknownIngredient("foam".to_string()))
        );
    }

    #[test]
    fn test_recipe_key() {
        assert_eq!(Ingredient::Temperature.recipe_key(), "temp");
        assert_eq!(Ingredient::Blended.recipe_key(), "blended");
    }
}
