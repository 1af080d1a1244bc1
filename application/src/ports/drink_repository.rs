//! Drink repository port
//!
//! Read-only access to the drink dataset.

use barista_domain::Drink;

/// Source of the drink dataset.
///
/// The dataset is loaded once by the implementation; callers only read it.
pub trait DrinkRepository: Send + Sync {
    /// Every drink, in dataset order
    fn get_all(&self) -> &[Drink];
}

/// In-memory repository over an owned list of drinks
#[derive(Debug, Clone, Default)]
pub struct StaticDrinkRepository {
    drinks: Vec<Drink>,
}

impl StaticDrinkRepository {
    pub fn new(drinks: Vec<Drink>) -> Self {
        Self { drinks }
    }
}

impl DrinkRepository for StaticDrinkRepository {
    fn get_all(&self) -> &[Drink] {
        &self.drinks
    }
}
