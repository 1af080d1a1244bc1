//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("The drink catalog is empty; at least one drink is required to play")]
    EmptyCatalog,

    #[error("No round is in progress; start a new round first")]
    NoActiveRound,

    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    #[error("Invalid drink: {0}")]
    InvalidDrink(String),
}

impl DomainError {
    /// Errors the player can recover from by starting a round
    pub fn is_no_active_round(&self) -> bool {
        matches!(self, DomainError::NoActiveRound)
    }
}
