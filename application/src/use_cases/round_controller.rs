//! Round controller use case
//!
//! Owns the current [`Round`] and is the only place it is mutated. The three
//! lifecycle operations are:
//!
//! ```text
//! start_new_round ──> update_guess* ──> check_answer ──> start_new_round ...
//! ```

use crate::config::GameBehaviorConfig;
use crate::ports::drink_picker::DrinkPicker;
use crate::ports::drink_repository::DrinkRepository;
use crate::ports::round_observer::{NoRoundObserver, RoundObserver};
use barista_domain::{
    DomainError, Drink, Ingredient, IngredientMap, Round, RoundPhase, RoundSnapshot, Verdict,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while driving a round
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Drink picker returned index {index} for {len} drinks")]
    PickOutOfRange { index: usize, len: usize },
}

impl RoundError {
    pub fn is_no_active_round(&self) -> bool {
        matches!(self, RoundError::Domain(e) if e.is_no_active_round())
    }
}

/// Use case owning the round state and its lifecycle
pub struct RoundController<P: DrinkPicker> {
    drinks: Vec<Drink>,
    picker: P,
    behavior: GameBehaviorConfig,
    observer: Arc<dyn RoundObserver>,
    round: Round,
}

impl<P: DrinkPicker> RoundController<P> {
    /// Create a controller over the repository's drinks.
    ///
    /// Fails with `EmptyCatalog` up front, so an empty dataset is caught at
    /// startup rather than on the first round.
    pub fn new(repository: &dyn DrinkRepository, picker: P) -> Result<Self, RoundError> {
        let drinks = repository.get_all().to_vec();
        if drinks.is_empty() {
            return Err(DomainError::EmptyCatalog.into());
        }
        info!("Loaded {} drinks", drinks.len());

        Ok(Self {
            drinks,
            picker,
            behavior: GameBehaviorConfig::default(),
            observer: Arc::new(NoRoundObserver),
            round: Round::empty(),
        })
    }

    pub fn with_behavior(mut self, behavior: GameBehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn RoundObserver>) -> Self {
        self.observer = observer;
        self
    }

    // ==================== Lifecycle ====================

    /// Choose a drink at random and reset guesses and verdicts.
    pub fn start_new_round(&mut self) -> Result<&Drink, RoundError> {
        let len = self.drinks.len();
        if len == 0 {
            return Err(DomainError::EmptyCatalog.into());
        }

        let index = self.picker.pick(len);
        let drink = self
            .drinks
            .get(index)
            .cloned()
            .ok_or(RoundError::PickOutOfRange { index, len })?;

        info!("New round: {}", drink.name());
        self.round = Round::start(drink);
        self.observer.on_round_started(&self.round.snapshot());

        self.round.drink().ok_or(DomainError::NoActiveRound.into())
    }

    /// Replace the guess for one ingredient with raw, unvalidated text.
    pub fn update_guess(
        &mut self,
        ingredient: Ingredient,
        value: impl Into<String>,
    ) -> Result<(), RoundError> {
        let value = value.into();
        debug!("Guess {} = {:?}", ingredient, value);
        self.round.set_guess(ingredient, value)?;

        if self.behavior.clear_verdicts_on_edit && self.round.phase() == RoundPhase::Checked {
            debug!("Clearing verdicts after edit");
            self.round.clear_verdicts();
        }

        self.observer
            .on_guess_updated(ingredient, &self.round.snapshot());
        Ok(())
    }

    /// Judge all four guesses against the current drink's recipe.
    pub fn check_answer(&mut self) -> Result<IngredientMap<Verdict>, RoundError> {
        let verdicts = self.round.check()?;

        debug!(
            "Verdicts: {}",
            verdicts
                .iter()
                .map(|(i, v)| format!("{}={}", i, v))
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.observer.on_answer_checked(&self.round.snapshot());
        Ok(verdicts)
    }

    // ==================== Accessors ====================

    pub fn snapshot(&self) -> RoundSnapshot {
        self.round.snapshot()
    }

    pub fn current_drink(&self) -> Option<&Drink> {
        self.round.drink()
    }

    pub fn guess(&self, ingredient: Ingredient) -> &str {
        &self.round.guesses()[ingredient]
    }

    pub fn verdict(&self, ingredient: Ingredient) -> Option<Verdict> {
        self.round.verdicts()[ingredient]
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase()
    }

    pub fn drink_count(&self) -> usize {
        self.drinks.len()
    }
}
