//! Round entity and its read-only snapshot

use super::verdict::{Verdict, evaluate};
use crate::core::error::DomainError;
use crate::recipe::{Drink, Ingredient, IngredientMap};
use serde::Serialize;
use std::fmt;

/// Where a round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// No drink has been chosen yet
    Empty,
    /// A drink is chosen and no verdicts are shown
    InProgress,
    /// Verdicts are shown for every ingredient
    Checked,
}

impl RoundPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundPhase::Empty => "No drink yet",
            RoundPhase::InProgress => "Guessing",
            RoundPhase::Checked => "Checked",
        }
    }
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One play cycle: a chosen drink, the player's guesses and the latest verdicts.
///
/// Guesses and verdicts always cover all four ingredients. Verdicts are
/// either all present (after a check) or all absent; they are replaced
/// wholesale and never mixed between checks.
#[derive(Debug, Clone, Default)]
pub struct Round {
    drink: Option<Drink>,
    guesses: IngredientMap<String>,
    verdicts: IngredientMap<Option<Verdict>>,
}

impl Round {
    /// A round with no drink, before the first start
    pub fn empty() -> Self {
        Self::default()
    }

    /// A fresh round for `drink` with blank guesses and no verdicts
    pub fn start(drink: Drink) -> Self {
        Self {
            drink: Some(drink),
            guesses: IngredientMap::default(),
            verdicts: IngredientMap::default(),
        }
    }

    pub fn drink(&self) -> Option<&Drink> {
        self.drink.as_ref()
    }

    pub fn guesses(&self) -> &IngredientMap<String> {
        &self.guesses
    }

    pub fn verdicts(&self) -> &IngredientMap<Option<Verdict>> {
        &self.verdicts
    }

    pub fn phase(&self) -> RoundPhase {
        if self.drink.is_none() {
            RoundPhase::Empty
        } else if self.verdicts.iter().all(|(_, v)| v.is_some()) {
            RoundPhase::Checked
        } else {
            RoundPhase::InProgress
        }
    }

    /// Replace one guess. Existing verdicts are left as they are.
    pub fn set_guess(
        &mut self,
        ingredient: Ingredient,
        value: impl Into<String>,
    ) -> Result<(), DomainError> {
        if self.drink.is_none() {
            return Err(DomainError::NoActiveRound);
        }
        self.guesses[ingredient] = value.into();
        Ok(())
    }

    pub fn clear_verdicts(&mut self) {
        self.verdicts = IngredientMap::default();
    }

    /// Judge all guesses and replace every verdict at once
    pub fn check(&mut self) -> Result<IngredientMap<Verdict>, DomainError> {
        let drink = self.drink.as_ref().ok_or(DomainError::NoActiveRound)?;
        let verdicts = evaluate(&self.guesses, drink);
        self.verdicts = verdicts.map(|_, v| Some(*v));
        Ok(verdicts)
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            drink_name: self.drink.as_ref().map(|d| d.name().to_string()),
            guesses: self.guesses.clone(),
            verdicts: self.verdicts.clone(),
            phase: self.phase(),
        }
    }
}

/// Read-only copy of a round for observers and renderers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSnapshot {
    pub drink_name: Option<String>,
    pub guesses: IngredientMap<String>,
    pub verdicts: IngredientMap<Option<Verdict>>,
    pub phase: RoundPhase,
}

impl RoundSnapshot {
    /// Number of ingredients currently judged correct
    pub fn correct_count(&self) -> usize {
        self.verdicts
            .iter()
            .filter(|(_, v)| v.is_some_and(|v| v.is_correct()))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;

    fn latte() -> Drink {
        let mut recipe = Recipe::default();
        recipe[Ingredient::Temperature] = "hot".to_string();
        recipe[Ingredient::Syrup] = "vanilla".to_string();
        recipe[Ingredient::Milk] = "oat".to_string();
        recipe[Ingredient::Blended] = "no".to_string();
        Drink::new("Latte", recipe).unwrap()
    }

    #[test]
    fn test_empty_round() {
        let round = Round::empty();
        assert_eq!(round.phase(), RoundPhase::Empty);
        assert!(round.drink().is_none());
        assert_eq!(round.snapshot().drink_name, None);
    }

    #[test]
    fn test_set_guess_without_drink_fails() {
        let mut round = Round::empty();
        assert_eq!(
            round.set_guess(Ingredient::Milk, "oat"),
            Err(DomainError::NoActiveRound)
        );
        assert!(round.guesses()[Ingredient::Milk].is_empty());
    }

    #[test]
    fn test_check_without_drink_fails() {
        let mut round = Round::empty();
        assert_eq!(round.check(), Err(DomainError::NoActiveRound));
        assert_eq!(round.phase(), RoundPhase::Empty);
    }

    #[test]
    fn test_lifecycle_phases() {
        let mut round = Round::start(latte());
        assert_eq!(round.phase(), RoundPhase::InProgress);

        round.set_guess(Ingredient::Milk, "oat").unwrap();
        round.check().unwrap();
        assert_eq!(round.phase(), RoundPhase::Checked);

        // Editing keeps the old verdicts visible
        round.set_guess(Ingredient::Milk, "cow").unwrap();
        assert_eq!(round.phase(), RoundPhase::Checked);
        assert_eq!(round.verdicts()[Ingredient::Milk], Some(Verdict::Correct));

        round.clear_verdicts();
        assert_eq!(round.phase(), RoundPhase::InProgress);
    }

    #[test]
    fn test_check_replaces_all_verdicts() {
        let mut round = Round::start(latte());
        round.set_guess(Ingredient::Temperature, "hot").unwrap();
        round.check().unwrap();
        assert_eq!(
            round.verdicts()[Ingredient::Temperature],
            Some(Verdict::Correct)
        );

        round.set_guess(Ingredient::Temperature, "boiling").unwrap();
        let verdicts = round.check().unwrap();
        assert_eq!(verdicts[Ingredient::Temperature], Verdict::Incorrect);
        assert_eq!(
            round.verdicts()[Ingredient::Temperature],
            Some(Verdict::Incorrect)
        );
    }

    #[test]
    fn test_snapshot_correct_count() {
        let mut round = Round::start(latte());
        round.set_guess(Ingredient::Temperature, "hot").unwrap();
        round.set_guess(Ingredient::Blended, "no").unwrap();
        round.check().unwrap();

        let snapshot = round.snapshot();
        assert_eq!(snapshot.drink_name.as_deref(), Some("Latte"));
        assert_eq!(snapshot.phase, RoundPhase::Checked);
        assert_eq!(snapshot.correct_count(), 2);
    }
}
