//! Verdict value object and the answer-evaluation rule

use crate::recipe::{Drink, Ingredient, IngredientMap};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-ingredient outcome of a check
///
/// # Example
///
/// ```
/// use barista_domain::{Ingredient, Verdict};
///
/// assert_eq!(Verdict::judge(Ingredient::Milk, "oat", "oat"), Verdict::Correct);
/// assert_eq!(Verdict::judge(Ingredient::Milk, "cow", "oat"), Verdict::PartialCorrect);
/// assert_eq!(Verdict::judge(Ingredient::Milk, "soy", "oat"), Verdict::Incorrect);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// The guess is exactly the reference value
    Correct,
    /// The guess is a valid catalog label, but not the reference value
    PartialCorrect,
    /// The guess is not a catalog label at all
    Incorrect,
}

impl Verdict {
    /// Judge one guess.
    ///
    /// Precedence: catalog membership first, then exact (case-sensitive)
    /// equality with the reference value.
    pub fn judge(ingredient: Ingredient, guess: &str, reference: &str) -> Self {
        if !ingredient.accepts(guess) {
            Verdict::Incorrect
        } else if guess != reference {
            Verdict::PartialCorrect
        } else {
            Verdict::Correct
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Correct => "correct",
            Verdict::PartialCorrect => "partial-correct",
            Verdict::Incorrect => "incorrect",
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Judge every guess against a drink's recipe
pub fn evaluate(guesses: &IngredientMap<String>, drink: &Drink) -> IngredientMap<Verdict> {
    guesses.map(|ingredient, guess| Verdict::judge(ingredient, guess, drink.reference(ingredient)))
}
