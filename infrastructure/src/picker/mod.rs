//! Random drink selection.
//!
//! [`RandomDrinkPicker`] implements the
//! [`DrinkPicker`](barista_application::DrinkPicker) port with a uniform
//! draw from `rand`'s standard generator.

use barista_application::DrinkPicker;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random picker. Consecutive picks may repeat.
#[derive(Debug, Clone)]
pub struct RandomDrinkPicker {
    rng: StdRng,
}

impl RandomDrinkPicker {
    /// Picker seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic picker; the same seed yields the same drink sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, otherwise from entropy
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl DrinkPicker for RandomDrinkPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barista_application::{RoundController, StaticDrinkRepository};
    use barista_domain::{Drink, Ingredient, Recipe};

    fn drink(name: &str) -> Drink {
        let recipe = Recipe::from_fn(|i| i.catalog()[0].to_string());
        Drink::new(name, recipe).unwrap()
    }

    #[test]
    fn test_pick_stays_in_range() {
        let mut picker = RandomDrinkPicker::seeded(7);
        for _ in 0..500 {
            assert!(picker.pick(3) < 3);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomDrinkPicker::seeded(42);
        let mut b = RandomDrinkPicker::seeded(42);
        let seq_a: Vec<_> = (0..20).map(|_| a.pick(10)).collect();
        let seq_b: Vec<_> = (0..20).map(|_| b.pick(10)).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_two_drinks_selected_evenly() {
        let repo = StaticDrinkRepository::new(vec![drink("Latte"), drink("Mocha")]);
        let mut controller =
            RoundController::new(&repo, RandomDrinkPicker::seeded(2024)).unwrap();

        let rounds = 1000;
        let mut lattes = 0;
        for _ in 0..rounds {
            if controller.start_new_round().unwrap().name() == "Latte" {
                lattes += 1;
            }
            // every round starts blank
            assert_eq!(controller.guess(Ingredient::Milk), "");
        }

        let share = lattes as f64 / rounds as f64;
        assert!((0.45..=0.55).contains(&share), "Latte share was {share}");
    }

    #[test]
    fn test_single_drink_always_picked() {
        let mut picker = RandomDrinkPicker::from_seed_option(None);
        for _ in 0..50 {
            assert_eq!(picker.pick(1), 0);
        }
    }
}
