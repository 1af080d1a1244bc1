//! Round observer that forwards lifecycle changes to the TUI loop

use super::event::TuiEvent;
use barista_application::RoundObserver;
use barista_domain::{Ingredient, RoundSnapshot};
use tokio::sync::mpsc;

/// Bridges [`RoundObserver`] callbacks onto the TUI event channel
pub struct TuiRoundObserver {
    tx: mpsc::UnboundedSender<TuiEvent>,
}

impl TuiRoundObserver {
    pub fn new(tx: mpsc::UnboundedSender<TuiEvent>) -> Self {
        Self { tx }
    }
}

impl RoundObserver for TuiRoundObserver {
    fn on_round_started(&self, snapshot: &RoundSnapshot) {
        let _ = self.tx.send(TuiEvent::RoundStarted {
            drink_name: snapshot.drink_name.clone().unwrap_or_default(),
        });
    }

    fn on_answer_checked(&self, snapshot: &RoundSnapshot) {
        let _ = self.tx.send(TuiEvent::AnswerChecked {
            correct: snapshot.correct_count(),
            total: Ingredient::ALL.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barista_domain::{Drink, Recipe, Round};

    fn latte_round() -> Round {
        let mut recipe = Recipe::default();
        recipe[Ingredient::Temperature] = "hot".to_string();
        recipe[Ingredient::Syrup] = "vanilla".to_string();
        recipe[Ingredient::Milk] = "oat".to_string();
        recipe[Ingredient::Blended] = "no".to_string();
        Round::start(Drink::new("Latte", recipe).unwrap())
    }

    #[test]
    fn test_forwards_start_and_check_only() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let observer = TuiRoundObserver::new(tx);
        let mut round = latte_round();

        observer.on_round_started(&round.snapshot());
        round.set_guess(Ingredient::Temperature, "hot").unwrap();
        observer.on_guess_updated(Ingredient::Temperature, &round.snapshot());
        round.check().unwrap();
        observer.on_answer_checked(&round.snapshot());

        assert_eq!(
            rx.try_recv().unwrap(),
            TuiEvent::RoundStarted {
                drink_name: "Latte".to_string()
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            TuiEvent::AnswerChecked {
                correct: 1,
                total: 4
            }
        );
        assert!(rx.try_recv().is_err());
    }
}
