//! TUI application state
//!
//! Everything the TUI renders that is not round state. Round state stays in
//! the [`RoundController`](barista_application::RoundController) and is read
//! through a snapshot each frame.

use super::event::TuiEvent;
use super::mode::InputMode;
use barista_domain::Ingredient;
use std::time::{Duration, Instant};

/// Central TUI state, owned by the TuiApp loop
pub struct TuiState {
    pub mode: InputMode,
    /// Guess field receiving edits
    pub focus: Ingredient,
    pub show_help: bool,
    pub flash_message: Option<(String, Instant)>,
    pub rounds_played: usize,
    pub should_quit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            mode: InputMode::default(),
            focus: Ingredient::Temperature,
            show_help: false,
            flash_message: None,
            rounds_played: 0,
            should_quit: false,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash_message = Some((message.into(), Instant::now()));
    }

    /// Drop the flash message once it is older than `ttl`
    pub fn expire_flash(&mut self, ttl: Duration) {
        if let Some((_, at)) = &self.flash_message
            && at.elapsed() >= ttl
        {
            self.flash_message = None;
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Apply an event from the round observer
    pub fn apply_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::RoundStarted { drink_name } => {
                self.rounds_played += 1;
                self.focus = Ingredient::Temperature;
                self.mode = InputMode::Normal;
                self.set_flash(format!("New order: {drink_name}"));
            }
            TuiEvent::AnswerChecked { correct, total } => {
                let message = if correct == total {
                    "Perfect! Press n for the next order".to_string()
                } else {
                    format!("{correct}/{total} correct")
                };
                self.set_flash(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps() {
        let mut state = TuiState::new();
        state.focus_prev();
        assert_eq!(state.focus, Ingredient::Blended);
        state.focus_next();
        assert_eq!(state.focus, Ingredient::Temperature);
    }

    #[test]
    fn test_round_started_resets_focus_and_mode() {
        let mut state = TuiState::new();
        state.focus = Ingredient::Milk;
        state.mode = InputMode::Insert;

        state.apply_event(TuiEvent::RoundStarted {
            drink_name: "Latte".to_string(),
        });

        assert_eq!(state.focus, Ingredient::Temperature);
        assert_eq!(state.mode, InputMode::Normal);
        assert_eq!(state.rounds_played, 1);
        assert_eq!(state.flash_message.unwrap().0, "New order: Latte");
    }

    #[test]
    fn test_answer_checked_flash() {
        let mut state = TuiState::new();
        state.apply_event(TuiEvent::AnswerChecked { correct: 2, total: 4 });
        assert_eq!(state.flash_message.as_ref().unwrap().0, "2/4 correct");

        state.apply_event(TuiEvent::AnswerChecked { correct: 4, total: 4 });
        assert!(state.flash_message.unwrap().0.starts_with("Perfect!"));
    }

    #[test]
    fn test_expire_flash() {
        let mut state = TuiState::new();
        state.set_flash("hello");
        state.expire_flash(Duration::from_secs(60));
        assert!(state.flash_message.is_some());
        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }
}
