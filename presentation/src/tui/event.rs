//! TUI event types
//!
//! Events emitted by the round observer and applied after each action.

/// Events coming from the round controller via [`TuiRoundObserver`](super::observer::TuiRoundObserver)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A new drink was chosen
    RoundStarted { drink_name: String },
    /// A check finished
    AnswerChecked { correct: usize, total: usize },
}
