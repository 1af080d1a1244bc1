//! Round observer port
//!
//! Defines the interface for reacting to round state changes.

use barista_domain::{Ingredient, RoundSnapshot};

/// Callback for round lifecycle updates
///
/// Implementations live in the presentation layer and typically schedule a
/// re-render or show a short notice.
pub trait RoundObserver: Send + Sync {
    /// Called after a new drink has been chosen
    fn on_round_started(&self, snapshot: &RoundSnapshot);

    /// Called after one guess has changed
    fn on_guess_updated(&self, _ingredient: Ingredient, _snapshot: &RoundSnapshot) {}

    /// Called after all verdicts have been replaced
    fn on_answer_checked(&self, snapshot: &RoundSnapshot);
}

/// No-op observer for when nobody is watching
pub struct NoRoundObserver;

impl RoundObserver for NoRoundObserver {
    fn on_round_started(&self, _snapshot: &RoundSnapshot) {}
    fn on_answer_checked(&self, _snapshot: &RoundSnapshot) {}
}
