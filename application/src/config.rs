//! Application-level configuration.
//!
//! This module provides configuration types that control how the round
//! use case behaves.

use serde::{Deserialize, Serialize};

/// Game behavior configuration.
///
/// Controls optional variations of the round lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameBehaviorConfig {
    /// Clear every verdict as soon as a guess is edited after a check.
    ///
    /// Off by default: earlier verdicts stay visible next to edited guesses
    /// until the next check.
    pub clear_verdicts_on_edit: bool,
}

impl GameBehaviorConfig {
    pub fn with_clear_verdicts_on_edit(mut self, enable: bool) -> Self {
        self.clear_verdicts_on_edit = enable;
        self
    }
}
