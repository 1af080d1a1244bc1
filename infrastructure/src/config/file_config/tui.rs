//! TUI configuration from TOML (`[tui]` section)

use serde::{Deserialize, Serialize};

/// Raw TUI configuration from TOML
///
/// # Example
///
/// ```toml
/// [tui]
/// flash_seconds = 3
/// tick_millis = 250
/// stack_threshold = 100
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// How long flash messages stay in the status bar (0 disables expiry)
    pub flash_seconds: u64,
    /// Event loop tick interval in milliseconds
    pub tick_millis: u64,
    /// Terminal width below which the guess panels are stacked vertically
    pub stack_threshold: u16,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            flash_seconds: 4,
            tick_millis: 250,
            stack_threshold: 100,
        }
    }
}
