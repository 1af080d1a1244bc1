//! Presentation-level configuration
//!
//! Configuration for terminal UI behavior and console output.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// TUI configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Flash message lifetime in seconds (0 keeps them until replaced)
    pub flash_seconds: u64,
    /// Event loop tick interval in milliseconds
    pub tick_millis: u64,
    /// Terminal width below which guess panels are stacked
    pub stack_threshold: u16,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            flash_seconds: 4,
            tick_millis: 250,
            stack_threshold: 100,
        }
    }
}

impl TuiConfig {
    pub fn flash_ttl(&self) -> Option<Duration> {
        (self.flash_seconds > 0).then(|| Duration::from_secs(self.flash_seconds))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(1))
    }
}

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_ttl_zero_disables_expiry() {
        let config = TuiConfig {
            flash_seconds: 0,
            ..Default::default()
        };
        assert!(config.flash_ttl().is_none());
        assert_eq!(
            TuiConfig::default().flash_ttl(),
            Some(Duration::from_secs(4))
        );
    }

    #[test]
    fn test_tick_interval_never_zero() {
        let config = TuiConfig {
            tick_millis: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_millis(1));
    }
}
