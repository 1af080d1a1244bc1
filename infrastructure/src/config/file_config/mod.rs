//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod game;
mod output;
mod tui;

pub use game::{FileGameConfig, GameOverrides};
pub use output::FileOutputConfig;
pub use tui::FileTuiConfig;

use barista_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Game rules and dataset selection
    pub game: FileGameConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Apply command-line overrides first so the checked values are the ones in use.
    ///
    /// Checks:
    /// 1. `game.drinks_file` points at an existing file
    /// 2. `tui.tick_millis` is non-zero
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Dataset file existence
        if let Some(path) = self.game.drinks_path()
            && !path.exists()
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingFile {
                    field: "game.drinks_file".to_string(),
                    path: path.display().to_string(),
                },
                format!("game.drinks_file: '{}' does not exist", path.display()),
            ));
        }

        // 2. Tick interval
        if self.tui.tick_millis == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "tui.tick_millis".to_string(),
                    value: 0,
                },
                format!(
                    "tui.tick_millis: 0 is not allowed, falling back to {}",
                    FileTuiConfig::default().tick_millis
                ),
            ));
        }

        issues
    }

    /// Tick interval with the zero case replaced by the default
    pub fn effective_tick_millis(&self) -> u64 {
        if self.tui.tick_millis == 0 {
            FileTuiConfig::default().tick_millis
        } else {
            self.tui.tick_millis
        }
    }
}
