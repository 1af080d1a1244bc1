//! Configuration file loading for barista-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./barista.toml` or `./.barista.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/barista-quiz/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileGameConfig, FileOutputConfig, FileTuiConfig, GameOverrides};
pub use loader::ConfigLoader;
