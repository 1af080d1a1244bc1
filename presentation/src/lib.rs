//! Presentation layer for barista-quiz
//!
//! This crate contains CLI definitions, console formatters, and the
//! interactive terminal UI.

pub mod cli;
pub mod config;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::{OutputConfig, TuiConfig};
pub use output::console::ConsoleFormatter;
pub use tui::{GuessInputPanel, TuiApp};
