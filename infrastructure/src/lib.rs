//! Infrastructure layer for barista-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod dataset;
pub mod picker;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGameConfig, FileOutputConfig, FileTuiConfig, GameOverrides,
};
pub use dataset::{DatasetError, JsonDrinkRepository};
pub use picker::RandomDrinkPicker;
