//! Application layer for barista-quiz
//!
//! This crate contains the round use case, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GameBehaviorConfig;
pub use ports::{
    drink_picker::{DrinkPicker, SequencePicker},
    drink_repository::{DrinkRepository, StaticDrinkRepository},
    round_observer::{NoRoundObserver, RoundObserver},
};
pub use use_cases::round_controller::{RoundController, RoundError};
