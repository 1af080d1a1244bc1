//! Ports (interfaces) implemented by outer layers.

pub mod drink_picker;
pub mod drink_repository;
pub mod round_observer;
