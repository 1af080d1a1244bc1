//! Drink dataset loading.
//!
//! Provides [`JsonDrinkRepository`], which implements the
//! [`DrinkRepository`](barista_application::DrinkRepository) port over the
//! bundled dataset or a user-supplied JSON file.

mod json_repository;

pub use json_repository::{DatasetError, JsonDrinkRepository};
