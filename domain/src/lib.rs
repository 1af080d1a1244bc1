//! Domain layer for barista-quiz
//!
//! This crate contains the core game rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Recipe
//!
//! A drink is described by four [`Ingredient`]s. Each ingredient has a fixed
//! catalog of valid labels; a [`Drink`] holds one reference value per
//! ingredient.
//!
//! ## Round
//!
//! A [`Round`] pairs a chosen drink with the player's free-text guesses.
//! Checking the round judges every guess with [`Verdict::judge`]:
//!
//! - **Incorrect**: the guess is not a catalog label
//! - **PartialCorrect**: a catalog label, but not the reference value
//! - **Correct**: exactly the reference value

pub mod config;
pub mod core;
pub mod recipe;
pub mod round;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::error::DomainError;
pub use recipe::{Drink, Ingredient, IngredientMap, Recipe};
pub use round::{Round, RoundPhase, RoundSnapshot, Verdict, evaluate};
