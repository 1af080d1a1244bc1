//! Round lifecycle and answer evaluation.

pub mod entities;
pub mod verdict;

pub use entities::{Round, RoundPhase, RoundSnapshot};
pub use verdict::{Verdict, evaluate};
