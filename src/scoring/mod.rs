//! Multi-dimension scoring of item combinations.
//!
//! A [`Dimension`] is either a stored attribute or one of the two composite
//! sums (`negation`, `resistance`). Scoring is a pure function of the items
//! and the requested dimensions; it runs once per admissible combination,
//! after the weight check has passed.

mod scorer;
mod types;

pub use scorer::score;
pub use types::{Dimension, Scores};
