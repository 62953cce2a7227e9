//! Exhaustive loadout search.
//!
//! Given a [`SearchRequest`], each requested slot's catalog is filtered to
//! the items that could still fit, then every cross-product assignment is
//! visited by an iterative odometer over per-slot candidate indices. An
//! assignment is admissible when carried load plus item weight stays at or
//! under the [`WeightClass`] ceiling; only admissible assignments are
//! scored.
//!
//! The search is exact: every admissible combination is returned. Its cost
//! is the product of the filtered per-slot candidate counts, which is why
//! [`SearchRequest::max_evaluations`] exists for large catalogs.

mod config;
mod runner;
mod types;

pub use config::{SearchRequest, WeightClass};
pub use runner::{SearchResult, SearchRunner};
pub use types::{Assignment, Combination};
