//! Candidate filtering.
//!
//! Pruning each slot's catalog before the cross product is expanded is what
//! keeps exhaustive search tractable: the number of full assignments is the
//! product of the per-slot candidate counts that survive this step.

mod engine;
mod types;

pub use engine::filter_items;
pub use types::AvailabilityFilter;
