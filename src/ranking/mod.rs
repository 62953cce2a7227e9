//! Ranking of admissible combinations.
//!
//! A [`Ranker`] is a sequence of [`RankKey`]s evaluated lexicographically:
//! the requested scoring dimensions in caller order, then headroom. Higher
//! values win. Ties on every key keep their enumeration order.
//!
//! Truncation to the top K is left to the caller; see
//! [`LoadoutReport::top`](crate::report::LoadoutReport::top).

mod engine;
mod types;

pub use engine::Ranker;
pub use types::{ByDimension, ByHeadroom, RankKey};
