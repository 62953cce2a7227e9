//! Core trait for ranking keys.

use crate::scoring::Dimension;
use crate::search::Combination;

/// A value extracted from a combination for ordering.
///
/// Higher values rank first.
pub trait RankKey: Send + Sync {
    /// Computes the ranking value for a combination.
    fn value(&self, combination: &Combination<'_>) -> f64;
}

/// Ranks by the score of one dimension. Unscored dimensions count as zero.
#[derive(Debug, Clone)]
pub struct ByDimension(pub Dimension);

impl RankKey for ByDimension {
    fn value(&self, combination: &Combination<'_>) -> f64 {
        combination.scores.value(&self.0)
    }
}

/// Ranks by unused weight budget.
#[derive(Debug, Clone, Copy)]
pub struct ByHeadroom;

impl RankKey for ByHeadroom {
    fn value(&self, combination: &Combination<'_>) -> f64 {
        combination.headroom
    }
}
