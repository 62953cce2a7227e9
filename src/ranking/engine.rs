//! Multi-key ranking engine.

use super::types::{ByDimension, ByHeadroom, RankKey};
use crate::scoring::Dimension;
use crate::search::Combination;
use std::cmp::Ordering;

/// Orders combinations by a prioritized list of keys.
///
/// Keys are consulted in order; a later key only decides when every
/// earlier key is exactly equal. Higher values come first. The sort is
/// stable, so combinations tied on every key keep their input order.
///
/// # Examples
///
/// ```ignore
/// let ranker = Ranker::for_dimensions(&[Dimension::Negation]);
/// let ranked = ranker.rank(result.combinations);
/// ```
pub struct Ranker {
    keys: Vec<Box<dyn RankKey>>,
}

impl Ranker {
    /// Creates a ranker with no keys.
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Ranks by each dimension in order, then by headroom.
    pub fn for_dimensions(dimensions: &[Dimension]) -> Self {
        dimensions
            .iter()
            .fold(Self::new(), |ranker, d| ranker.with_key(ByDimension(d.clone())))
            .with_key(ByHeadroom)
    }

    /// Appends a key with the lowest priority so far.
    pub fn with_key<K: RankKey + 'static>(mut self, key: K) -> Self {
        self.keys.push(Box::new(key));
        self
    }

    fn key_values(&self, combination: &Combination<'_>) -> Vec<f64> {
        // + 0.0 folds -0.0 into 0.0 so the two tie under total_cmp
        self.keys
            .iter()
            .map(|k| k.value(combination) + 0.0)
            .collect()
    }

    /// Consumes the combinations and returns them in rank order.
    pub fn rank<'a>(&self, combinations: Vec<Combination<'a>>) -> Vec<Combination<'a>> {
        if self.keys.is_empty() {
            return combinations;
        }

        let mut keyed: Vec<(Vec<f64>, Combination<'a>)> = combinations
            .into_iter()
            .map(|c| (self.key_values(&c), c))
            .collect();
        keyed.sort_by(|(va, _), (vb, _)| descending(va, vb));
        keyed.into_iter().map(|(_, c)| c).collect()
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

/// Lexicographic descending order on key vectors: the first key that
/// differs decides.
fn descending(a: &[f64], b: &[f64]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(va, vb)| vb.total_cmp(va))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}
