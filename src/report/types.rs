//! Ranked search output.

use crate::scoring::Dimension;
use crate::search::Combination;

/// Ranked combinations plus the context needed to present them.
#[derive(Debug, Clone)]
pub struct LoadoutReport<'a> {
    /// Admissible combinations, best first.
    pub combinations: Vec<Combination<'a>>,

    /// Dimensions used for ranking, in priority order.
    pub dimensions: Vec<Dimension>,

    /// Weight ceiling of the requested class.
    pub ceiling: f64,

    /// Number of full assignments evaluated.
    pub evaluated: usize,

    /// Whether the search hit its evaluation limit.
    pub truncated: bool,
}

impl<'a> LoadoutReport<'a> {
    /// The best `k` combinations (fewer if not that many exist).
    pub fn top(&self, k: usize) -> &[Combination<'a>] {
        &self.combinations[..k.min(self.combinations.len())]
    }

    pub fn best(&self) -> Option<&Combination<'a>> {
        self.combinations.first()
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}
