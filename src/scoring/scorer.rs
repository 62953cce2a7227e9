//! Combination scoring.

use super::types::{Dimension, Scores};
use crate::catalog::{Attributes, Item};

/// Scores a set of items along each requested dimension.
///
/// Each dimension is the sum of that dimension's value over the items.
/// Composite dimensions sum their constituent attributes; unrecognized
/// dimensions score zero. Never fails.
///
/// # Examples
///
/// ```
/// use u_loadout::catalog::{Attribute, Item};
/// use u_loadout::scoring::{score, Dimension};
///
/// let helm = Item::new("Helm", 5.0).with_attribute(Attribute::Poise, 10.0);
/// let chest = Item::new("Chest", 10.0).with_attribute(Attribute::Poise, 5.0);
/// let scores = score([&helm, &chest], &[Dimension::Stat(Attribute::Poise)]);
/// assert_eq!(scores.value(&Dimension::Stat(Attribute::Poise)), 15.0);
/// ```
pub fn score<'a, I>(items: I, dimensions: &[Dimension]) -> Scores
where
    I: IntoIterator<Item = &'a Item>,
{
    let totals: Attributes = items.into_iter().map(|item| &item.attributes).sum();

    let mut scores = Scores::new();
    for dimension in dimensions {
        scores.set(dimension.clone(), dimension.value_of(&totals));
    }
    scores
}
