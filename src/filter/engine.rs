//! Per-slot candidate pruning.

use super::types::AvailabilityFilter;
use crate::catalog::Item;

/// Keeps the items that can still fit under `max_weight` and pass the
/// availability selector.
///
/// Items whose weight is not a finite, non-negative number are dropped
/// rather than reported. Input order is preserved, so filtering an already
/// filtered list with the same arguments returns the same list.
pub fn filter_items<'a, I>(
    items: I,
    max_weight: f64,
    availability: &AvailabilityFilter,
) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .filter(|item| {
            item.has_valid_weight()
                && item.weight <= max_weight
                && availability.matches(&item.availability)
        })
        .collect()
}
