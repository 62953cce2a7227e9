//! Admissible combinations.

use crate::catalog::{Item, Slot};
use crate::scoring::Scores;

/// One item chosen for one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment<'a> {
    pub slot: Slot,
    pub item: &'a Item,
}

/// An assignment of one item to each requested slot that fits under the
/// weight-class ceiling.
///
/// Items are borrowed from the catalog the search ran against.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination<'a> {
    /// Assignments in the order the slots were requested.
    pub assignments: Vec<Assignment<'a>>,

    /// Sum of the assigned items' weights.
    pub total_weight: f64,

    /// Score per requested dimension.
    pub scores: Scores,

    /// Ceiling minus (carried load + total weight). Never negative.
    pub headroom: f64,
}

impl<'a> Combination<'a> {
    pub fn items(&self) -> impl Iterator<Item = &'a Item> + '_ {
        self.assignments.iter().map(|a| a.item)
    }

    /// The item assigned to `slot`, if that slot was requested.
    pub fn item(&self, slot: Slot) -> Option<&'a Item> {
        self.assignments
            .iter()
            .find(|a| a.slot == slot)
            .map(|a| a.item)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
