//! Items, slots, and the slot-partitioned catalog.

use super::attributes::{Attribute, Attributes};
use crate::error::LoadoutError;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One piece of equipment.
///
/// `weight` is expected to be a finite, non-negative number. Catalog
/// loading keeps items whose weight is malformed (as NaN) so that the
/// filter can drop them instead of failing the whole load.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Display name, not necessarily unique.
    pub name: String,
    pub weight: f64,
    /// Availability tag such as "base game" or "dlc".
    pub availability: String,
    pub attributes: Attributes,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            availability: String::new(),
            attributes: Attributes::default(),
        }
    }

    pub fn with_availability(mut self, tag: impl Into<String>) -> Self {
        self.availability = tag.into();
        self
    }

    pub fn with_attribute(mut self, attr: Attribute, value: f64) -> Self {
        self.attributes = self.attributes.with(attr, value);
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Whether the weight is a finite, non-negative number.
    pub fn has_valid_weight(&self) -> bool {
        self.weight.is_finite() && self.weight >= 0.0
    }
}

/// An equipment category. Each combination assigns at most one item per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Head,
    Torso,
    Hands,
    Legs,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Head, Slot::Torso, Slot::Hands, Slot::Legs];

    pub fn name(self) -> &'static str {
        match self {
            Slot::Head => "head",
            Slot::Torso => "torso",
            Slot::Hands => "hands",
            Slot::Legs => "legs",
        }
    }

    /// Resolves a slot name case-insensitively.
    ///
    /// Accepts the armor-piece spellings `helm`, `chest`, `gauntlets`
    /// and their plurals alongside the canonical names.
    pub fn from_name(name: &str) -> Option<Slot> {
        match name.trim().to_ascii_lowercase().as_str() {
            "head" | "helm" | "helms" => Some(Slot::Head),
            "torso" | "chest" | "chests" => Some(Slot::Torso),
            "hands" | "gauntlets" => Some(Slot::Hands),
            "legs" | "leg" => Some(Slot::Legs),
            _ => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Slot {
    type Err = LoadoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::from_name(s).ok_or_else(|| LoadoutError::UnknownSlot { name: s.to_string() })
    }
}

impl From<Slot> for String {
    fn from(slot: Slot) -> String {
        slot.name().to_string()
    }
}

/// Read-only collection of items partitioned by slot.
///
/// # Examples
///
/// ```
/// use u_loadout::catalog::{Catalog, Item, Slot};
///
/// let catalog = Catalog::new()
///     .with_items(Slot::Head, vec![Item::new("Iron Helmet", 4.1)])
///     .with_items(Slot::Torso, vec![Item::new("Chain Armor", 9.2)]);
/// assert_eq!(catalog.items(Slot::Head).len(), 1);
/// assert!(catalog.items(Slot::Legs).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    slots: BTreeMap<Slot, Vec<Item>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `items` to the slot's list.
    pub fn with_items(mut self, slot: Slot, items: Vec<Item>) -> Self {
        self.slots.entry(slot).or_default().extend(items);
        self
    }

    pub fn insert(&mut self, slot: Slot, item: Item) {
        self.slots.entry(slot).or_default().push(item);
    }

    /// Items for `slot`; empty if the slot has no entries.
    pub fn items(&self, slot: Slot) -> &[Item] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Slots that have at least one item.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.slots
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(&slot, _)| slot)
    }

    /// Total number of items across all slots.
    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
