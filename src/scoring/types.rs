//! Scoring dimensions and per-combination score tables.

use crate::catalog::{Attribute, Attributes};
use crate::error::LoadoutError;
use std::fmt;
use std::str::FromStr;

/// A named axis along which combinations are scored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// A single stored attribute.
    Stat(Attribute),
    /// Sum of physical, strike, slash, pierce, magic, fire, lightning, holy.
    Negation,
    /// Sum of immunity, robustness, focus, vitality.
    Resistance,
    /// A name the scorer does not recognize. Always scores zero.
    Unknown(String),
}

impl Dimension {
    /// Resolves a dimension name, falling back to [`Dimension::Unknown`].
    ///
    /// Use [`str::parse`] instead to reject unknown names.
    pub fn from_name(name: &str) -> Dimension {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("negation") {
            Dimension::Negation
        } else if trimmed.eq_ignore_ascii_case("resistance") {
            Dimension::Resistance
        } else if let Some(attr) = Attribute::from_name(trimmed) {
            Dimension::Stat(attr)
        } else {
            Dimension::Unknown(trimmed.to_string())
        }
    }

    /// Every dimension the scorer recognizes.
    pub fn known() -> impl Iterator<Item = Dimension> {
        Attribute::ALL
            .into_iter()
            .map(Dimension::Stat)
            .chain([Dimension::Negation, Dimension::Resistance])
    }

    pub fn name(&self) -> &str {
        match self {
            Dimension::Stat(attr) => attr.name(),
            Dimension::Negation => "negation",
            Dimension::Resistance => "resistance",
            Dimension::Unknown(name) => name,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Dimension::Negation | Dimension::Resistance)
    }

    /// Value of this dimension for one set of attributes.
    pub fn value_of(&self, attributes: &Attributes) -> f64 {
        match self {
            Dimension::Stat(attr) => attributes[*attr],
            Dimension::Negation => attributes.negation(),
            Dimension::Resistance => attributes.resistance(),
            Dimension::Unknown(_) => 0.0,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = LoadoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Dimension::from_name(s) {
            Dimension::Unknown(name) => Err(LoadoutError::UnknownDimension { name }),
            known => Ok(known),
        }
    }
}

impl From<Attribute> for Dimension {
    fn from(attr: Attribute) -> Self {
        Dimension::Stat(attr)
    }
}

impl From<&str> for Dimension {
    fn from(name: &str) -> Self {
        Dimension::from_name(name)
    }
}

/// Score per requested dimension, in request order.
///
/// A dimension requested twice appears once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scores {
    entries: Vec<(Dimension, f64)>,
}

impl Scores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the score for `dimension`, replacing any previous value.
    pub fn set(&mut self, dimension: Dimension, value: f64) {
        match self.entries.iter_mut().find(|(d, _)| *d == dimension) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((dimension, value)),
        }
    }

    pub fn get(&self, dimension: &Dimension) -> Option<f64> {
        self.entries
            .iter()
            .find(|(d, _)| d == dimension)
            .map(|&(_, v)| v)
    }

    /// Score for `dimension`, or zero when it was not scored.
    pub fn value(&self, dimension: &Dimension) -> f64 {
        self.get(dimension).unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Dimension, f64)> {
        self.entries.iter().map(|(d, v)| (d, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
