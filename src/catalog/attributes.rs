//! Known item attributes and the composite sums derived from them.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Index};

/// A stored attribute that the scorer recognizes.
///
/// The set is closed: catalog entries may carry other keys, but only these
/// are read into an [`Attributes`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Poise,
    Physical,
    Strike,
    Slash,
    Pierce,
    Magic,
    Fire,
    Lightning,
    Holy,
    Immunity,
    Robustness,
    Focus,
    Vitality,
}

impl Attribute {
    /// Every known attribute, in display order.
    pub const ALL: [Attribute; 13] = [
        Attribute::Poise,
        Attribute::Physical,
        Attribute::Strike,
        Attribute::Slash,
        Attribute::Pierce,
        Attribute::Magic,
        Attribute::Fire,
        Attribute::Lightning,
        Attribute::Holy,
        Attribute::Immunity,
        Attribute::Robustness,
        Attribute::Focus,
        Attribute::Vitality,
    ];

    /// Attributes summed by the `negation` composite dimension.
    pub const NEGATION: [Attribute; 8] = [
        Attribute::Physical,
        Attribute::Strike,
        Attribute::Slash,
        Attribute::Pierce,
        Attribute::Magic,
        Attribute::Fire,
        Attribute::Lightning,
        Attribute::Holy,
    ];

    /// Attributes summed by the `resistance` composite dimension.
    pub const RESISTANCE: [Attribute; 4] = [
        Attribute::Immunity,
        Attribute::Robustness,
        Attribute::Focus,
        Attribute::Vitality,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Poise => "poise",
            Attribute::Physical => "physical",
            Attribute::Strike => "strike",
            Attribute::Slash => "slash",
            Attribute::Pierce => "pierce",
            Attribute::Magic => "magic",
            Attribute::Fire => "fire",
            Attribute::Lightning => "lightning",
            Attribute::Holy => "holy",
            Attribute::Immunity => "immunity",
            Attribute::Robustness => "robustness",
            Attribute::Focus => "focus",
            Attribute::Vitality => "vitality",
        }
    }

    /// Label used when rendering an item line.
    pub fn label(self) -> &'static str {
        match self {
            Attribute::Poise => "Poise",
            Attribute::Physical => "Physical",
            Attribute::Strike => "VS Strike",
            Attribute::Slash => "VS Slash",
            Attribute::Pierce => "VS Pierce",
            Attribute::Magic => "Magic",
            Attribute::Fire => "Fire",
            Attribute::Lightning => "Lightning",
            Attribute::Holy => "Holy",
            Attribute::Immunity => "Immunity",
            Attribute::Robustness => "Robustness",
            Attribute::Focus => "Focus",
            Attribute::Vitality => "Vitality",
        }
    }

    /// Resolves a name case-insensitively. The `vs`-prefixed spellings
    /// (`vsStrike`, `vsSlash`, `vsPierce`) are accepted.
    pub fn from_name(name: &str) -> Option<Attribute> {
        let lower = name.trim().to_ascii_lowercase();
        let key = lower.strip_prefix("vs").unwrap_or(&lower);
        Attribute::ALL.into_iter().find(|a| a.name() == key)
    }
}

/// Per-item attribute values, one field per [`Attribute`].
///
/// Missing fields deserialize as zero; unrecognized keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub poise: f64,
    pub physical: f64,
    #[serde(alias = "vsStrike")]
    pub strike: f64,
    #[serde(alias = "vsSlash")]
    pub slash: f64,
    #[serde(alias = "vsPierce")]
    pub pierce: f64,
    pub magic: f64,
    pub fire: f64,
    pub lightning: f64,
    pub holy: f64,
    pub immunity: f64,
    pub robustness: f64,
    pub focus: f64,
    pub vitality: f64,
}

impl Attributes {
    /// Builds a value by evaluating `f` once per attribute.
    pub fn from_fn<F: FnMut(Attribute) -> f64>(mut f: F) -> Self {
        Self {
            poise: f(Attribute::Poise),
            physical: f(Attribute::Physical),
            strike: f(Attribute::Strike),
            slash: f(Attribute::Slash),
            pierce: f(Attribute::Pierce),
            magic: f(Attribute::Magic),
            fire: f(Attribute::Fire),
            lightning: f(Attribute::Lightning),
            holy: f(Attribute::Holy),
            immunity: f(Attribute::Immunity),
            robustness: f(Attribute::Robustness),
            focus: f(Attribute::Focus),
            vitality: f(Attribute::Vitality),
        }
    }

    /// Returns a copy with `attr` set to `value`.
    pub fn with(mut self, attr: Attribute, value: f64) -> Self {
        *self.field_mut(attr) = value;
        self
    }

    pub fn get(&self, attr: Attribute) -> f64 {
        self[attr]
    }

    /// Sum of the eight damage negation attributes.
    pub fn negation(&self) -> f64 {
        Attribute::NEGATION.iter().map(|&a| self[a]).sum()
    }

    /// Sum of the four status resistance attributes.
    pub fn resistance(&self) -> f64 {
        Attribute::RESISTANCE.iter().map(|&a| self[a]).sum()
    }

    fn field_mut(&mut self, attr: Attribute) -> &mut f64 {
        match attr {
            Attribute::Poise => &mut self.poise,
            Attribute::Physical => &mut self.physical,
            Attribute::Strike => &mut self.strike,
            Attribute::Slash => &mut self.slash,
            Attribute::Pierce => &mut self.pierce,
            Attribute::Magic => &mut self.magic,
            Attribute::Fire => &mut self.fire,
            Attribute::Lightning => &mut self.lightning,
            Attribute::Holy => &mut self.holy,
            Attribute::Immunity => &mut self.immunity,
            Attribute::Robustness => &mut self.robustness,
            Attribute::Focus => &mut self.focus,
            Attribute::Vitality => &mut self.vitality,
        }
    }
}

impl Index<Attribute> for Attributes {
    type Output = f64;

    fn index(&self, attr: Attribute) -> &f64 {
        match attr {
            Attribute::Poise => &self.poise,
            Attribute::Physical => &self.physical,
            Attribute::Strike => &self.strike,
            Attribute::Slash => &self.slash,
            Attribute::Pierce => &self.pierce,
            Attribute::Magic => &self.magic,
            Attribute::Fire => &self.fire,
            Attribute::Lightning => &self.lightning,
            Attribute::Holy => &self.holy,
            Attribute::Immunity => &self.immunity,
            Attribute::Robustness => &self.robustness,
            Attribute::Focus => &self.focus,
            Attribute::Vitality => &self.vitality,
        }
    }
}

impl Add for Attributes {
    type Output = Attributes;

    fn add(self, other: Attributes) -> Attributes {
        Attributes::from_fn(|a| self[a] + other[a])
    }
}

impl AddAssign<&Attributes> for Attributes {
    fn add_assign(&mut self, other: &Attributes) {
        *self = *self + *other;
    }
}

impl<'a> std::iter::Sum<&'a Attributes> for Attributes {
    fn sum<I: Iterator<Item = &'a Attributes>>(iter: I) -> Attributes {
        iter.fold(Attributes::default(), |mut acc, a| {
            acc += a;
            acc
        })
    }
}
