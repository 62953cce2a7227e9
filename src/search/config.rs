//! Search request and weight classes.

use crate::catalog::Slot;
use crate::error::{LoadoutError, LoadoutResult};
use crate::filter::AvailabilityFilter;
use crate::scoring::Dimension;
use std::fmt;
use std::str::FromStr;

/// Load tier. Each bounds total carried weight to a fixed fraction of the
/// maximum capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum WeightClass {
    /// 29.9% of capacity.
    Light,
    /// 69.9% of capacity.
    #[default]
    Medium,
    /// 99.9% of capacity.
    Heavy,
}

impl WeightClass {
    pub const ALL: [WeightClass; 3] = [WeightClass::Light, WeightClass::Medium, WeightClass::Heavy];

    pub fn fraction(self) -> f64 {
        match self {
            WeightClass::Light => 0.299,
            WeightClass::Medium => 0.699,
            WeightClass::Heavy => 0.999,
        }
    }

    /// Most total weight this class allows for `max_capacity`.
    pub fn ceiling(self, max_capacity: f64) -> f64 {
        max_capacity * self.fraction()
    }

    pub fn name(self) -> &'static str {
        match self {
            WeightClass::Light => "light",
            WeightClass::Medium => "medium",
            WeightClass::Heavy => "heavy",
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeightClass {
    type Err = LoadoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        WeightClass::ALL
            .into_iter()
            .find(|wc| wc.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LoadoutError::UnknownWeightClass { name: s.to_string() })
    }
}

/// Parameters of one loadout search.
///
/// Slot names are kept as given; the search resolves them with
/// [`Slot::from_name`] and treats an unresolvable name as a slot with no
/// candidates.
///
/// # Examples
///
/// ```
/// use u_loadout::catalog::Slot;
/// use u_loadout::search::{SearchRequest, WeightClass};
///
/// let request = SearchRequest::default()
///     .with_max_capacity(100.0)
///     .with_carried_load(12.0)
///     .with_slots([Slot::Head, Slot::Torso])
///     .with_weight_class(WeightClass::Light)
///     .with_dimensions(["poise", "negation"]);
/// assert!(request.validate().is_ok());
/// assert!((request.ceiling() - 29.9).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Maximum carry capacity.
    pub max_capacity: f64,

    /// Non-equipment weight already carried.
    pub carried_load: f64,

    /// Slots to fill, in assignment order.
    pub slots: Vec<String>,

    pub weight_class: WeightClass,

    /// Ranking priority, highest first.
    pub dimensions: Vec<Dimension>,

    /// Names `dimensions` were requested under, same order. Missing entries
    /// fall back to the canonical name.
    pub dimension_labels: Vec<String>,

    pub availability: AvailabilityFilter,

    /// Cap on full assignments evaluated. 0 = no limit.
    pub max_evaluations: usize,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            max_capacity: 0.0,
            carried_load: 0.0,
            slots: Slot::ALL.iter().map(|s| s.name().to_string()).collect(),
            weight_class: WeightClass::default(),
            dimensions: Vec::new(),
            dimension_labels: Vec::new(),
            availability: AvailabilityFilter::All,
            max_evaluations: 0,
        }
    }
}

impl SearchRequest {
    pub fn with_max_capacity(mut self, capacity: f64) -> Self {
        self.max_capacity = capacity;
        self
    }

    pub fn with_carried_load(mut self, load: f64) -> Self {
        self.carried_load = load;
        self
    }

    pub fn with_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slots = slots.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_weight_class(mut self, weight_class: WeightClass) -> Self {
        self.weight_class = weight_class;
        self
    }

    pub fn with_dimensions<I, D>(mut self, dimensions: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Dimension>,
    {
        self.dimensions = dimensions.into_iter().map(Into::into).collect();
        self.dimension_labels = self.dimensions.iter().map(|d| d.name().to_string()).collect();
        self
    }

    /// Like [`with_dimensions`](Self::with_dimensions), but keeps each
    /// name as spelled for display (`vsStrike` stays `vsStrike`).
    pub fn with_dimension_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (labels, dimensions): (Vec<String>, Vec<Dimension>) = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref().trim();
                (name.to_string(), Dimension::from_name(name))
            })
            .unzip();
        self.dimension_labels = labels;
        self.dimensions = dimensions;
        self
    }

    pub fn with_availability(mut self, availability: AvailabilityFilter) -> Self {
        self.availability = availability;
        self
    }

    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Weight ceiling of the chosen class.
    pub fn ceiling(&self) -> f64 {
        self.weight_class.ceiling(self.max_capacity)
    }

    /// Each ranking dimension with the name it was requested under.
    pub fn labeled_dimensions(&self) -> impl Iterator<Item = (&str, &Dimension)> {
        self.dimensions.iter().enumerate().map(|(i, d)| {
            let label = self
                .dimension_labels
                .get(i)
                .map_or_else(|| d.name(), String::as_str);
            (label, d)
        })
    }

    /// Bound used to pre-filter single items. Looser than the ceiling;
    /// the ceiling is checked on full assignments.
    pub fn max_item_weight(&self) -> f64 {
        self.max_capacity - self.carried_load
    }

    /// Validates the request.
    pub fn validate(&self) -> LoadoutResult<()> {
        check_non_negative("max_capacity", self.max_capacity)?;
        check_non_negative("carried_load", self.carried_load)?;
        Ok(())
    }
}

fn check_non_negative(field: &str, value: f64) -> LoadoutResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LoadoutError::InvalidRequest {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}
