//! Availability selector.

use std::fmt;

/// Restricts candidates to one availability tag, or allows everything.
///
/// Tags compare case-insensitively. The literal `all` (any case) is the
/// wildcard.
///
/// # Examples
///
/// ```
/// use u_loadout::filter::AvailabilityFilter;
///
/// assert_eq!(AvailabilityFilter::new("ALL"), AvailabilityFilter::All);
/// assert!(AvailabilityFilter::new("base game").matches("Base Game"));
/// assert!(!AvailabilityFilter::new("dlc").matches("Base Game"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AvailabilityFilter {
    #[default]
    All,
    Tag(String),
}

impl AvailabilityFilter {
    pub fn new(selector: &str) -> Self {
        let selector = selector.trim();
        if selector.eq_ignore_ascii_case("all") {
            AvailabilityFilter::All
        } else {
            AvailabilityFilter::Tag(selector.to_lowercase())
        }
    }

    /// Whether an item carrying `tag` passes this filter.
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::Tag(wanted) => tag.to_lowercase() == *wanted,
        }
    }
}

impl From<&str> for AvailabilityFilter {
    fn from(selector: &str) -> Self {
        AvailabilityFilter::new(selector)
    }
}

impl fmt::Display for AvailabilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityFilter::All => f.write_str("all"),
            AvailabilityFilter::Tag(tag) => f.write_str(tag),
        }
    }
}
