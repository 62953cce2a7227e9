//! JSON catalog loading.
//!
//! The document is an object keyed by slot name, each value an array of
//! flat item objects:
//!
//! ```json
//! {
//!   "helms": [
//!     { "name": "Iron Helmet", "weight": 4.1, "available": "Base Game",
//!       "poise": 3, "physical": 4.2, "vsStrike": 3.8 }
//!   ],
//!   "chests": []
//! }
//! ```
//!
//! Slot keys go through [`Slot::from_name`], so both `helms` and `head` work.
//! Keys that name no slot are skipped with a warning.

use super::attributes::Attributes;
use super::types::{Catalog, Item, Slot};
use crate::error::{LoadoutError, LoadoutResult};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct RawItem {
    name: String,
    #[serde(default)]
    weight: Value,
    #[serde(default, alias = "availability")]
    available: String,
    #[serde(flatten)]
    attributes: Attributes,
}

impl RawItem {
    /// Only JSON numbers count as weights. Anything else becomes NaN and
    /// is dropped later by the filter.
    fn into_item(self) -> Item {
        let weight = self.weight.as_f64().unwrap_or(f64::NAN);
        if !(weight.is_finite() && weight >= 0.0) {
            debug!(item = %self.name, weight = %self.weight, "item has malformed weight");
        }
        Item {
            name: self.name,
            weight,
            availability: self.available,
            attributes: self.attributes,
        }
    }
}

/// Parses a catalog from JSON text.
pub fn parse_catalog(json: &str) -> LoadoutResult<Catalog> {
    parse_catalog_with_origin(json, "<inline>")
}

/// Reads and parses a catalog file.
pub fn load_catalog_from_path(path: &Path) -> LoadoutResult<Catalog> {
    let data = std::fs::read_to_string(path).map_err(|source| LoadoutError::CatalogIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog_with_origin(&data, &path.display().to_string())
}

fn parse_catalog_with_origin(json: &str, origin: &str) -> LoadoutResult<Catalog> {
    let document: BTreeMap<String, Vec<RawItem>> =
        serde_json::from_str(json).map_err(|source| LoadoutError::CatalogParse {
            origin: origin.to_string(),
            source,
        })?;

    let mut catalog = Catalog::new();
    for (key, raw_items) in document {
        let Some(slot) = Slot::from_name(&key) else {
            warn!(key = %key, origin, "skipping catalog section with unknown slot name");
            continue;
        };
        let items: Vec<Item> = raw_items.into_iter().map(RawItem::into_item).collect();
        debug!(%slot, count = items.len(), "loaded catalog section");
        catalog = catalog.with_items(slot, items);
    }
    Ok(catalog)
}
