//! Exhaustive equipment loadout optimizer.
//!
//! Finds every combination of one item per requested slot that fits under
//! a weight-class ceiling, scores each along caller-chosen dimensions, and
//! ranks them:
//!
//! - **Catalog**: read-only items partitioned by slot, loaded from JSON.
//! - **Filter**: per-slot pruning by weight bound and availability tag,
//!   applied before the cross product is expanded.
//! - **Scoring**: per-dimension sums over a combination's items, including
//!   the composite `negation` and `resistance` dimensions.
//! - **Search**: exact enumeration of the filtered cross product with the
//!   weight-class admissibility check.
//! - **Ranking**: lexicographic multi-key ordering, highest score first,
//!   headroom as the final tie-break.
//! - **Report**: top-K selection and plain-text rendering.
//!
//! # Example
//!
//! ```
//! use u_loadout::catalog::{Attribute, Catalog, Item, Slot};
//! use u_loadout::search::{SearchRequest, SearchRunner, WeightClass};
//!
//! let catalog = Catalog::new()
//!     .with_items(Slot::Head, vec![Item::new("Helm", 5.0).with_attribute(Attribute::Poise, 10.0)])
//!     .with_items(Slot::Torso, vec![Item::new("Chest", 10.0).with_attribute(Attribute::Poise, 5.0)]);
//!
//! let request = SearchRequest::default()
//!     .with_max_capacity(100.0)
//!     .with_slots([Slot::Head, Slot::Torso])
//!     .with_weight_class(WeightClass::Medium)
//!     .with_dimensions(["poise"]);
//!
//! let report = SearchRunner::run_ranked(&catalog, &request).unwrap();
//! let best = report.best().unwrap();
//! assert_eq!(best.total_weight, 15.0);
//! assert!((best.headroom - 54.9).abs() < 1e-9);
//! ```
//!
//! All computation is synchronous and single-threaded. Nothing here
//! performs I/O except [`catalog::load_catalog_from_path`].

pub mod catalog;
pub mod error;
pub mod filter;
pub mod ranking;
pub mod report;
pub mod scoring;
pub mod search;

pub use error::{LoadoutError, LoadoutResult};
