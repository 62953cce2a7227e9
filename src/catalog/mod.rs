//! Equipment catalog.
//!
//! The catalog is the read-only input to every search: a set of [`Item`]s
//! partitioned by [`Slot`]. It is loaded once (see [`load_catalog_from_path`])
//! and never mutated while searches run.
//!
//! Item attributes are a closed set ([`Attribute`]) stored in a fixed-field
//! [`Attributes`] struct. The two composite sums used for scoring,
//! damage negation and status resistance, are methods on that struct.

mod attributes;
mod loader;
mod types;

pub use attributes::{Attribute, Attributes};
pub use loader::{load_catalog_from_path, parse_catalog};
pub use types::{Catalog, Item, Slot};
