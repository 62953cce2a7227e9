//! Error types for the boundary of the loadout optimizer.
//!
//! The search, scoring, filtering, and ranking path never fails: empty or
//! zero-valued results stand in for "nothing matched". Errors only arise
//! when parsing user-supplied names, validating a [`SearchRequest`], or
//! loading a catalog from disk.
//!
//! [`SearchRequest`]: crate::search::SearchRequest

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadoutError {
    #[error("unknown slot: {name}")]
    UnknownSlot { name: String },

    #[error("unknown weight class: {name} (expected light, medium or heavy)")]
    UnknownWeightClass { name: String },

    #[error("unknown scoring dimension: {name}")]
    UnknownDimension { name: String },

    #[error("invalid request: {field} = {value}")]
    InvalidRequest { field: String, value: String },

    #[error("failed to read catalog {}: {source}", .path.display())]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {origin}: {source}")]
    CatalogParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type LoadoutResult<T> = Result<T, LoadoutError>;
