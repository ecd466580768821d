//! Seed loading and storage
//!
//! This module handles:
//! - Holding parallel source/target seed lists, indexed consistently
//! - Loading seed pairs from a row-oriented tabular resource
//! - Rejecting mismatched seed lists at construction time

mod loader;
mod store;

pub use loader::TableLayout;
pub use store::{SeedPair, SeedStore};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while constructing or loading seeds
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Cannot open seed table {path}: {source}")]
    ResourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed seed table: {0}")]
    Table(#[from] csv::Error),

    #[error("Seed list length mismatch: {source_len} source seeds, {target_len} target seeds")]
    LengthMismatch {
        source_len: usize,
        target_len: usize,
    },
}

/// Result type for seed operations
pub type SeedResult<T> = Result<T, SeedError>;
