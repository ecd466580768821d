//! Persistence adapters
//!
//! This module crosses the boundary between in-memory engine state and
//! durable formats:
//! - Tabular corpus export (two-column CSV)
//! - Checkpoint save/load for resumable crawls
//!
//! Adapters only read engine state or reconstruct it from a blob; they
//! never mutate state concurrently with a crawl.

mod checkpoint;
mod table;

pub use checkpoint::{
    decode_checkpoint, encode_checkpoint, load_checkpoint, save_checkpoint,
};
pub use table::{export_corpus, write_corpus};

use thiserror::Error;

/// Errors that can occur during persistence operations
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Table write error: {0}")]
    Table(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Corrupt checkpoint: {0}")]
    CorruptCheckpoint(String),
}

/// Result type for persistence operations
pub type PersistResult<T> = Result<T, PersistError>;
