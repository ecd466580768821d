//! Bitext-Loom: a skeleton for building parallel-corpus datasets
//!
//! This crate drives pluggable per-seed scrapers over paired source/target
//! seed lists, accumulates the resulting sentence pairs into an append-only
//! corpus, isolates per-seed failures, and persists engine state to tabular
//! and checkpoint formats for resumable runs.

pub mod config;
pub mod corpus;
pub mod engine;
pub mod persist;
pub mod scraper;
pub mod seeds;

use thiserror::Error;

/// Main error type for Bitext-Loom operations
#[derive(Debug, Error)]
pub enum LoomError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Seed error: {0}")]
    Seed(#[from] seeds::SeedError),

    #[error("Persistence error: {0}")]
    Persist(#[from] persist::PersistError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Bitext-Loom operations
pub type Result<T> = std::result::Result<T, LoomError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use corpus::{CorpusStore, SentencePair, Side};
pub use engine::{CrawlEngine, CrawlReport, EngineState};
pub use scraper::{PairStream, SeedScraper};
pub use seeds::{SeedPair, SeedStore, TableLayout};
