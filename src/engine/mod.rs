//! Crawl orchestration engine
//!
//! This module contains the seed-iteration loop that drives scrapers over
//! the seed store, including:
//! - Per-seed fault isolation (one failing seed never aborts the run)
//! - Append-only corpus accumulation in emission order
//! - A processed-pair cursor that makes re-runs and resumes idempotent
//! - An injected failure sink for observability

mod crawler;
mod observer;
mod state;

pub use crawler::{CrawlEngine, CrawlReport};
pub use observer::{FailureSink, TracingSink};
pub use state::EngineState;
