//! Scraper capability interface
//!
//! This module defines the trait boundary between the crawl engine and the
//! domain-specific scraping logic. Concrete scrapers (search engines,
//! dictionary sites, corpus APIs) live outside this crate; the engine only
//! requires that each invocation yield a finite stream of sentence pairs.

use crate::corpus::{SentencePair, Side};

/// A finite stream of scraped sentence pairs
///
/// The stream may be lazily produced or fully materialized; the engine
/// drives it to completion either way. An `Err` item is a seed-local
/// failure: the engine keeps everything yielded before it, abandons the
/// rest, and records the seed in the error registry.
pub type PairStream = Box<dyn Iterator<Item = anyhow::Result<SentencePair>>>;

/// Produces sentence pairs for a single seed on a single side
///
/// This is the sole extension point of the crate. Implementations own all
/// fetching, rate limiting, and extraction concerns; the engine treats every
/// failure they report as non-fatal and seed-local.
pub trait SeedScraper {
    /// Scrapes sentence pairs for one seed, tagged with its language side
    fn scrape(&mut self, seed: &str, side: Side) -> PairStream;
}

/// Any `FnMut(&str, Side) -> PairStream` closure is a scraper
///
/// Handy for tests and small adapters that don't warrant a named type.
impl<F> SeedScraper for F
where
    F: FnMut(&str, Side) -> PairStream,
{
    fn scrape(&mut self, seed: &str, side: Side) -> PairStream {
        self(seed, side)
    }
}

/// Convenience constructor for a fully-materialized successful stream
pub fn pairs_stream(pairs: Vec<SentencePair>) -> PairStream {
    Box::new(pairs.into_iter().map(Ok))
}

/// Convenience constructor for a stream that fails immediately
pub fn failed_stream(error: anyhow::Error) -> PairStream {
    Box::new(std::iter::once(Err(error)))
}
