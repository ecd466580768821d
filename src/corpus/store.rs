//! Append-only corpus store and failed-seed registry
//!
//! The store is a pure append log: no deduplication, no reordering.
//! Insertion order is crawl emission order, and the per-side error
//! registries grow monotonically alongside it.

use crate::corpus::{SentencePair, Side};
use serde::{Deserialize, Serialize};

/// Ordered lists of seeds whose scrape invocation failed, one per side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRegistry {
    /// Source-side seeds that failed, in failure order
    pub source: Vec<String>,

    /// Target-side seeds that failed, in failure order
    pub target: Vec<String>,
}

impl ErrorRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failed seed on the given side
    pub fn record(&mut self, seed: impl Into<String>, side: Side) {
        self.for_side_mut(side).push(seed.into());
    }

    /// Returns the failed seeds for one side, in failure order
    pub fn for_side(&self, side: Side) -> &[String] {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }

    fn for_side_mut(&mut self, side: Side) -> &mut Vec<String> {
        match side {
            Side::Source => &mut self.source,
            Side::Target => &mut self.target,
        }
    }

    /// Total number of recorded failures across both sides
    pub fn len(&self) -> usize {
        self.source.len() + self.target.len()
    }

    /// Returns true if no failures have been recorded
    pub fn is_empty(&self) -> bool {
        self.source.is_empty() && self.target.is_empty()
    }
}

/// Owns the accumulated sentence pairs and the per-side error registries
///
/// Mutated only by the crawl engine during `crawl()`; persistence adapters
/// read it but never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStore {
    pairs: Vec<SentencePair>,
    errors: ErrorRegistry,
}

impl CorpusStore {
    /// Creates an empty corpus store
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sentence pair at the end of the corpus
    pub fn append(&mut self, pair: SentencePair) {
        self.pairs.push(pair);
    }

    /// Records a failed seed on the given side
    pub fn record_error(&mut self, seed: impl Into<String>, side: Side) {
        self.errors.record(seed, side);
    }

    /// Number of sentence pairs accumulated so far
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the corpus holds no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Read view of the accumulated pairs, in emission order
    pub fn pairs(&self) -> &[SentencePair] {
        &self.pairs
    }

    /// Read view of the error registries
    pub fn errors(&self) -> &ErrorRegistry {
        &self.errors
    }

    /// Failed seeds for one side, in failure order
    pub fn failed_seeds(&self, side: Side) -> &[String] {
        self.errors.for_side(side)
    }
}
