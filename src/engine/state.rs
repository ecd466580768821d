//! The checkpointable snapshot of a crawl
//!
//! `EngineState` is the unit that is saved to and restored from
//! checkpoints: the seed lists, the accumulated corpus with its error
//! registries, and the resume cursor.

use crate::corpus::CorpusStore;
use crate::seeds::SeedStore;
use serde::{Deserialize, Serialize};

/// Aggregate of everything a crawl needs to resume where it left off
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    /// The seed pairs driving the crawl; read-only after construction
    pub seeds: SeedStore,

    /// Accumulated sentence pairs and per-side failed seeds
    pub corpus: CorpusStore,

    /// Number of seed pairs fully processed (both sides attempted)
    ///
    /// `crawl()` resumes at this index, so a state restored from a
    /// checkpoint never redoes or duplicates prior work.
    pub cursor: usize,
}

impl EngineState {
    /// Creates a fresh state for the given seeds, with nothing crawled yet
    pub fn new(seeds: SeedStore) -> Self {
        Self {
            seeds,
            corpus: CorpusStore::new(),
            cursor: 0,
        }
    }

    /// Returns true once every seed pair has been processed
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.seeds.len()
    }

    /// Checks structural consistency of a deserialized state
    ///
    /// The cursor can never point past the end of the seed list; a state
    /// violating that did not come from this engine.
    pub fn validate(&self) -> Result<(), String> {
        if self.cursor > self.seeds.len() {
            return Err(format!(
                "cursor {} exceeds seed pair count {}",
                self.cursor,
                self.seeds.len()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_seed_state() -> EngineState {
        let seeds = SeedStore::from_lists(
            vec!["cat".to_string(), "dog".to_string()],
            vec!["chat".to_string(), "chien".to_string()],
        )
        .unwrap();
        EngineState::new(seeds)
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = two_seed_state();
        assert_eq!(state.cursor, 0);
        assert!(state.corpus.is_empty());
        assert!(!state.is_complete());
    }

    #[test]
    fn test_is_complete() {
        let mut state = two_seed_state();
        state.cursor = 2;
        assert!(state.is_complete());
    }

    #[test]
    fn test_empty_seed_state_is_complete() {
        let state = EngineState::new(SeedStore::default());
        assert!(state.is_complete());
    }

    #[test]
    fn test_validate_accepts_in_range_cursor() {
        let mut state = two_seed_state();
        assert!(state.validate().is_ok());
        state.cursor = 2;
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_cursor() {
        let mut state = two_seed_state();
        state.cursor = 3;
        assert!(state.validate().is_err());
    }
}
