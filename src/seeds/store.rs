//! The read-only store of paired seeds
//!
//! A `SeedStore` is constructed once (from a tabular resource or directly
//! from two lists) and never mutated afterwards; the crawl engine only
//! iterates it.

use crate::seeds::loader::load_table;
use crate::seeds::{SeedError, SeedResult, TableLayout};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An ordered (source, target) seed pair at one corpus index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPair {
    /// The source-language seed token
    pub source: String,

    /// The target-language seed token
    pub target: String,
}

impl SeedPair {
    /// Creates a new seed pair
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Parallel lists of source and target seeds, indexed consistently
///
/// Index i of the source list pairs with index i of the target list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedStore {
    pairs: Vec<SeedPair>,
}

impl SeedStore {
    /// Builds a store from two parallel seed lists
    ///
    /// # Errors
    ///
    /// Returns `SeedError::LengthMismatch` when the lists differ in length;
    /// an unpaired trailing seed could never be attempted on both sides.
    pub fn from_lists(
        source_seeds: Vec<String>,
        target_seeds: Vec<String>,
    ) -> SeedResult<Self> {
        if source_seeds.len() != target_seeds.len() {
            return Err(SeedError::LengthMismatch {
                source_len: source_seeds.len(),
                target_len: target_seeds.len(),
            });
        }

        let pairs = source_seeds
            .into_iter()
            .zip(target_seeds)
            .map(|(source, target)| SeedPair { source, target })
            .collect();

        Ok(Self { pairs })
    }

    /// Loads a store from a row-oriented tabular resource
    ///
    /// For each row (after optionally skipping the header), the cells at the
    /// configured source and target columns form a seed pair. Rows where
    /// either cell is missing or empty are silently skipped.
    ///
    /// # Errors
    ///
    /// * `SeedError::ResourceUnavailable` - the path cannot be opened
    /// * `SeedError::Table` - the resource is not a readable table
    pub fn from_table(path: &Path, layout: &TableLayout) -> SeedResult<Self> {
        let pairs = load_table(path, layout)?;
        Ok(Self { pairs })
    }

    /// Number of seed pairs held
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the store holds no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The seed pair at the given index, if any
    pub fn get(&self, index: usize) -> Option<&SeedPair> {
        self.pairs.get(index)
    }

    /// Iterates the seed pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = &SeedPair> {
        self.pairs.iter()
    }

    /// Read view of all seed pairs
    pub fn pairs(&self) -> &[SeedPair] {
        &self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_lists_pairs_by_index() {
        let store =
            SeedStore::from_lists(strings(&["cat", "dog"]), strings(&["chat", "chien"])).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0), Some(&SeedPair::new("cat", "chat")));
        assert_eq!(store.get(1), Some(&SeedPair::new("dog", "chien")));
    }

    #[test]
    fn test_from_lists_rejects_length_mismatch() {
        let result = SeedStore::from_lists(strings(&["cat", "dog"]), strings(&["chat"]));

        match result {
            Err(SeedError::LengthMismatch {
                source_len,
                target_len,
            }) => {
                assert_eq!(source_len, 2);
                assert_eq!(target_len, 1);
            }
            other => panic!("Expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_lists_are_valid() {
        let store = SeedStore::from_lists(vec![], vec![]).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get(0), None);
    }

    #[test]
    fn test_iter_order() {
        let store =
            SeedStore::from_lists(strings(&["a", "b", "c"]), strings(&["x", "y", "z"])).unwrap();

        let sources: Vec<&str> = store.iter().map(|p| p.source.as_str()).collect();
        assert_eq!(sources, vec!["a", "b", "c"]);
    }
}
