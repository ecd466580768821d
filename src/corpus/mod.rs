//! Corpus data model
//!
//! This module defines the atomic units of the output corpus (sentence
//! pairs, language sides) and the append-only store that accumulates them
//! together with per-side failed-seed registries.

mod pair;
mod store;

pub use pair::{SentencePair, Side};
pub use store::{CorpusStore, ErrorRegistry};
