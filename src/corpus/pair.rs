//! Sentence pair and language side definitions
//!
//! These are the atomic units flowing through the crawl: every scraper
//! invocation is tagged with a [`Side`], and every successful yield is a
//! [`SentencePair`] appended to the corpus.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which language role a seed belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The source-language side of the corpus
    Source,

    /// The target-language side of the corpus
    Target,
}

impl Side {
    /// Returns the canonical string tag for this side
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }

    /// Parses a side from its canonical string tag
    ///
    /// Returns None if the string doesn't match any known side.
    pub fn from_str_tag(s: &str) -> Option<Self> {
        match s {
            "source" => Some(Self::Source),
            "target" => Some(Self::Target),
            _ => None,
        }
    }

    /// Both sides in processing order (source before target)
    pub fn both() -> [Self; 2] {
        [Self::Source, Self::Target]
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One aligned (source, target) sentence, the unit stored in the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    /// The source-language sentence
    pub source: String,

    /// The target-language sentence
    pub target: String,
}

impl SentencePair {
    /// Creates a new sentence pair
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_as_str() {
        assert_eq!(Side::Source.as_str(), "source");
        assert_eq!(Side::Target.as_str(), "target");
    }

    #[test]
    fn test_side_from_str_tag() {
        assert_eq!(Side::from_str_tag("source"), Some(Side::Source));
        assert_eq!(Side::from_str_tag("target"), Some(Side::Target));
        assert_eq!(Side::from_str_tag("invalid"), None);
    }

    #[test]
    fn test_side_roundtrip_tag() {
        for side in Side::both() {
            let tag = side.as_str();
            let parsed = Side::from_str_tag(tag);
            assert_eq!(Some(side), parsed, "Failed roundtrip for {:?}", side);
        }
    }

    #[test]
    fn test_side_display() {
        assert_eq!(format!("{}", Side::Source), "source");
        assert_eq!(format!("{}", Side::Target), "target");
    }

    #[test]
    fn test_both_order() {
        // Source is always processed before target
        assert_eq!(Side::both(), [Side::Source, Side::Target]);
    }

    #[test]
    fn test_sentence_pair_new() {
        let pair = SentencePair::new("The cat sleeps", "Le chat dort");
        assert_eq!(pair.source, "The cat sleeps");
        assert_eq!(pair.target, "Le chat dort");
    }
}
