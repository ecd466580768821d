use crate::seeds::TableLayout;
use serde::Deserialize;

/// Main configuration structure for Bitext-Loom
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub seeds: SeedsConfig,
    pub output: OutputConfig,
}

/// Seed table configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SeedsConfig {
    /// Path to the seed table (CSV)
    #[serde(rename = "table-path")]
    pub table_path: String,

    /// 0-based column holding source seeds
    #[serde(rename = "source-column", default)]
    pub source_column: usize,

    /// 0-based column holding target seeds
    #[serde(rename = "target-column", default = "default_target_column")]
    pub target_column: usize,

    /// Whether row 0 is a header row to skip
    #[serde(rename = "skip-header", default = "default_skip_header")]
    pub skip_header: bool,
}

fn default_target_column() -> usize {
    1
}

fn default_skip_header() -> bool {
    true
}

impl SeedsConfig {
    /// The table layout described by this configuration
    pub fn layout(&self) -> TableLayout {
        TableLayout {
            source_column: self.source_column,
            target_column: self.target_column,
            skip_header: self.skip_header,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path for the exported corpus table (CSV)
    #[serde(rename = "corpus-path")]
    pub corpus_path: String,

    /// Path for the crawl checkpoint file
    #[serde(rename = "checkpoint-path")]
    pub checkpoint_path: String,
}
