//! Tabular seed loading
//!
//! Reads a row-oriented CSV resource and extracts one seed pair per row
//! from two configurable columns. Rows that do not carry both cells are
//! skipped rather than treated as errors, so hand-maintained seed sheets
//! with blank lines load cleanly.

use crate::seeds::{SeedError, SeedPair, SeedResult};
use std::fs::File;
use std::path::Path;

/// Describes where the seed columns live in the input table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// 0-based column holding source seeds
    pub source_column: usize,

    /// 0-based column holding target seeds
    pub target_column: usize,

    /// Whether row 0 is a header row to skip
    pub skip_header: bool,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            source_column: 0,
            target_column: 1,
            skip_header: true,
        }
    }
}

/// Reads seed pairs from the table at `path` according to `layout`
pub(crate) fn load_table(path: &Path, layout: &TableLayout) -> SeedResult<Vec<SeedPair>> {
    let file = File::open(path).map_err(|source| SeedError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    // Header handling is done manually so that the same layout logic
    // applies whether or not row 0 is skipped.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut pairs = Vec::new();
    let mut skipped = 0usize;

    for (row_index, record) in reader.records().enumerate() {
        let record = record?;

        if row_index == 0 && layout.skip_header {
            continue;
        }

        let source = cell(&record, layout.source_column);
        let target = cell(&record, layout.target_column);

        match (source, target) {
            (Some(source), Some(target)) => pairs.push(SeedPair { source, target }),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} deficient rows while loading seeds", skipped);
    }
    tracing::info!("Loaded {} seed pairs from {}", pairs.len(), path.display());

    Ok(pairs)
}

/// Extracts a cell as a non-empty trimmed string, or None if absent/blank
fn cell(record: &csv::StringRecord, column: usize) -> Option<String> {
    record
        .get(column)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
