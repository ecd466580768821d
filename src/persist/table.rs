//! Tabular corpus export
//!
//! Writes the accumulated corpus as a two-column CSV table with a fixed
//! header row, one row per sentence pair, preserving corpus order exactly.
//! The output depends only on the corpus contents, so exporting the same
//! corpus twice produces byte-identical files.

use crate::corpus::CorpusStore;
use crate::persist::PersistResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header written at row 1 of every exported table
const HEADER: [&str; 2] = ["Source Sentence", "Target Sentence"];

/// Writes the corpus table to any writer
pub fn write_corpus<W: Write>(corpus: &CorpusStore, writer: W) -> PersistResult<()> {
    let mut table = csv::Writer::from_writer(writer);

    table.write_record(HEADER)?;
    for pair in corpus.pairs() {
        table.write_record([pair.source.as_str(), pair.target.as_str()])?;
    }
    table.flush()?;

    Ok(())
}

/// Exports the corpus table to a file
pub fn export_corpus(corpus: &CorpusStore, path: &Path) -> PersistResult<()> {
    let file = File::create(path)?;
    write_corpus(corpus, file)?;
    tracing::info!(
        "Exported {} sentence pairs to {}",
        corpus.len(),
        path.display()
    );
    Ok(())
}
