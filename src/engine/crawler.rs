//! The crawl loop
//!
//! One full pass over the seed store: for each unprocessed seed pair, the
//! source seed is scraped, then the target seed, each tagged with its side.
//! Every yielded pair is appended to the corpus in yield order; any failure
//! is seed-local, recorded, and never aborts the run.

use crate::corpus::Side;
use crate::engine::observer::{FailureSink, TracingSink};
use crate::engine::EngineState;
use crate::scraper::SeedScraper;
use crate::seeds::SeedStore;

/// Summary of one `crawl()` invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Sentence pairs appended to the corpus during this invocation
    pub pairs_scraped: usize,

    /// Seed/side invocations that failed and were recorded
    pub seeds_failed: usize,

    /// Seed pairs fully processed (both sides) during this invocation
    pub seed_pairs_processed: usize,
}

/// Drives one scraper over a seed store with per-seed fault isolation
///
/// The engine exclusively owns its state; there is no sharing across
/// concurrent crawlers and no locking. Processing is strictly sequential,
/// which is what makes the corpus ordering guarantee hold.
pub struct CrawlEngine<S> {
    state: EngineState,
    scraper: S,
    sink: Box<dyn FailureSink>,
}

impl<S: SeedScraper> CrawlEngine<S> {
    /// Creates an engine over fresh state, logging failures via `tracing`
    pub fn new(seeds: SeedStore, scraper: S) -> Self {
        Self::resume(EngineState::new(seeds), scraper)
    }

    /// Creates an engine over previously checkpointed state
    ///
    /// Crawling picks up at the state's cursor; seed pairs already
    /// processed are not re-attempted.
    pub fn resume(state: EngineState, scraper: S) -> Self {
        Self {
            state,
            scraper,
            sink: Box::new(TracingSink),
        }
    }

    /// Replaces the failure sink
    pub fn with_sink(mut self, sink: Box<dyn FailureSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Runs the crawl loop over every unprocessed seed pair
    ///
    /// This method is total: scraper failures are recorded in the error
    /// registry and reported to the sink, never surfaced. Each seed is
    /// attempted exactly once per side; once every pair has been processed,
    /// further calls are no-ops.
    pub fn crawl(&mut self) -> CrawlReport {
        let total = self.state.seeds.len();
        let mut report = CrawlReport::default();

        if self.state.cursor > 0 && self.state.cursor < total {
            tracing::info!(
                "Resuming crawl at seed pair {} of {}",
                self.state.cursor,
                total
            );
        } else {
            tracing::info!("Starting crawl over {} seed pairs", total);
        }

        while let Some(pair) = self.state.seeds.get(self.state.cursor) {
            let pair = pair.clone();

            for side in Side::both() {
                let seed = match side {
                    Side::Source => pair.source.as_str(),
                    Side::Target => pair.target.as_str(),
                };
                self.scrape_one(seed, side, &mut report);
            }

            // The pair counts as processed only once both sides finished;
            // a crash between sides re-attempts the whole pair on resume.
            self.state.cursor += 1;
            report.seed_pairs_processed += 1;

            if report.seed_pairs_processed % 10 == 0 {
                tracing::info!(
                    "Progress: {}/{} seed pairs, {} sentence pairs collected, {} failures",
                    self.state.cursor,
                    total,
                    self.state.corpus.len(),
                    self.state.corpus.errors().len()
                );
            }
        }

        tracing::info!(
            "Crawl pass done: {} pairs scraped, {} seed failures",
            report.pairs_scraped,
            report.seeds_failed
        );

        report
    }

    /// Drives one scraper invocation for a single seed and side
    fn scrape_one(&mut self, seed: &str, side: Side, report: &mut CrawlReport) {
        tracing::debug!("Scraping seed {:?} on {} side", seed, side);

        for item in self.scraper.scrape(seed, side) {
            match item {
                Ok(pair) => {
                    self.state.corpus.append(pair);
                    report.pairs_scraped += 1;
                }
                Err(error) => {
                    // Pairs already appended stay; the rest of the stream
                    // is abandoned.
                    self.state.corpus.record_error(seed, side);
                    self.sink.scrape_failed(seed, side, &error);
                    report.seeds_failed += 1;
                    break;
                }
            }
        }
    }

    /// Read view of the current engine state
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Consumes the engine, yielding its state for checkpointing
    pub fn into_state(self) -> EngineState {
        self.state
    }
}
