//! Failure observability sink
//!
//! The engine reports every recorded scrape failure through an injected
//! sink rather than a process-wide logger, so the loop stays testable
//! without side-channel output.

use crate::corpus::Side;

/// Receives one call per scrape failure recorded by the engine
pub trait FailureSink {
    /// Called after the failing seed has been recorded in the error registry
    fn scrape_failed(&mut self, seed: &str, side: Side, error: &anyhow::Error);
}

/// Default production sink that logs failures via `tracing`
#[derive(Debug, Default)]
pub struct TracingSink;

impl FailureSink for TracingSink {
    fn scrape_failed(&mut self, seed: &str, side: Side, error: &anyhow::Error) {
        tracing::warn!("Crawl with seed {:?} ({} side) failed: {:#}", seed, side, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_tracing_sink_does_not_panic() {
        // No subscriber installed; the call must still be a no-op
        let mut sink = TracingSink;
        sink.scrape_failed("cat", Side::Source, &anyhow!("boom"));
    }
}
