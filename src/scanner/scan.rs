//! Market-wide breakout scan
//!
//! Walks the injected ticker universe sequentially with a pacing delay
//! between tickers, isolates per-ticker failures, ranks the accepted
//! candidates, and applies the delivery dedup gate.

use crate::metrics::Metrics;
use crate::models::BreakoutStock;
use crate::scanner::{dedup, detector};
use crate::sources::{MarketSource, SourceError, TickerUniverse};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// History window requested per ticker
pub const SCAN_HISTORY_PERIODS: usize = 60;

/// Ranked result list is truncated to this many candidates
pub const TOP_CANDIDATES: usize = 10;

/// One completed scan pass
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Top candidates by breakout score, best first
    pub ranked: Vec<BreakoutStock>,
    /// Ranked candidates that survived the dedup gate
    pub deliverable: Vec<BreakoutStock>,
}

pub struct MarketScanner {
    market: Arc<dyn MarketSource>,
    universe: Arc<dyn TickerUniverse>,
    pacing: Duration,
    metrics: Option<Arc<Metrics>>,
}

impl MarketScanner {
    pub fn new(market: Arc<dyn MarketSource>, universe: Arc<dyn TickerUniverse>) -> Self {
        Self {
            market,
            universe,
            pacing: Duration::from_millis(500),
            metrics: None,
        }
    }

    /// Set the inter-ticker pacing delay
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Run one scan pass over the universe.
    ///
    /// A per-ticker fetch or computation failure yields no candidate for
    /// that ticker and never aborts the rest of the scan. Failing to list
    /// the universe itself is the only fatal error.
    pub async fn scan(&self, recent: &HashSet<String>) -> Result<ScanOutcome, SourceError> {
        let tickers = self.universe.tickers().await?;
        info!(count = tickers.len(), "Scanning {} tickers", tickers.len());

        let mut candidates = Vec::new();

        for (i, ticker) in tickers.iter().enumerate() {
            match self.market.fetch_history(ticker, SCAN_HISTORY_PERIODS).await {
                Ok(history) => {
                    if let Some(stock) = detector::detect(ticker, &history) {
                        info!(
                            ticker = %ticker,
                            score = stock.breakout_score,
                            "Breakout candidate {}: score {}",
                            ticker,
                            stock.breakout_score
                        );
                        candidates.push(stock);
                    }
                }
                Err(e) => {
                    warn!(ticker = %ticker, error = %e, "Skipping {}: {}", ticker, e);
                    if let Some(ref metrics) = self.metrics {
                        metrics.scan_failures_total.inc();
                    }
                }
            }

            if (i + 1) % 50 == 0 {
                debug!(progress = i + 1, total = tickers.len(), "Scan progress");
            }

            if i + 1 < tickers.len() {
                tokio::time::sleep(self.pacing).await;
            }
        }

        candidates.sort_by(|a, b| b.breakout_score.cmp(&a.breakout_score));
        candidates.truncate(TOP_CANDIDATES);

        let deliverable = dedup::filter_recent(candidates.clone(), recent);

        if let Some(ref metrics) = self.metrics {
            metrics.scan_passes_total.inc();
            metrics.scan_candidates_total.inc_by(candidates.len() as u64);
        }

        info!(
            found = candidates.len(),
            deliverable = deliverable.len(),
            "Scan complete: {} candidates, {} deliverable after dedup",
            candidates.len(),
            deliverable.len()
        );

        Ok(ScanOutcome {
            ranked: candidates,
            deliverable,
        })
    }
}
