//! Evaluation orchestration
//!
//! Owns the source collaborators and runs the per-ticker fetch/score/fuse
//! sequence. Construction is explicit; callers own the engine lifecycle.

use crate::engine::fusion;
use crate::metrics::Metrics;
use crate::models::EvaluationResult;
use crate::pillars::{score_institutional, score_narrative, score_setup};
use crate::sources::{InstitutionalSource, MarketSource, NarrativeSource, SourceError};
use futures_util::future;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Delay between tickers in batch evaluation. Sequential pacing is the
/// backpressure mechanism for the upstream rate limits, not an
/// optimization target.
pub const DEFAULT_PACING: Duration = Duration::from_millis(500);

/// A source-level failure surfaced from a single evaluation
#[derive(Debug)]
pub enum EvaluateError {
    Institutional(SourceError),
    Narrative(SourceError),
    Market(SourceError),
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluateError::Institutional(e) => write!(f, "institutional fetch failed: {}", e),
            EvaluateError::Narrative(e) => write!(f, "narrative fetch failed: {}", e),
            EvaluateError::Market(e) => write!(f, "market fetch failed: {}", e),
        }
    }
}

impl std::error::Error for EvaluateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvaluateError::Institutional(e)
            | EvaluateError::Narrative(e)
            | EvaluateError::Market(e) => Some(e.as_ref()),
        }
    }
}

/// Engine that fuses the three pillars into a run-potential verdict
pub struct RunPotentialEngine {
    institutional: Arc<dyn InstitutionalSource>,
    narrative: Arc<dyn NarrativeSource>,
    market: Arc<dyn MarketSource>,
    pacing: Duration,
    metrics: Option<Arc<Metrics>>,
}

impl RunPotentialEngine {
    pub fn new(
        institutional: Arc<dyn InstitutionalSource>,
        narrative: Arc<dyn NarrativeSource>,
        market: Arc<dyn MarketSource>,
    ) -> Self {
        Self {
            institutional,
            narrative,
            market,
            pacing: DEFAULT_PACING,
            metrics: None,
        }
    }

    /// Set the inter-ticker pacing delay for batch evaluation
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Run a full evaluation for one ticker.
    ///
    /// The three pillar fetches are issued concurrently and joined before
    /// scoring; the narrative fetch is independent of the other two. A
    /// transport-level source error surfaces to the caller, while in-bundle
    /// error sections degrade that pillar to a neutral score.
    pub async fn evaluate(&self, ticker: &str) -> Result<EvaluationResult, EvaluateError> {
        let ticker = ticker.trim().to_uppercase();
        let start = Instant::now();

        if let Some(ref metrics) = self.metrics {
            metrics.evaluations_active.inc();
        }

        debug!(ticker = %ticker, "Evaluating {}", ticker);

        let (inst_bundle, narr_bundle, facts) = future::join3(
            self.institutional.fetch_institutional(&ticker),
            self.narrative.fetch_narrative(&ticker),
            self.market.fetch_facts(&ticker),
        )
        .await;

        if let Some(ref metrics) = self.metrics {
            metrics.evaluations_active.dec();
        }

        let inst_bundle = inst_bundle.map_err(EvaluateError::Institutional)?;
        let narr_bundle = narr_bundle.map_err(EvaluateError::Narrative)?;
        let facts = facts.map_err(EvaluateError::Market)?;

        let result = fusion::fuse(
            &ticker,
            score_institutional(&inst_bundle),
            score_narrative(&narr_bundle),
            score_setup(&facts),
        );

        if let Some(ref metrics) = self.metrics {
            metrics.evaluations_total.inc();
            metrics
                .evaluation_duration_seconds
                .observe(start.elapsed().as_secs_f64());
        }

        info!(
            ticker = %ticker,
            run_score = result.run_score,
            verdict = %result.verdict,
            "Evaluated {}: {} ({}/100)",
            ticker,
            result.verdict,
            result.run_score
        );

        Ok(result)
    }

    /// Evaluate multiple tickers sequentially with the pacing delay between
    /// them. Per-ticker failures are logged and skipped; the batch never
    /// aborts.
    pub async fn evaluate_batch(&self, tickers: &[String]) -> Vec<EvaluationResult> {
        let mut results = Vec::new();

        for (i, ticker) in tickers.iter().enumerate() {
            match self.evaluate(ticker).await {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!(ticker = %ticker, error = %e, "Skipping {}: {}", ticker, e);
                }
            }

            if i + 1 < tickers.len() {
                tokio::time::sleep(self.pacing).await;
            }
        }

        results
    }
}
