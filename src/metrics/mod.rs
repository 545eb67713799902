//! Prometheus metrics for evaluation and scan activity

use prometheus::{Histogram, HistogramOpts, IntCounter, IntGauge, Opts, Registry};

/// Counters and histograms shared across the engine and scanner.
/// Attached optionally; the core runs without metrics wired.
pub struct Metrics {
    pub registry: Registry,
    pub evaluations_total: IntCounter,
    pub evaluations_active: IntGauge,
    pub evaluation_duration_seconds: Histogram,
    pub scan_passes_total: IntCounter,
    pub scan_candidates_total: IntCounter,
    pub scan_failures_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let evaluations_total = IntCounter::with_opts(Opts::new(
            "evaluations_total",
            "Completed ticker evaluations",
        ))?;
        let evaluations_active = IntGauge::with_opts(Opts::new(
            "evaluations_active",
            "Evaluations currently in flight",
        ))?;
        let evaluation_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "evaluation_duration_seconds",
            "Wall time of a single ticker evaluation",
        ))?;
        let scan_passes_total =
            IntCounter::with_opts(Opts::new("scan_passes_total", "Completed market scan passes"))?;
        let scan_candidates_total = IntCounter::with_opts(Opts::new(
            "scan_candidates_total",
            "Breakout candidates accepted across all scans",
        ))?;
        let scan_failures_total = IntCounter::with_opts(Opts::new(
            "scan_failures_total",
            "Per-ticker failures isolated during scans",
        ))?;

        registry.register(Box::new(evaluations_total.clone()))?;
        registry.register(Box::new(evaluations_active.clone()))?;
        registry.register(Box::new(evaluation_duration_seconds.clone()))?;
        registry.register(Box::new(scan_passes_total.clone()))?;
        registry.register(Box::new(scan_candidates_total.clone()))?;
        registry.register(Box::new(scan_failures_total.clone()))?;

        Ok(Self {
            registry,
            evaluations_total,
            evaluations_active,
            evaluation_duration_seconds,
            scan_passes_total,
            scan_candidates_total,
            scan_failures_total,
        })
    }
}
