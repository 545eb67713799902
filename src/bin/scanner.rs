//! Runtrix Scanner
//!
//! Runs the market-wide breakout scan on a fixed schedule and hands
//! deliverable alert batches to the delivery channel. Can be run as a
//! separate process from any API surface.

use dotenvy::dotenv;
use runtrix::config;
use runtrix::core::scheduler::ScanScheduler;
use runtrix::logging;
use runtrix::metrics::Metrics;
use runtrix::scanner::MarketScanner;
use runtrix::sources::{
    AlertHistory, MarketSource, PlaceholderAlertHistory, PlaceholderMarketSource,
    PlaceholderTickerUniverse, TickerUniverse,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    logging::init_logging();

    let env = config::get_environment();
    let scan_interval = config::get_scan_interval_seconds();

    info!("Starting Runtrix Scanner");
    info!(environment = %env, "Environment");

    if scan_interval == 0 {
        return Err("SCAN_INTERVAL_SECONDS must be > 0 for scanner".into());
    }

    let metrics = Arc::new(Metrics::new()?);

    // Placeholder collaborators until live integrations are wired in
    let market: Arc<dyn MarketSource> = Arc::new(PlaceholderMarketSource);
    let universe: Arc<dyn TickerUniverse> = Arc::new(PlaceholderTickerUniverse);
    let history: Arc<dyn AlertHistory> = Arc::new(PlaceholderAlertHistory);

    let pacing = Duration::from_millis(config::get_pacing_delay_ms());
    info!(
        interval = scan_interval,
        pacing_ms = pacing.as_millis() as u64,
        "Market scan: every {} seconds",
        scan_interval
    );

    let scanner = Arc::new(
        MarketScanner::new(market, universe)
            .with_pacing(pacing)
            .with_metrics(metrics.clone()),
    );

    // Delivery hand-off: downstream notification/storage consumes this
    // channel; here the batches are logged.
    let (deliveries, mut delivery_rx) = mpsc::channel::<Vec<runtrix::models::BreakoutStock>>(8);
    let delivery_task = tokio::spawn(async move {
        while let Some(batch) = delivery_rx.recv().await {
            for stock in &batch {
                info!(
                    ticker = %stock.ticker,
                    score = stock.breakout_score,
                    "Alert ready for delivery:\n{}",
                    stock.humanized_alert
                );
            }
        }
    });

    info!("Starting scan scheduler...");
    let scheduler = ScanScheduler::new(scanner, history, scan_interval, deliveries)
        .map_err(|e| format!("Failed to create scheduler: {}", e))?;
    scheduler
        .start()
        .await
        .map_err(|e| format!("Failed to start scheduler: {}", e))?;

    info!("Scanner started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down scanner...");
            scheduler.stop().await;
            delivery_task.abort();
            info!("Scanner stopped");
        }
    }

    Ok(())
}
