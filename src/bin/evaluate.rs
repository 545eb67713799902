//! One-shot ticker evaluation
//!
//! Evaluates the tickers passed on the command line and prints each fused
//! result as JSON.

use dotenvy::dotenv;
use runtrix::config;
use runtrix::engine::RunPotentialEngine;
use runtrix::logging;
use runtrix::sources::{
    InstitutionalSource, MarketSource, NarrativeSource, PlaceholderInstitutionalSource,
    PlaceholderMarketSource, PlaceholderNarrativeSource,
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    logging::init_logging();

    let tickers: Vec<String> = std::env::args().skip(1).collect();
    if tickers.is_empty() {
        return Err("usage: evaluate TICKER [TICKER ...]".into());
    }

    // Placeholder collaborators until live integrations are wired in
    let institutional: Arc<dyn InstitutionalSource> = Arc::new(PlaceholderInstitutionalSource);
    let narrative: Arc<dyn NarrativeSource> = Arc::new(PlaceholderNarrativeSource);
    let market: Arc<dyn MarketSource> = Arc::new(PlaceholderMarketSource);

    let engine = RunPotentialEngine::new(institutional, narrative, market)
        .with_pacing(Duration::from_millis(config::get_pacing_delay_ms()));

    let results = engine.evaluate_batch(&tickers).await;

    for result in &results {
        println!("{}", serde_json::to_string_pretty(result)?);
    }

    Ok(())
}
