//! Cron-based scheduler for recurring market scan passes

use crate::models::BreakoutStock;
use crate::scanner::MarketScanner;
use crate::sources::AlertHistory;
use cron::Schedule;
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::{error, info, warn};

/// Scheduler that runs a scan pass on each cron tick and hands the
/// deliverable batch to the delivery channel.
pub struct ScanScheduler {
    scanner: Arc<MarketScanner>,
    history: Arc<dyn AlertHistory>,
    schedule: Schedule,
    deliveries: mpsc::Sender<Vec<BreakoutStock>>,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ScanScheduler {
    /// Create a new scheduler
    ///
    /// # Arguments
    /// * `scanner` - configured market scanner
    /// * `history` - alert-store view used to suppress recent tickers
    /// * `interval_seconds` - scan interval in seconds (0 = disabled)
    /// * `deliveries` - channel receiving each pass's deliverable batch
    pub fn new(
        scanner: Arc<MarketScanner>,
        history: Arc<dyn AlertHistory>,
        interval_seconds: u64,
        deliveries: mpsc::Sender<Vec<BreakoutStock>>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("Scheduler disabled: interval_seconds is 0".into());
        }

        // Cron format: second minute hour day month weekday
        let cron_expr = if interval_seconds >= 60 {
            let minutes = interval_seconds / 60;
            format!("0 */{} * * * *", minutes)
        } else {
            format!("*/{} * * * * *", interval_seconds)
        };

        let schedule = Schedule::from_str(&cron_expr).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid cron expression '{}': {}", cron_expr, e),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            "ScanScheduler: created with interval {}s (cron: {})",
            interval_seconds,
            cron_expr
        );

        Ok(Self {
            scanner,
            history,
            schedule,
            deliveries,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let scanner = self.scanner.clone();
        let history = self.history.clone();
        let schedule = self.schedule.clone();
        let deliveries = self.deliveries.clone();
        let handle_arc = self.handle.clone();

        let handle = tokio::spawn(async move {
            info!("ScanScheduler: started, waiting for cron schedule...");

            loop {
                let mut upcoming = schedule.upcoming(chrono::Utc);
                if let Some(next_tick) = upcoming.next() {
                    let now = chrono::Utc::now();
                    if next_tick > now {
                        let duration = (next_tick - now).to_std().unwrap_or_default();
                        tokio::time::sleep(duration).await;
                    }
                } else {
                    tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                    continue;
                }

                let recent = match history.recently_alerted().await {
                    Ok(recent) => recent,
                    Err(e) => {
                        warn!(error = %e, "ScanScheduler: alert history unavailable, scanning without dedup");
                        HashSet::new()
                    }
                };

                match scanner.scan(&recent).await {
                    Ok(outcome) => {
                        if outcome.deliverable.is_empty() {
                            info!("ScanScheduler: no deliverable candidates this pass");
                        } else if let Err(e) = deliveries.send(outcome.deliverable).await {
                            error!(error = %e, "ScanScheduler: delivery channel closed");
                        }
                    }
                    Err(e) => {
                        error!(error = %e, "ScanScheduler: scan pass failed: {}", e);
                    }
                }
            }
        });

        {
            let mut h = handle_arc.write().await;
            *h = Some(handle);
        }

        info!("ScanScheduler: started successfully");
        Ok(())
    }

    /// Stop the scheduler
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("ScanScheduler: stopped");
        }
    }

    /// Check if the scheduler is running
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
