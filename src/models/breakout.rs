//! Price history samples and breakout-scan candidates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One close/volume sample. Histories are ordered most-recent-last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBar {
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl PriceBar {
    pub fn new(close: f64, volume: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            close,
            volume,
            timestamp,
        }
    }
}

/// One technical-breakout candidate. Only produced when the accumulated
/// breakout score clears the acceptance threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakoutStock {
    pub ticker: String,
    pub close_price: f64,
    pub rsi: f64,
    pub breakout_score: u32,
    pub volume: f64,
    pub avg_volume: f64,
    pub volume_ratio: f64,
    pub setup_type: String,
    pub humanized_alert: String,
}
