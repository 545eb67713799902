//! Point-accumulating breakout detector
//!
//! Pure evaluation of one ticker's price/volume history. Each contribution
//! is independent; the total gates candidate emission at the acceptance
//! threshold.

use crate::indicators::momentum::relative_strength_index;
use crate::indicators::volatility::{bollinger_bands, volatility_expansion};
use crate::indicators::volume::volume_ratio;
use crate::models::{BreakoutStock, PriceBar};
use crate::scanner::alert;

/// Minimum history length the detector will evaluate
pub const MIN_HISTORY: usize = 20;

/// Candidates below this total are discarded, not emitted
pub const ACCEPT_THRESHOLD: u32 = 80;

const BAND_BREAK_POINTS: u32 = 70;
const VOLUME_SURGE_POINTS: u32 = 30;
const MOMENTUM_POINTS: u32 = 40;
const RSI_BONUS_POINTS: u32 = 20;
const EXPANSION_POINTS: u32 = 20;

const VOLUME_SURGE_RATIO: f64 = 1.5;
const MOMENTUM_PCT: f64 = 3.0;
const RSI_BONUS_LEVEL: f64 = 65.0;
const EXPANSION_FACTOR: f64 = 1.2;

/// Evaluate one ticker's history. Returns a candidate only when the
/// accumulated score clears [`ACCEPT_THRESHOLD`].
pub fn detect(ticker: &str, history: &[PriceBar]) -> Option<BreakoutStock> {
    if history.len() < MIN_HISTORY {
        return None;
    }

    let closes: Vec<f64> = history.iter().map(|bar| bar.close).collect();
    let volumes: Vec<f64> = history.iter().map(|bar| bar.volume).collect();

    let rsi = relative_strength_index(&closes, 14)?;
    let bands = bollinger_bands(&closes, 20, 2.0)?;
    let volume = volume_ratio(&volumes, 20)?;
    let expanded = volatility_expansion(&closes, 5, EXPANSION_FACTOR)?;

    let latest_close = *closes.last()?;
    let previous_close = closes[closes.len() - 2];
    let price_change = if previous_close != 0.0 {
        (latest_close - previous_close) / previous_close * 100.0
    } else {
        0.0
    };

    let mut score = 0;

    if latest_close > bands.upper {
        score += BAND_BREAK_POINTS;
    }
    if volume.ratio > VOLUME_SURGE_RATIO {
        score += VOLUME_SURGE_POINTS;
    }
    if price_change > MOMENTUM_PCT {
        score += MOMENTUM_POINTS;
    }
    if rsi > RSI_BONUS_LEVEL {
        score += RSI_BONUS_POINTS;
    }
    if expanded {
        score += EXPANSION_POINTS;
    }

    if score < ACCEPT_THRESHOLD {
        return None;
    }

    let humanized_alert = alert::humanize(ticker, latest_close, score, rsi, volume.ratio);

    Some(BreakoutStock {
        ticker: ticker.to_string(),
        close_price: round2(latest_close),
        rsi: round1(rsi),
        breakout_score: score,
        volume: volume.latest,
        avg_volume: volume.average,
        volume_ratio: round2(volume.ratio),
        setup_type: "breakout".to_string(),
        humanized_alert,
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
