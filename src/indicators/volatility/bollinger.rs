//! Bollinger Bands indicator

use crate::common::math;

/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub period: usize,
    pub std_dev: f64,
}

/// Calculate Bollinger Bands over the most recent `period` closes
pub fn bollinger_bands(closes: &[f64], period: usize, std_dev: f64) -> Option<BollingerBands> {
    if closes.len() < period {
        return None;
    }

    let middle = math::sma(closes, period)?;
    let std = math::standard_deviation(closes, period)?;

    Some(BollingerBands {
        upper: middle + std_dev * std,
        middle,
        lower: middle - std_dev * std,
        period,
        std_dev,
    })
}

/// Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn bollinger_bands_default(closes: &[f64]) -> Option<BollingerBands> {
    bollinger_bands(closes, 20, 2.0)
}
