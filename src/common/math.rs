//! Shared numeric helpers for indicator computation

/// Arithmetic mean of a slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Simple moving average over the most recent `period` values
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let sum: f64 = values.iter().rev().take(period).sum();
    Some(sum / period as f64)
}

/// Sample standard deviation (n-1) over the most recent `period` values
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period < 2 || values.len() < period {
        return None;
    }
    let window: Vec<f64> = values.iter().rev().take(period).copied().collect();
    let avg = window.iter().sum::<f64>() / period as f64;
    let variance = window
        .iter()
        .map(|v| (v - avg).powi(2))
        .sum::<f64>()
        / (period - 1) as f64;
    Some(variance.sqrt())
}

/// Sample standard deviation over the whole slice
pub fn standard_deviation_full(values: &[f64]) -> Option<f64> {
    standard_deviation(values, values.len())
}
