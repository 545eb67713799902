//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = Average Gain / Average Loss

/// Calculate RSI over the most recent `period` price changes.
///
/// Returns `None` when the series is too short. A window with zero average
/// loss has no defined RS; it is reported as a neutral 50.0 instead of
/// dividing by zero.
pub fn relative_strength_index(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;

    for i in (closes.len() - period)..closes.len() {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gains += change;
        } else {
            losses += change.abs();
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return Some(50.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// RSI with the standard 14 period
pub fn relative_strength_index_default(closes: &[f64]) -> Option<f64> {
    relative_strength_index(closes, 14)
}
