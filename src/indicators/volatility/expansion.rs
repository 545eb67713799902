//! Volatility expansion check
//!
//! Compares trailing short-window dispersion against the full history
//! window to flag a regime change into higher volatility.

use crate::common::math;

/// True when the sample std of the last `recent_period` closes exceeds
/// `factor` times the full-window sample std.
pub fn volatility_expansion(closes: &[f64], recent_period: usize, factor: f64) -> Option<bool> {
    let recent = math::standard_deviation(closes, recent_period)?;
    let full = math::standard_deviation_full(closes)?;
    Some(recent > full * factor)
}
