//! Volume ratio against a rolling average

use crate::common::math;

/// Latest volume relative to its rolling average
#[derive(Debug, Clone)]
pub struct VolumeProfile {
    pub latest: f64,
    pub average: f64,
    pub ratio: f64,
}

/// Compare the latest volume to the mean of the most recent `period`
/// volumes. A zero (or negative) average yields ratio 0.0; the same policy
/// applies wherever the ratio is consumed.
pub fn volume_ratio(volumes: &[f64], period: usize) -> Option<VolumeProfile> {
    if volumes.is_empty() {
        return None;
    }
    let latest = *volumes.last()?;
    let average = math::sma(volumes, period)?;

    let ratio = if average > 0.0 { latest / average } else { 0.0 };

    Some(VolumeProfile {
        latest,
        average,
        ratio,
    })
}
