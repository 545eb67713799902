//! Unit tests for the volatility expansion check

use runtrix::indicators::volatility::volatility_expansion;

#[test]
fn test_expansion_insufficient_data() {
    assert!(volatility_expansion(&[100.0; 3], 5, 1.2).is_none());
    assert!(volatility_expansion(&[], 5, 1.2).is_none());
}

#[test]
fn test_expansion_detected_after_quiet_period() {
    // Long flat stretch then a sharp 5-bar move
    let mut closes = vec![100.0; 55];
    closes.extend([102.0, 105.0, 109.0, 110.0, 114.4]);
    assert_eq!(volatility_expansion(&closes, 5, 1.2), Some(true));
}

#[test]
fn test_no_expansion_in_steady_series() {
    // Uniform oscillation: recent dispersion matches the full window
    let closes: Vec<f64> = (0..60)
        .map(|i| if i % 2 == 0 { 95.0 } else { 105.0 })
        .collect();
    assert_eq!(volatility_expansion(&closes, 5, 1.2), Some(false));
}

#[test]
fn test_flat_series_never_expands() {
    let closes = vec![100.0; 60];
    assert_eq!(volatility_expansion(&closes, 5, 1.2), Some(false));
}
