//! Unit tests for the RSI indicator

use runtrix::indicators::momentum::{relative_strength_index, relative_strength_index_default};

fn rising_closes(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64 * 0.5).collect()
}

fn falling_closes(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 - i as f64 * 0.5).collect()
}

#[test]
fn test_rsi_insufficient_data() {
    assert!(relative_strength_index(&rising_closes(14), 14).is_none());
    assert!(relative_strength_index_default(&rising_closes(10)).is_none());
}

#[test]
fn test_rsi_bounded() {
    let mut closes = rising_closes(30);
    closes.extend(falling_closes(10));
    let rsi = relative_strength_index(&closes, 14).unwrap();
    assert!((0.0..=100.0).contains(&rsi));
}

#[test]
fn test_rsi_high_in_uptrend() {
    // Mostly gains with one real down bar keeps the loss average nonzero
    let mut closes = rising_closes(30);
    closes[20] -= 0.7;
    let rsi = relative_strength_index(&closes, 14).unwrap();
    assert!(rsi > 65.0);
    assert!(rsi <= 100.0);
}

#[test]
fn test_rsi_low_in_downtrend() {
    let mut closes = falling_closes(30);
    closes[20] += 0.7;
    let rsi = relative_strength_index(&closes, 14).unwrap();
    assert!(rsi < 35.0);
}

#[test]
fn test_rsi_zero_loss_window_is_neutral() {
    // All gains in the window: no defined RS, reported as neutral
    let closes = rising_closes(30);
    assert_eq!(relative_strength_index(&closes, 14), Some(50.0));
}

#[test]
fn test_rsi_flat_window_is_neutral() {
    let closes = vec![100.0; 30];
    assert_eq!(relative_strength_index(&closes, 14), Some(50.0));
}
