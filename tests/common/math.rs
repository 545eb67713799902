//! Unit tests for shared math helpers

use runtrix::common::math::{mean, sma, standard_deviation, standard_deviation_full};

#[test]
fn test_mean_empty() {
    assert!(mean(&[]).is_none());
}

#[test]
fn test_mean_basic() {
    assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
}

#[test]
fn test_sma_insufficient_data() {
    assert!(sma(&[1.0, 2.0], 3).is_none());
    assert!(sma(&[1.0], 0).is_none());
}

#[test]
fn test_sma_uses_most_recent_window() {
    // Window of 2 over [1, 2, 3, 4] averages the last two values
    assert_eq!(sma(&[1.0, 2.0, 3.0, 4.0], 2), Some(3.5));
}

#[test]
fn test_standard_deviation_is_sample_variant() {
    // Sample std of [2, 4, 4, 4, 5, 5, 7, 9] is sqrt(32/7)
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let std = standard_deviation(&values, values.len()).unwrap();
    assert!((std - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
}

#[test]
fn test_standard_deviation_needs_two_values() {
    assert!(standard_deviation(&[1.0], 1).is_none());
    assert!(standard_deviation_full(&[1.0]).is_none());
}

#[test]
fn test_standard_deviation_constant_series_is_zero() {
    let std = standard_deviation(&[5.0; 10], 10).unwrap();
    assert_eq!(std, 0.0);
}
