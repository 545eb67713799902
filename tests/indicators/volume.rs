//! Unit tests for the volume ratio

use runtrix::indicators::volume::volume_ratio;

#[test]
fn test_volume_ratio_insufficient_data() {
    assert!(volume_ratio(&[1000.0; 10], 20).is_none());
    assert!(volume_ratio(&[], 20).is_none());
}

#[test]
fn test_volume_ratio_flat() {
    let profile = volume_ratio(&[1000.0; 20], 20).unwrap();
    assert!((profile.ratio - 1.0).abs() < 1e-9);
    assert_eq!(profile.average, 1000.0);
}

#[test]
fn test_volume_ratio_surge() {
    let mut volumes = vec![1000.0; 19];
    volumes.push(2000.0);
    let profile = volume_ratio(&volumes, 20).unwrap();
    // Average includes the surge bar: 21000 / 20 = 1050
    assert!((profile.average - 1050.0).abs() < 1e-9);
    assert!((profile.ratio - 2000.0 / 1050.0).abs() < 1e-9);
}

#[test]
fn test_zero_average_volume_yields_zero_ratio() {
    let profile = volume_ratio(&[0.0; 20], 20).unwrap();
    assert_eq!(profile.ratio, 0.0);
}
