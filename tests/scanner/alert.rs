//! Unit tests for alert rendering

use runtrix::scanner::alert::humanize;

#[test]
fn test_tier_strong_volume() {
    let alert = humanize("AAPL", 192.3, 140, 72.0, 2.3);
    assert!(alert.contains("strong volume breakout"));
    assert!(alert.contains("overbought momentum"));
    assert!(alert.contains("heavy volume"));
}

#[test]
fn test_tier_momentum() {
    let alert = humanize("MSFT", 410.0, 110, 63.0, 1.7);
    assert!(alert.contains("momentum breakout"));
    assert!(alert.contains("bullish momentum"));
    assert!(alert.contains("volume surge"));
}

#[test]
fn test_tier_technical_with_oversold_bounce() {
    let alert = humanize("F", 12.5, 90, 35.0, 1.2);
    assert!(alert.contains("technical breakout"));
    assert!(alert.contains("oversold bounce potential"));
    assert!(!alert.contains("volume surge"));
}

#[test]
fn test_neutral_rsi_adds_no_descriptor() {
    let alert = humanize("KO", 60.0, 85, 50.0, 1.0);
    assert!(alert.contains("Setup: technical breakout"));
    assert!(!alert.contains("momentum +"));
}

#[test]
fn test_alert_fields_rendered() {
    let alert = humanize("NVDA", 131.27, 160, 68.4, 1.9);
    assert!(alert.starts_with("NVDA\n"));
    assert!(alert.contains("Entry: $131.27"));
    assert!(alert.contains("Score: 160"));
    assert!(alert.contains("RSI: 68.4"));
    assert!(alert.contains("Volume: 1.9x avg"));
}
