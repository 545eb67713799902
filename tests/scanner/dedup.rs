//! Unit tests for the delivery dedup gate

use runtrix::models::BreakoutStock;
use runtrix::scanner::dedup::{filter_recent, DEDUP_WINDOW_DAYS};
use std::collections::HashSet;

fn stock(ticker: &str, score: u32) -> BreakoutStock {
    BreakoutStock {
        ticker: ticker.to_string(),
        close_price: 100.0,
        rsi: 66.0,
        breakout_score: score,
        volume: 2000.0,
        avg_volume: 1000.0,
        volume_ratio: 2.0,
        setup_type: "breakout".to_string(),
        humanized_alert: format!("{} alert", ticker),
    }
}

#[test]
fn test_recent_tickers_excluded() {
    let candidates = vec![stock("AAA", 150), stock("BBB", 120), stock("CCC", 90)];
    let recent: HashSet<String> = ["BBB".to_string()].into_iter().collect();
    let surviving = filter_recent(candidates, &recent);
    let tickers: Vec<&str> = surviving.iter().map(|s| s.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["AAA", "CCC"]);
}

#[test]
fn test_empty_recent_set_passes_everything() {
    let candidates = vec![stock("AAA", 150), stock("BBB", 120)];
    let surviving = filter_recent(candidates.clone(), &HashSet::new());
    assert_eq!(surviving.len(), candidates.len());
}

#[test]
fn test_order_preserved() {
    let candidates = vec![
        stock("DDD", 180),
        stock("AAA", 150),
        stock("CCC", 120),
        stock("BBB", 95),
    ];
    let recent: HashSet<String> = ["AAA".to_string()].into_iter().collect();
    let surviving = filter_recent(candidates, &recent);
    let tickers: Vec<&str> = surviving.iter().map(|s| s.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["DDD", "CCC", "BBB"]);
}

#[test]
fn test_all_recent_yields_empty_batch() {
    let candidates = vec![stock("AAA", 150)];
    let recent: HashSet<String> = ["AAA".to_string()].into_iter().collect();
    assert!(filter_recent(candidates, &recent).is_empty());
}

#[test]
fn test_deterministic_for_same_inputs() {
    let recent: HashSet<String> = ["BBB".to_string()].into_iter().collect();
    let a = filter_recent(vec![stock("AAA", 150), stock("BBB", 120)], &recent);
    let b = filter_recent(vec![stock("AAA", 150), stock("BBB", 120)], &recent);
    assert_eq!(a.len(), b.len());
    assert_eq!(a[0].ticker, b[0].ticker);
}

#[test]
fn test_window_constant() {
    assert_eq!(DEDUP_WINDOW_DAYS, 7);
}
