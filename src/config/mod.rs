//! Environment-based runtime configuration
//!
//! Credential loading for the data collaborators is out of scope; only the
//! knobs the engine and scanner consume live here.

use std::env;

/// Deployment environment, used to pick the log format
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Delay between sequential per-ticker external calls, in milliseconds
pub fn get_pacing_delay_ms() -> u64 {
    env::var("PACING_DELAY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(500)
}

/// Market scan interval in seconds (0 = disabled)
pub fn get_scan_interval_seconds() -> u64 {
    env::var("SCAN_INTERVAL_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
