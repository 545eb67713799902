//! Delivery dedup gate
//!
//! Candidates already alerted within the trailing window are excluded from
//! the current delivery batch. They stay valid scan results; they just are
//! not re-notified.

use crate::models::BreakoutStock;
use std::collections::HashSet;

/// Trailing suppression window collaborators use to build the recent set
pub const DEDUP_WINDOW_DAYS: i64 = 7;

/// Order-preserving set difference on ticker
pub fn filter_recent(
    candidates: Vec<BreakoutStock>,
    recent: &HashSet<String>,
) -> Vec<BreakoutStock> {
    candidates
        .into_iter()
        .filter(|candidate| !recent.contains(&candidate.ticker))
        .collect()
}
