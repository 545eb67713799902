//! Institutional activity pillar scorer

use crate::models::bundles::InstitutionalBundle;
use crate::models::evaluation::{InstitutionalBreakdown, InstitutionalDetail};

pub const VOLUME_WEIGHT: f64 = 0.50;
pub const OI_WEIGHT: f64 = 0.35;
pub const BLOCK_WEIGHT: f64 = 0.15;

/// Neutral score substituted when either required section is missing
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Score institutional activity 0-100 from the fetched bundle.
///
/// Missing or errored volume/options sections degrade to a neutral 50.0
/// rather than failing the evaluation.
pub fn score_institutional(bundle: &InstitutionalBundle) -> (f64, InstitutionalDetail) {
    let (volume, options) = match (bundle.volume_data.ok(), bundle.options_data.ok()) {
        (Some(volume), Some(options)) => (volume, options),
        _ => {
            return (
                NEUTRAL_SCORE,
                InstitutionalDetail::Unavailable {
                    reason: "Insufficient data".to_string(),
                },
            )
        }
    };

    let vol_vs_avg = volume.volume_vs_avg_pct;
    let volume_score = volume_score(vol_vs_avg);

    let oi_skew = options.oi_skew_pct;
    let oi_score = oi_score(oi_skew);

    let block_count = bundle.block_data.block_trades_count;
    let block_score = block_score(block_count);

    let score = volume_score * VOLUME_WEIGHT + oi_score * OI_WEIGHT + block_score * BLOCK_WEIGHT;

    let (key_insight, smart_money_signal) = if volume_score >= 80.0 && oi_score >= 60.0 {
        (
            "Strong institutional conviction - volume surge + bullish OI",
            "Heavy accumulation phase detected",
        )
    } else if volume_score >= 60.0 {
        (
            "Moderate institutional interest",
            "Building positions gradually",
        )
    } else if volume_score < 40.0 {
        (
            "Weak volume - potential liquidity trap",
            "No significant institutional activity",
        )
    } else {
        ("Mixed institutional signals", "Unclear institutional stance")
    };

    let participation = if vol_vs_avg > 50.0 {
        "strong"
    } else if vol_vs_avg > 20.0 {
        "moderate"
    } else {
        "weak"
    };
    let volume_context = format!(
        "Volume {:+.0}% vs 50-day avg indicates {} institutional participation",
        vol_vs_avg, participation
    );

    let detail = InstitutionalDetail::Scored(InstitutionalBreakdown {
        volume_vs_avg: vol_vs_avg,
        volume_score,
        volume_trend: volume.volume_trend.clone(),
        oi_skew,
        oi_score,
        oi_trend: options.oi_trend.clone(),
        block_trades_detected: block_count,
        dark_pool_activity: bundle.block_data.dark_pool_activity.clone(),
        key_insight: key_insight.to_string(),
        smart_money_signal: smart_money_signal.to_string(),
        volume_context,
    });

    (score, detail)
}

fn volume_score(vol_vs_avg: f64) -> f64 {
    if vol_vs_avg > 100.0 {
        100.0
    } else if vol_vs_avg > 50.0 {
        80.0
    } else if vol_vs_avg > 20.0 {
        60.0
    } else if vol_vs_avg > 0.0 {
        40.0
    } else {
        20.0
    }
}

fn oi_score(oi_skew: f64) -> f64 {
    if oi_skew > 20.0 {
        100.0
    } else if oi_skew > 10.0 {
        80.0
    } else if oi_skew > 0.0 {
        60.0
    } else {
        40.0
    }
}

fn block_score(block_count: u32) -> f64 {
    if block_count >= 5 {
        100.0
    } else if block_count >= 3 {
        80.0
    } else if block_count >= 1 {
        60.0
    } else {
        40.0
    }
}
