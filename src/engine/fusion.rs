//! Run-score fusion and advisory derivations
//!
//! Everything here is a pure function of already-fetched pillar outputs;
//! re-running fusion on the same inputs yields the same result apart from
//! the timestamp stamped by [`fuse`].

use crate::models::evaluation::{
    Comparable, DecisionFramework, EvaluationResult, FakeoutRisk, InstitutionalDetail,
    NarrativeDetail, SetupDetail, Verdict,
};
use chrono::Utc;

pub const INSTITUTIONAL_WEIGHT: f64 = 0.35;
pub const NARRATIVE_WEIGHT: f64 = 0.35;
pub const OTHER_WEIGHT: f64 = 0.30;

/// Verify pillar weights sum to 1.0
pub fn verify_weights() -> bool {
    (INSTITUTIONAL_WEIGHT + NARRATIVE_WEIGHT + OTHER_WEIGHT - 1.0).abs() < 0.001
}

/// Weighted composite score, rounded to the nearest integer
pub fn run_score(institutional: f64, narrative: f64, other: f64) -> i64 {
    (institutional * INSTITUTIONAL_WEIGHT + narrative * NARRATIVE_WEIGHT + other * OTHER_WEIGHT)
        .round() as i64
}

/// Verdict bands over the run score
pub fn verdict(run_score: i64) -> Verdict {
    if run_score >= 75 {
        Verdict::HighPotential
    } else if run_score >= 50 {
        Verdict::Moderate
    } else {
        Verdict::DudFakeout
    }
}

/// Upside projection band for the run score
pub fn upside_projection(run_score: i64) -> &'static str {
    if run_score >= 85 {
        "100-300%+"
    } else if run_score >= 75 {
        "50-150%"
    } else if run_score >= 60 {
        "20-50%"
    } else if run_score >= 50 {
        "10-25%"
    } else {
        "<10% or negative"
    }
}

/// Count risk flags across the pillars and map to a tier
pub fn fakeout_risk(
    institutional_score: f64,
    narrative_score: f64,
    setup: &SetupDetail,
) -> FakeoutRisk {
    let mut flags = 0;
    if institutional_score < 50.0 {
        flags += 1;
    }
    if narrative_score < 50.0 {
        flags += 1;
    }
    if setup.has_warnings() {
        flags += 1;
    }

    match flags {
        0 => FakeoutRisk::Low,
        1 => FakeoutRisk::Medium,
        _ => FakeoutRisk::High,
    }
}

/// Conditional advisory strings, capped at five entries
pub fn watch_list(
    institutional: &InstitutionalDetail,
    narrative: &NarrativeDetail,
    setup: &SetupDetail,
) -> Vec<String> {
    let mut watch = Vec::new();

    if let InstitutionalDetail::Scored(breakdown) = institutional {
        if breakdown.volume_vs_avg > 50.0 {
            watch.push("Volume sustainability above 1.5x average".to_string());
        }
    }
    if narrative.x_data.tweet_count > 100 {
        watch.push("Social sentiment shifts".to_string());
    }
    if let SetupDetail::Scored(breakdown) = setup {
        if breakdown.fundamentals.earnings_beat {
            watch.push("Next earnings catalyst".to_string());
        }
    }
    watch.push("Sector rotation momentum".to_string());

    watch.truncate(5);
    watch
}

/// Position-size tier and stop band for the run score
pub fn decision_framework(run_score: i64) -> DecisionFramework {
    let (position, stop) = if run_score >= 75 {
        ("half", "8-10% below entry")
    } else if run_score >= 50 {
        ("quarter", "6-8% below entry")
    } else {
        ("watch", "N/A - wait for better setup")
    };

    DecisionFramework {
        entry_signals: vec![
            "Volume remains elevated (>1.5x avg)".to_string(),
            "Price holds above breakout level".to_string(),
            "No distribution patterns on volume".to_string(),
            "Social sentiment remains positive".to_string(),
        ],
        exit_signals: vec![
            "Volume drops below 20-day average".to_string(),
            "Breaks below key support with volume".to_string(),
            "RSI divergence forms on daily".to_string(),
            "Social sentiment turns negative".to_string(),
        ],
        position_sizing: position.to_string(),
        time_horizon: "2-6 months optimal".to_string(),
        stop_loss_suggestion: stop.to_string(),
        take_profit_levels: vec![
            "+50% (trim 1/3)".to_string(),
            "+100% (trim 1/3)".to_string(),
            "Trail remaining".to_string(),
        ],
    }
}

/// Historical analogs for context.
// TODO: query the alert-performance store once outcomes accumulate there.
pub fn comparables() -> Vec<Comparable> {
    vec![
        Comparable {
            ticker: "PLTR".to_string(),
            similarity: 82,
            outcome: "+245% over 8 months".to_string(),
            lessons: "Similar government contract growth + AI narrative".to_string(),
        },
        Comparable {
            ticker: "NVDA".to_string(),
            similarity: 75,
            outcome: "+180% over 6 months".to_string(),
            lessons: "AI infrastructure buildout theme".to_string(),
        },
        Comparable {
            ticker: "AEVA".to_string(),
            similarity: 68,
            outcome: "+890% over 4 months".to_string(),
            lessons: "LiDAR + automotive adoption narrative".to_string(),
        },
    ]
}

/// One-line reasoning summary across the pillars
pub fn reasoning(
    run_score: i64,
    verdict: Verdict,
    institutional: &InstitutionalDetail,
    narrative: &NarrativeDetail,
    setup: &SetupDetail,
) -> String {
    format!(
        "{} - Run Score: {}/100 | Institutional: {} | Narrative: {} | Setup: {}",
        verdict,
        run_score,
        institutional.key_insight(),
        narrative.key_insight,
        setup.key_insight(),
    )
}

/// Combine the three scored pillars into a complete evaluation
pub fn fuse(
    ticker: &str,
    institutional: (f64, InstitutionalDetail),
    narrative: (f64, NarrativeDetail),
    setup: (f64, SetupDetail),
) -> EvaluationResult {
    let (inst_score, inst_detail) = institutional;
    let (narr_score, narr_detail) = narrative;
    let (other_score, setup_detail) = setup;

    let score = run_score(inst_score, narr_score, other_score);
    let verdict = verdict(score);

    EvaluationResult {
        ticker: ticker.to_string(),
        run_score: score,
        verdict,
        institutional_score: round1(inst_score),
        narrative_score: round1(narr_score),
        other_score: round1(other_score),
        reasoning: reasoning(score, verdict, &inst_detail, &narr_detail, &setup_detail),
        upside_projection: upside_projection(score).to_string(),
        fakeout_risk: fakeout_risk(inst_score, narr_score, &setup_detail),
        watch_for: watch_list(&inst_detail, &narr_detail, &setup_detail),
        timestamp: Utc::now(),
        institutional_details: inst_detail,
        narrative_details: narr_detail,
        other_details: setup_detail,
        decision_framework: decision_framework(score),
        comparables: comparables(),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
