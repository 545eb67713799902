//! Technical/fundamental setup pillar scorer

use crate::models::bundles::{TickerFacts, Trend};
use crate::models::evaluation::{
    FundamentalSummary, SetupBreakdown, SetupDetail, TechnicalAssessment,
};

pub const TECH_WEIGHT: f64 = 0.45;
pub const FUND_WEIGHT: f64 = 0.35;
pub const RISK_WEIGHT: f64 = 0.20;

/// Neutral score substituted when the technical section is missing
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Score the technical/fundamental setup 0-100 from the fetched facts.
pub fn score_setup(facts: &TickerFacts) -> (f64, SetupDetail) {
    let tech = match facts.technical.ok() {
        Some(tech) => tech,
        None => {
            return (
                NEUTRAL_SCORE,
                SetupDetail::Unavailable {
                    reason: "Technical data unavailable".to_string(),
                },
            )
        }
    };
    let fund = &facts.fundamental;

    let warnings = tech.warning_flags.len() as f64;

    let mut tech_score = match tech.trend {
        Trend::StrongUptrend => 100.0,
        Trend::Uptrend => 80.0,
        Trend::Sideways => 60.0,
        Trend::Downtrend => 40.0,
    };
    tech_score = (tech_score - warnings * 10.0).max(20.0);

    let fund_score = if fund.is_fundamentally_healthy {
        if fund.has_growth_story {
            100.0
        } else {
            80.0
        }
    } else {
        50.0
    };

    let risk_score = if tech.warning_flags.is_empty() {
        80.0
    } else {
        (80.0 - warnings * 20.0).max(40.0)
    };

    let score = tech_score * TECH_WEIGHT + fund_score * FUND_WEIGHT + risk_score * RISK_WEIGHT;

    let key_insight = format!(
        "{} technical setup with {} fundamentals",
        if tech.warning_flags.is_empty() {
            "Clean"
        } else {
            "Cautionary"
        },
        if fund_score >= 80.0 {
            "strong"
        } else {
            "moderate"
        },
    );

    let revenue_growth = match fund.metrics.revenue_growth {
        Some(growth) => format!("{:+.0}% YoY", growth * 100.0),
        None => "N/A".to_string(),
    };

    let detail = SetupDetail::Scored(SetupBreakdown {
        technical_score: tech_score,
        fundamental_score: fund_score,
        risk_score,
        key_insight,
        technical: TechnicalAssessment {
            trend: tech.trend,
            support_level: tech.support_level,
            resistance_level: tech.resistance_level,
            rsi: tech.rsi,
            macd_signal: tech.macd_signal.clone(),
            pattern_detected: tech.pattern_detected.clone(),
            breakout_quality: if tech.warning_flags.is_empty() {
                "clean".to_string()
            } else {
                "messy".to_string()
            },
            volume_confirmation: tech.follow_through == "strong",
            follow_through: tech.follow_through.clone(),
            warning_flags: tech.warning_flags.clone(),
        },
        fundamentals: FundamentalSummary {
            earnings_beat: fund.earnings_beat,
            revenue_growth,
            guidance: if fund.has_growth_story {
                "raised".to_string()
            } else {
                "maintained".to_string()
            },
            margin_trend: if fund.is_fundamentally_healthy {
                "improving".to_string()
            } else {
                "stable".to_string()
            },
        },
    });

    (score, detail)
}
