//! Fused evaluation result and per-pillar detail records

use crate::models::bundles::{EarningsNarrative, NewsFraming, SocialBuzz, Trend};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict derived from the run score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "High Potential")]
    HighPotential,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Dud/Fakeout")]
    DudFakeout,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::HighPotential => "High Potential",
            Verdict::Moderate => "Moderate",
            Verdict::DudFakeout => "Dud/Fakeout",
        };
        write!(f, "{}", label)
    }
}

/// Fakeout risk tier from the counted risk flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FakeoutRisk {
    Low,
    Medium,
    High,
}

/// Institutional pillar breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstitutionalBreakdown {
    pub volume_vs_avg: f64,
    pub volume_score: f64,
    pub volume_trend: String,
    pub oi_skew: f64,
    pub oi_score: f64,
    pub oi_trend: String,
    pub block_trades_detected: u32,
    pub dark_pool_activity: String,
    pub key_insight: String,
    pub smart_money_signal: String,
    pub volume_context: String,
}

/// Institutional pillar detail: a breakdown when both the volume and options
/// sections arrived, otherwise the neutral-score marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InstitutionalDetail {
    Unavailable { reason: String },
    Scored(InstitutionalBreakdown),
}

impl InstitutionalDetail {
    pub fn key_insight(&self) -> &str {
        match self {
            InstitutionalDetail::Unavailable { .. } => "Data unavailable",
            InstitutionalDetail::Scored(breakdown) => &breakdown.key_insight,
        }
    }
}

/// Narrative strength label from the total narrative score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeVerdict {
    ViralNarrative,
    StrongNarrative,
    BuildingNarrative,
    WeakNarrative,
    NoNarrative,
}

/// Narrative pillar detail. The narrative sub-signals degrade individually,
/// so there is no unavailable variant for the pillar as a whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeDetail {
    pub total_score: f64,
    pub verdict: NarrativeVerdict,
    pub x_engagement_component: f64,
    pub news_framing_component: f64,
    pub earnings_narrative_component: f64,
    pub confluence_bonus: f64,
    pub framing_shift: String,
    pub narrative_inflection: String,
    pub key_insight: String,
    pub x_data: SocialBuzz,
    pub news_data: NewsFraming,
    pub earnings_data: EarningsNarrative,
}

/// Technical echo attached to the setup breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalAssessment {
    pub trend: Trend,
    pub support_level: f64,
    pub resistance_level: f64,
    pub rsi: f64,
    pub macd_signal: String,
    pub pattern_detected: String,
    pub breakout_quality: String,
    pub volume_confirmation: bool,
    pub follow_through: String,
    pub warning_flags: Vec<String>,
}

/// Fundamental summary attached to the setup breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundamentalSummary {
    pub earnings_beat: bool,
    pub revenue_growth: String,
    pub guidance: String,
    pub margin_trend: String,
}

/// Setup pillar breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupBreakdown {
    pub technical_score: f64,
    pub fundamental_score: f64,
    pub risk_score: f64,
    pub key_insight: String,
    pub technical: TechnicalAssessment,
    pub fundamentals: FundamentalSummary,
}

/// Setup pillar detail
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SetupDetail {
    Unavailable { reason: String },
    Scored(SetupBreakdown),
}

impl SetupDetail {
    pub fn key_insight(&self) -> &str {
        match self {
            SetupDetail::Unavailable { .. } => "N/A",
            SetupDetail::Scored(breakdown) => &breakdown.key_insight,
        }
    }

    pub fn has_warnings(&self) -> bool {
        match self {
            SetupDetail::Unavailable { .. } => false,
            SetupDetail::Scored(breakdown) => !breakdown.technical.warning_flags.is_empty(),
        }
    }
}

/// Position-size and stop-loss guidance selected by the run-score band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionFramework {
    pub entry_signals: Vec<String>,
    pub exit_signals: Vec<String>,
    pub position_sizing: String,
    pub time_horizon: String,
    pub stop_loss_suggestion: String,
    pub take_profit_levels: Vec<String>,
}

/// Historical analog for context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparable {
    pub ticker: String,
    pub similarity: u8,
    pub outcome: String,
    pub lessons: String,
}

/// One fused assessment for a ticker. Immutable once returned; persistence
/// is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub ticker: String,
    pub run_score: i64,
    pub verdict: Verdict,
    pub institutional_score: f64,
    pub narrative_score: f64,
    pub other_score: f64,
    pub reasoning: String,
    pub upside_projection: String,
    pub fakeout_risk: FakeoutRisk,
    pub watch_for: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub institutional_details: InstitutionalDetail,
    pub narrative_details: NarrativeDetail,
    pub other_details: SetupDetail,
    pub decision_framework: DecisionFramework,
    pub comparables: Vec<Comparable>,
}
