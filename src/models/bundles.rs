//! Typed fetch-result contracts for the external data collaborators
//!
//! Each bundle mirrors the wire shape the upstream fetchers produce. Sections
//! that can arrive as an `{"error": "..."}` object are wrapped in [`Section`].

use serde::{Deserialize, Serialize};

/// A sub-payload that is either populated or an upstream error marker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section<T> {
    Ok(T),
    Err { error: String },
}

impl<T> Section<T> {
    pub fn ok(&self) -> Option<&T> {
        match self {
            Section::Ok(value) => Some(value),
            Section::Err { .. } => None,
        }
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Section::Err { .. })
    }
}

/// Volume activity vs the 50-day average
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeActivity {
    pub volume_vs_avg_pct: f64,
    pub volume_trend: String,
}

/// Options open-interest skew
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsActivity {
    pub oi_skew_pct: f64,
    pub oi_trend: String,
}

/// Block-trade and dark-pool activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockActivity {
    pub block_trades_count: u32,
    pub dark_pool_activity: String,
}

/// Institutional fetch result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstitutionalBundle {
    pub volume_data: Section<VolumeActivity>,
    pub options_data: Section<OptionsActivity>,
    pub block_data: BlockActivity,
}

/// Social engagement metrics from the X/keyword search collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialBuzz {
    pub engagement_score: f64,
    pub is_viral: bool,
    pub tweet_count: u32,
    pub total_likes: u64,
    pub viral_tweet_count: u32,
}

/// News/analyst framing counts and ratio from the web-search collaborator.
/// `framing_score` is the upstream annotation; scoring recomputes the
/// component from the ratio and mention count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsFraming {
    pub upgrade_mentions: u32,
    pub sentiment_ratio: f64,
    pub framing_score: f64,
}

/// Earnings-narrative keyword counts. `earnings_score` is the upstream
/// annotation; scoring recomputes the component from the counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsNarrative {
    pub strong_signals: u32,
    pub weak_signals: u32,
    pub inflection_ratio: f64,
    pub earnings_score: f64,
}

/// Narrative fetch result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeBundle {
    pub x_data: SocialBuzz,
    pub news_data: NewsFraming,
    pub earnings_data: EarningsNarrative,
}

/// Price trend classification supplied by the technical collaborator.
/// `Downtrend` scores in the lowest band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    StrongUptrend,
    Uptrend,
    Sideways,
    Downtrend,
}

/// Technical snapshot for a ticker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalSnapshot {
    pub rsi: f64,
    pub trend: Trend,
    #[serde(default)]
    pub warning_flags: Vec<String>,
    pub support_level: f64,
    pub resistance_level: f64,
    pub macd_signal: String,
    pub pattern_detected: String,
    pub follow_through: String,
}

/// Headline fundamental metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FundamentalMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_growth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
}

/// Fundamental snapshot for a ticker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    pub is_fundamentally_healthy: bool,
    pub has_growth_story: bool,
    pub earnings_beat: bool,
    #[serde(default)]
    pub metrics: FundamentalMetrics,
}

/// Technical/fundamental fetch result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerFacts {
    pub technical: Section<TechnicalSnapshot>,
    pub fundamental: FundamentalSnapshot,
}
