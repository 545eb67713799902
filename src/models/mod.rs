//! Shared data models spanning the engine layers.

pub mod breakout;
pub mod bundles;
pub mod evaluation;

pub use breakout::{BreakoutStock, PriceBar};
pub use bundles::{
    BlockActivity, EarningsNarrative, FundamentalMetrics, FundamentalSnapshot,
    InstitutionalBundle, NarrativeBundle, NewsFraming, OptionsActivity, Section, SocialBuzz,
    TechnicalSnapshot, TickerFacts, Trend, VolumeActivity,
};
pub use evaluation::{
    Comparable, DecisionFramework, EvaluationResult, FakeoutRisk, FundamentalSummary,
    InstitutionalBreakdown, InstitutionalDetail, NarrativeDetail, NarrativeVerdict,
    SetupBreakdown, SetupDetail, TechnicalAssessment, Verdict,
};
