//! External data collaborator interfaces.
//!
//! The engine and scanner only consume these traits; credential handling,
//! transport, and rate limiting live behind the implementations.

use crate::models::bundles::{
    BlockActivity, EarningsNarrative, FundamentalSnapshot, InstitutionalBundle, NarrativeBundle,
    NewsFraming, Section, SocialBuzz, TickerFacts,
};
use crate::models::PriceBar;
use async_trait::async_trait;
use std::collections::HashSet;

pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// Institutional activity source (volume vs average, OI skew, block trades)
#[async_trait]
pub trait InstitutionalSource: Send + Sync {
    async fn fetch_institutional(&self, ticker: &str) -> Result<InstitutionalBundle, SourceError>;
}

/// Narrative source (social engagement, news framing, earnings inflection)
#[async_trait]
pub trait NarrativeSource: Send + Sync {
    async fn fetch_narrative(&self, ticker: &str) -> Result<NarrativeBundle, SourceError>;
}

/// Market data source for technical/fundamental facts and price history
#[async_trait]
pub trait MarketSource: Send + Sync {
    async fn fetch_facts(&self, ticker: &str) -> Result<TickerFacts, SourceError>;

    /// Get up to `periods` close/volume samples, most-recent-last
    async fn fetch_history(
        &self,
        ticker: &str,
        periods: usize,
    ) -> Result<Vec<PriceBar>, SourceError>;
}

/// Supplier of the ordered ticker universe for the market scan
#[async_trait]
pub trait TickerUniverse: Send + Sync {
    async fn tickers(&self) -> Result<Vec<String>, SourceError>;
}

/// Alert-store view: tickers already alerted within the dedup window
#[async_trait]
pub trait AlertHistory: Send + Sync {
    async fn recently_alerted(&self) -> Result<HashSet<String>, SourceError>;
}

pub struct PlaceholderInstitutionalSource;

#[async_trait]
impl InstitutionalSource for PlaceholderInstitutionalSource {
    async fn fetch_institutional(&self, _ticker: &str) -> Result<InstitutionalBundle, SourceError> {
        Ok(InstitutionalBundle {
            volume_data: Section::Err {
                error: "no institutional source configured".to_string(),
            },
            options_data: Section::Err {
                error: "no institutional source configured".to_string(),
            },
            block_data: BlockActivity {
                block_trades_count: 0,
                dark_pool_activity: "low".to_string(),
            },
        })
    }
}

pub struct PlaceholderNarrativeSource;

#[async_trait]
impl NarrativeSource for PlaceholderNarrativeSource {
    async fn fetch_narrative(&self, _ticker: &str) -> Result<NarrativeBundle, SourceError> {
        Ok(NarrativeBundle {
            x_data: SocialBuzz {
                engagement_score: 0.0,
                is_viral: false,
                tweet_count: 0,
                total_likes: 0,
                viral_tweet_count: 0,
            },
            news_data: NewsFraming {
                upgrade_mentions: 0,
                sentiment_ratio: 0.5,
                framing_score: 0.0,
            },
            earnings_data: EarningsNarrative {
                strong_signals: 0,
                weak_signals: 0,
                inflection_ratio: 0.0,
                earnings_score: 0.0,
            },
        })
    }
}

pub struct PlaceholderMarketSource;

#[async_trait]
impl MarketSource for PlaceholderMarketSource {
    async fn fetch_facts(&self, _ticker: &str) -> Result<TickerFacts, SourceError> {
        Ok(TickerFacts {
            technical: Section::Err {
                error: "no market source configured".to_string(),
            },
            fundamental: FundamentalSnapshot {
                is_fundamentally_healthy: false,
                has_growth_story: false,
                earnings_beat: false,
                metrics: Default::default(),
            },
        })
    }

    async fn fetch_history(
        &self,
        _ticker: &str,
        _periods: usize,
    ) -> Result<Vec<PriceBar>, SourceError> {
        Ok(Vec::new())
    }
}

pub struct PlaceholderTickerUniverse;

#[async_trait]
impl TickerUniverse for PlaceholderTickerUniverse {
    async fn tickers(&self) -> Result<Vec<String>, SourceError> {
        Ok(Vec::new())
    }
}

pub struct PlaceholderAlertHistory;

#[async_trait]
impl AlertHistory for PlaceholderAlertHistory {
    async fn recently_alerted(&self) -> Result<HashSet<String>, SourceError> {
        Ok(HashSet::new())
    }
}
