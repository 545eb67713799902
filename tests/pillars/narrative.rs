//! Unit tests for the narrative pillar scorer

use runtrix::models::bundles::{EarningsNarrative, NarrativeBundle, NewsFraming, SocialBuzz};
use runtrix::models::evaluation::NarrativeVerdict;
use runtrix::pillars::score_narrative;

fn quiet_bundle() -> NarrativeBundle {
    NarrativeBundle {
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
    }
}

fn hot_bundle() -> NarrativeBundle {
    NarrativeBundle {
        x_data: SocialBuzz {
            engagement_score: 90.0,
            is_viral: true,
            tweet_count: 140,
            total_likes: 12_000,
            viral_tweet_count: 5,
        },
        news_data: NewsFraming {
            upgrade_mentions: 3,
            sentiment_ratio: 0.8,
            framing_score: 20.0,
        },
        earnings_data: EarningsNarrative {
            strong_signals: 4,
            weak_signals: 0,
            inflection_ratio: 1.0,
            earnings_score: 20.0,
        },
    }
}

#[test]
fn test_quiet_ticker_scores_low() {
    // social floor 5, framing mixed 5, earnings 0, no confluence
    let (score, detail) = score_narrative(&quiet_bundle());
    assert_eq!(score, 10.0);
    assert_eq!(detail.verdict, NarrativeVerdict::NoNarrative);
    assert_eq!(detail.confluence_bonus, 0.0);
}

#[test]
fn test_full_confluence() {
    // 30 + 20 + 20 + 15 = 85
    let (score, detail) = score_narrative(&hot_bundle());
    assert_eq!(score, 85.0);
    assert_eq!(detail.verdict, NarrativeVerdict::ViralNarrative);
    assert_eq!(detail.confluence_bonus, 15.0);
    assert_eq!(detail.x_engagement_component, 30.0);
    assert_eq!(detail.news_framing_component, 20.0);
    assert_eq!(detail.earnings_narrative_component, 20.0);
}

#[test]
fn test_viral_flag_dominates_engagement_steps() {
    let mut bundle = quiet_bundle();
    bundle.x_data.is_viral = true;
    let (_, detail) = score_narrative(&bundle);
    assert_eq!(detail.x_engagement_component, 30.0);
}

#[test]
fn test_engagement_step_function() {
    let mut bundle = quiet_bundle();
    for (engagement, expected) in [(75.0, 25.0), (55.0, 20.0), (35.0, 15.0), (40.0, 15.0)] {
        bundle.x_data.engagement_score = engagement;
        let (_, detail) = score_narrative(&bundle);
        assert_eq!(detail.x_engagement_component, expected);
    }
    // Below the steps the raw score quarters with a floor of 5
    bundle.x_data.engagement_score = 28.0;
    let (_, detail) = score_narrative(&bundle);
    assert_eq!(detail.x_engagement_component, 7.0);
}

#[test]
fn test_framing_requires_mentions() {
    let mut bundle = quiet_bundle();
    bundle.news_data.sentiment_ratio = 0.75;
    bundle.news_data.upgrade_mentions = 0;
    // High ratio without mentions only clears the neutral band
    let (_, detail) = score_narrative(&bundle);
    assert_eq!(detail.news_framing_component, 10.0);

    bundle.news_data.upgrade_mentions = 2;
    let (_, detail) = score_narrative(&bundle);
    assert_eq!(detail.news_framing_component, 20.0);
    assert_eq!(detail.framing_shift, "strong_positive");
}

#[test]
fn test_earnings_without_signals_is_zero() {
    let (_, detail) = score_narrative(&quiet_bundle());
    assert_eq!(detail.earnings_narrative_component, 0.0);
    assert_eq!(detail.narrative_inflection, "neutral");
}

#[test]
fn test_earnings_mixed_penalizes_weak_signals() {
    let mut bundle = quiet_bundle();
    bundle.earnings_data.strong_signals = 1;
    bundle.earnings_data.weak_signals = 3;
    // ratio 0.25 -> mixed: max(0, 10 - 2*3) = 4
    let (_, detail) = score_narrative(&bundle);
    assert_eq!(detail.earnings_narrative_component, 4.0);
    assert_eq!(detail.narrative_inflection, "mixed");
}

#[test]
fn test_moderate_confluence() {
    let mut bundle = quiet_bundle();
    bundle.x_data.engagement_score = 35.0; // 15
    bundle.news_data.sentiment_ratio = 0.65;
    bundle.news_data.upgrade_mentions = 1; // 15 -> meets >= 10
    bundle.earnings_data.strong_signals = 2;
    bundle.earnings_data.weak_signals = 1; // ratio 0.667 -> 15
    let (score, detail) = score_narrative(&bundle);
    assert_eq!(detail.confluence_bonus, 10.0);
    assert_eq!(score, 55.0);
    assert_eq!(detail.verdict, NarrativeVerdict::BuildingNarrative);
}

#[test]
fn test_total_capped_at_100() {
    let (score, _) = score_narrative(&hot_bundle());
    assert!(score <= 100.0);
}

#[test]
fn test_insight_mentions_upgrades() {
    let (_, detail) = score_narrative(&hot_bundle());
    assert!(detail.key_insight.contains("3 analyst upgrades"));
    assert!(detail.key_insight.contains("Viral momentum"));
}
