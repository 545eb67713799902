//! Narrative/sentiment pillar scorer
//!
//! Keyword search and sentiment counting happen upstream; this scorer only
//! converts the delivered counts and ratios into bounded point components.

use crate::models::bundles::{EarningsNarrative, NarrativeBundle, NewsFraming, SocialBuzz};
use crate::models::evaluation::{NarrativeDetail, NarrativeVerdict};

/// Cap on the combined narrative score
pub const MAX_SCORE: f64 = 100.0;

/// Score narrative strength 0-100 from the fetched bundle.
///
/// Components: social engagement (0-30), news framing (0-20), earnings
/// inflection (0-20), plus a confluence bonus when all three align.
pub fn score_narrative(bundle: &NarrativeBundle) -> (f64, NarrativeDetail) {
    let x_component = social_component(&bundle.x_data);
    let (framing_component, framing_shift) = framing_component(&bundle.news_data);
    let (earnings_component, narrative_inflection) = earnings_component(&bundle.earnings_data);

    let confluence_bonus =
        if x_component >= 20.0 && framing_component >= 15.0 && earnings_component >= 15.0 {
            15.0
        } else if x_component >= 15.0 && framing_component >= 10.0 && earnings_component >= 10.0 {
            10.0
        } else {
            0.0
        };

    let raw = x_component + framing_component + earnings_component + confluence_bonus;
    let total = raw.min(MAX_SCORE);

    let verdict = if total >= 75.0 {
        NarrativeVerdict::ViralNarrative
    } else if total >= 60.0 {
        NarrativeVerdict::StrongNarrative
    } else if total >= 45.0 {
        NarrativeVerdict::BuildingNarrative
    } else if total >= 30.0 {
        NarrativeVerdict::WeakNarrative
    } else {
        NarrativeVerdict::NoNarrative
    };

    let key_insight = narrative_insight(bundle, verdict, narrative_inflection);

    let detail = NarrativeDetail {
        total_score: total,
        verdict,
        x_engagement_component: x_component,
        news_framing_component: framing_component,
        earnings_narrative_component: earnings_component,
        confluence_bonus,
        framing_shift: framing_shift.to_string(),
        narrative_inflection: narrative_inflection.to_string(),
        key_insight,
        x_data: bundle.x_data.clone(),
        news_data: bundle.news_data.clone(),
        earnings_data: bundle.earnings_data.clone(),
    };

    (total, detail)
}

fn social_component(x_data: &SocialBuzz) -> f64 {
    if x_data.is_viral {
        30.0
    } else if x_data.engagement_score > 70.0 {
        25.0
    } else if x_data.engagement_score > 50.0 {
        20.0
    } else if x_data.engagement_score > 30.0 {
        15.0
    } else {
        (x_data.engagement_score / 4.0).max(5.0)
    }
}

fn framing_component(news: &NewsFraming) -> (f64, &'static str) {
    if news.sentiment_ratio > 0.7 && news.upgrade_mentions >= 2 {
        (20.0, "strong_positive")
    } else if news.sentiment_ratio > 0.6 && news.upgrade_mentions >= 1 {
        (15.0, "positive")
    } else if news.sentiment_ratio > 0.5 {
        (10.0, "neutral_positive")
    } else {
        (5.0, "mixed")
    }
}

fn earnings_component(earnings: &EarningsNarrative) -> (f64, &'static str) {
    let strong = earnings.strong_signals;
    let weak = earnings.weak_signals;
    if strong + weak == 0 {
        return (0.0, "neutral");
    }
    let ratio = strong as f64 / (strong + weak) as f64;
    if ratio > 0.8 && strong >= 3 {
        (20.0, "strong_positive")
    } else if ratio > 0.6 && strong >= 2 {
        (15.0, "positive")
    } else if ratio > 0.5 {
        (10.0, "slight_positive")
    } else {
        ((10.0 - 2.0 * weak as f64).max(0.0), "mixed")
    }
}

fn narrative_insight(
    bundle: &NarrativeBundle,
    verdict: NarrativeVerdict,
    inflection: &str,
) -> String {
    let mut parts = Vec::new();

    parts.push(
        match verdict {
            NarrativeVerdict::ViralNarrative => "Viral momentum across all channels",
            NarrativeVerdict::StrongNarrative => "Strong narrative developing",
            NarrativeVerdict::BuildingNarrative => "Narrative building but early",
            _ => "Limited narrative traction",
        }
        .to_string(),
    );

    if bundle.x_data.is_viral {
        parts.push(format!(
            "{} viral tweets with {} likes",
            bundle.x_data.viral_tweet_count, bundle.x_data.total_likes
        ));
    } else if bundle.x_data.tweet_count > 50 {
        parts.push(format!(
            "{} mentions with solid engagement",
            bundle.x_data.tweet_count
        ));
    }

    if bundle.news_data.upgrade_mentions > 0 {
        parts.push(format!(
            "{} analyst upgrades",
            bundle.news_data.upgrade_mentions
        ));
    }

    match inflection {
        "strong_positive" => parts.push("Strong earnings beat with raised guidance".to_string()),
        "positive" => parts.push("Positive earnings narrative".to_string()),
        _ => {}
    }

    parts.join(" | ")
}
