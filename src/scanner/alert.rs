//! Alert text rendering for breakout candidates

/// Render the humanized alert block for an accepted candidate
pub fn humanize(ticker: &str, price: f64, score: u32, rsi: f64, volume_ratio: f64) -> String {
    let mut reasons = Vec::new();

    if score >= 130 {
        reasons.push("strong volume breakout");
    } else if score >= 100 {
        reasons.push("momentum breakout");
    } else {
        reasons.push("technical breakout");
    }

    if rsi > 70.0 {
        reasons.push("overbought momentum");
    } else if rsi > 60.0 {
        reasons.push("bullish momentum");
    } else if rsi < 40.0 {
        reasons.push("oversold bounce potential");
    }

    if volume_ratio > 2.0 {
        reasons.push("heavy volume");
    } else if volume_ratio > 1.5 {
        reasons.push("volume surge");
    }

    let reasoning = reasons.join(" + ");

    format!(
        "{}\nEntry: ${:.2}\nScore: {}\nRSI: {:.1}\nVolume: {:.1}x avg\nSetup: {}",
        ticker, price, score, rsi, volume_ratio, reasoning
    )
}
