//! Pros & cons generated from a prediction record.

use crate::core::prediction::AssetPrediction;

#[derive(Debug, Clone)]
pub struct Insights {
    pub symbol: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Derives the pros/cons card from the prediction alone. Missing indicators
/// fall back to neutral values rather than failing the render.
pub fn generate_insights(prediction: &AssetPrediction) -> Insights {
    let rsi = prediction.indicators.get("rsi").copied().unwrap_or(50.0);
    let sma_20 = prediction.indicators.get("sma_20").copied().unwrap_or(0.0);
    let sma_50 = prediction.indicators.get("sma_50").copied().unwrap_or(0.0);
    let confidence = prediction.confidence_score;

    let pros = vec![
        if prediction.short_term_prediction > prediction.latest_price {
            "Growth potential supported by positive modeled price trajectory.".to_string()
        } else {
            "Stable trading pattern with limited downside in short term.".to_string()
        },
        format!("Technical confidence score is {confidence:.1}%, indicating model consistency."),
        if sma_20 > sma_50 {
            "Moving averages show medium-term accumulation trend.".to_string()
        } else {
            "Recent pullback may create an accumulation opportunity.".to_string()
        },
        "Institutional and momentum behavior appear constructive based on volume stability."
            .to_string(),
    ];

    let cons = vec![
        "Volatility risk remains elevated; predictions can deviate sharply in macro shocks."
            .to_string(),
        "Sentiment shifts from negative news could invalidate bullish setup quickly.".to_string(),
        "Regulatory events can disproportionately impact valuation, especially for crypto assets."
            .to_string(),
        if rsi > 70.0 {
            "Overbought conditions detected (RSI > 70).".to_string()
        } else {
            "Weak momentum risk if RSI slips below 45.".to_string()
        },
    ];

    Insights {
        symbol: prediction.symbol.clone(),
        pros,
        cons,
    }
}
