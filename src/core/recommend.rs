//! Buy/sell/hold recommendation engine.

use crate::core::prediction::AssetPrediction;
use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;

/// Upside required before a Buy is triggered. Asymmetric with the sell side
/// on purpose: more upside is needed to buy than downside to sell.
pub const BUY_THRESHOLD_PCT: f64 = 4.0;
pub const SELL_THRESHOLD_PCT: f64 = -3.0;

#[derive(Debug, Error, PartialEq)]
pub enum RecommendError {
    #[error("latest price must be finite and non-zero, got {0}")]
    InvalidInput(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Action::Buy => "Buy",
                Action::Sell => "Sell",
                Action::Hold => "Hold",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RiskLevel::Low => "Low",
                RiskLevel::Medium => "Medium",
                RiskLevel::High => "High",
            }
        )
    }
}

/// The full recommendation record displayed on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub symbol: String,
    pub action: Action,
    pub risk_level: RiskLevel,
    pub investment_duration: &'static str,
    pub portfolio_allocation_pct: f64,
}

/// Percentage change from the latest price to the short-term prediction.
///
/// A zero or non-finite latest price would poison every derived figure with
/// a non-finite value, so it is rejected up front.
pub fn upside_pct(latest_price: f64, short_term_prediction: f64) -> Result<f64, RecommendError> {
    if latest_price == 0.0 || !latest_price.is_finite() {
        return Err(RecommendError::InvalidInput(latest_price));
    }
    Ok((short_term_prediction - latest_price) / latest_price * 100.0)
}

/// Classifies an upside percentage. Both boundaries are exclusive: exactly
/// 4% or exactly -3% is still a Hold.
pub fn classify(upside_pct: f64) -> Action {
    if upside_pct > BUY_THRESHOLD_PCT {
        Action::Buy
    } else if upside_pct < SELL_THRESHOLD_PCT {
        Action::Sell
    } else {
        Action::Hold
    }
}

pub fn recommend_action(
    latest_price: f64,
    short_term_prediction: f64,
) -> Result<Action, RecommendError> {
    Ok(classify(upside_pct(latest_price, short_term_prediction)?))
}

/// Builds the full recommendation record for a prediction.
///
/// Risk is proxied by MACD magnitude relative to the price, duration by the
/// size of the predicted move, and the suggested allocation blends the
/// volatility proxy with the model's confidence score.
pub fn recommend(prediction: &AssetPrediction) -> Result<Recommendation, RecommendError> {
    let upside = upside_pct(prediction.latest_price, prediction.short_term_prediction)?;
    let action = classify(upside);

    let macd = prediction.indicators.get("macd").copied().unwrap_or(0.0);
    let volatility_proxy = macd.abs() / prediction.latest_price.max(1.0);

    let risk_level = if volatility_proxy > 0.03 {
        RiskLevel::High
    } else if volatility_proxy > 0.01 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let investment_duration = if upside.abs() < 6.0 {
        "1-4 weeks"
    } else {
        "1-3 months"
    };

    let allocation = (25.0 - volatility_proxy * 100.0 + prediction.confidence_score / 10.0)
        .clamp(5.0, 35.0);

    Ok(Recommendation {
        symbol: prediction.symbol.clone(),
        action,
        risk_level,
        investment_duration,
        portfolio_allocation_pct: (allocation * 100.0).round() / 100.0,
    })
}
