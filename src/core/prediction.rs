//! Prediction abstractions and core types

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Stock,
    Crypto,
}

impl Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AssetType::Stock => "stock",
                AssetType::Crypto => "crypto",
            }
        )
    }
}

impl FromStr for AssetType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stock" => Ok(AssetType::Stock),
            "crypto" => Ok(AssetType::Crypto),
            _ => Err(anyhow::anyhow!("Invalid asset type: {}", s)),
        }
    }
}

/// One prediction record as returned by the backend. All values are trusted
/// as given; the indicator set is open-ended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetPrediction {
    pub symbol: String,
    pub latest_price: f64,
    pub short_term_prediction: f64,
    pub mid_term_prediction: f64,
    pub confidence_score: f64,
    #[serde(default)]
    pub indicators: BTreeMap<String, f64>,
}

impl AssetPrediction {
    /// Bundled sample record, used by the demo command in place of a live
    /// backend response.
    pub fn sample() -> Self {
        AssetPrediction {
            symbol: "AAPL".to_string(),
            latest_price: 193.2,
            short_term_prediction: 201.1,
            mid_term_prediction: 214.8,
            confidence_score: 78.4,
            indicators: BTreeMap::from([
                ("volume".to_string(), 56_000_000.0),
                ("rsi".to_string(), 59.3),
                ("macd".to_string(), 1.24),
                ("sma_20".to_string(), 194.1),
                ("sma_50".to_string(), 189.6),
            ]),
        }
    }
}

#[async_trait]
pub trait PredictionProvider: Send + Sync {
    async fn run_prediction(
        &self,
        symbol: &str,
        asset_type: AssetType,
    ) -> Result<AssetPrediction>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_type_parsing() {
        assert_eq!("stock".parse::<AssetType>().unwrap(), AssetType::Stock);
        assert_eq!("CRYPTO".parse::<AssetType>().unwrap(), AssetType::Crypto);
        assert!("bond".parse::<AssetType>().is_err());
    }

    #[test]
    fn test_asset_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AssetType::Stock).unwrap(), "\"stock\"");
        assert_eq!(serde_json::to_string(&AssetType::Crypto).unwrap(), "\"crypto\"");
    }

    #[test]
    fn test_prediction_deserialization() {
        let json = r#"{
            "symbol": "AAPL",
            "latest_price": 193.2,
            "short_term_prediction": 201.1,
            "mid_term_prediction": 214.8,
            "confidence_score": 78.4,
            "indicators": {"rsi": 59.3, "macd": 1.24}
        }"#;

        let prediction: AssetPrediction = serde_json::from_str(json).unwrap();
        assert_eq!(prediction.symbol, "AAPL");
        assert_eq!(prediction.latest_price, 193.2);
        assert_eq!(prediction.indicators.get("rsi"), Some(&59.3));
    }

    #[test]
    fn test_prediction_missing_indicators_defaults_empty() {
        let json = r#"{
            "symbol": "BTC",
            "latest_price": 64000.0,
            "short_term_prediction": 66000.0,
            "mid_term_prediction": 71000.0,
            "confidence_score": 55.0
        }"#;

        let prediction: AssetPrediction = serde_json::from_str(json).unwrap();
        assert!(prediction.indicators.is_empty());
    }
}
