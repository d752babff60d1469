use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::core::prediction::{AssetPrediction, AssetType, PredictionProvider};

// SmartInvestProvider implementation for PredictionProvider
pub struct SmartInvestProvider {
    base_url: String,
    token: String,
}

impl SmartInvestProvider {
    pub fn new(base_url: &str, token: &str) -> Self {
        SmartInvestProvider {
            base_url: base_url.to_string(),
            token: token.to_string(),
        }
    }
}

#[derive(Serialize, Debug)]
struct PredictRequest<'a> {
    symbol: &'a str,
    asset_type: AssetType,
}

#[async_trait]
impl PredictionProvider for SmartInvestProvider {
    #[instrument(
        name = "PredictionFetch",
        skip(self),
        fields(symbol = %symbol)
    )]
    async fn run_prediction(
        &self,
        symbol: &str,
        asset_type: AssetType,
    ) -> Result<AssetPrediction> {
        let url = format!("{}/api/market/predict", self.base_url);
        debug!("Requesting prediction from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("smartinvest/1.0")
            .build()?;
        let response = client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&PredictRequest { symbol, asset_type })
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for symbol: {} URL: {}", e, symbol, url))?;

        debug!(response = ?response, "Received prediction response");

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for symbol: {}",
                response.status(),
                symbol
            ));
        }

        let text = response.text().await?;

        let prediction: AssetPrediction = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse prediction response for {}: {}", symbol, e))?;

        Ok(prediction)
    }
}
