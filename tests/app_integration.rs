use std::fs;
use tracing::info;

mod test_utils {
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Mock backend that only answers the exact predict request the client
    /// is supposed to emit: POST body with symbol/asset_type and the bearer
    /// header. Anything else falls through to the server's 404.
    pub async fn create_mock_server(
        symbol: &str,
        asset_type: &str,
        token: &str,
        mock_response: &str,
    ) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/market/predict"))
            .and(header("authorization", format!("Bearer {token}")))
            .and(body_json(serde_json::json!({
                "symbol": symbol,
                "asset_type": asset_type
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .expect(1)
            .mount(&mock_server)
            .await;

        mock_server
    }
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_mock() {
    let mock_response = r#"{
        "symbol": "AAPL",
        "latest_price": 193.2,
        "short_term_prediction": 201.1,
        "mid_term_prediction": 214.8,
        "confidence_score": 78.4,
        "indicators": {"volume": 56000000, "rsi": 59.3, "macd": 1.24}
    }"#;

    let mock_server = test_utils::create_mock_server("AAPL", "stock", "abc", mock_response).await;

    // Setup config file pointing at the mock backend
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_path = config_file.path();
    let config_content = format!(
        r#"
        api:
          base_url: {}
          token: "abc"
    "#,
        mock_server.uri()
    );

    fs::write(config_path, &config_content).expect("Failed to write config file");
    info!("Running predict against {}", mock_server.uri());

    let result = smartinvest::run_command(
        smartinvest::AppCommand::Predict {
            symbols: vec!["AAPL".to_string()],
            asset_type: smartinvest::core::prediction::AssetType::Stock,
            token: None,
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Main function failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_cli_token_overrides_config() {
    let mock_response = r#"{
        "symbol": "BTC",
        "latest_price": 64000.0,
        "short_term_prediction": 66000.0,
        "mid_term_prediction": 71000.0,
        "confidence_score": 55.0,
        "indicators": {}
    }"#;

    // Server only accepts the override token, not the configured one
    let mock_server =
        test_utils::create_mock_server("BTC", "crypto", "override-token", mock_response).await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_content = format!(
        r#"
        api:
          base_url: {}
          token: "stale-config-token"
    "#,
        mock_server.uri()
    );
    fs::write(config_file.path(), &config_content).expect("Failed to write config file");

    let result = smartinvest::run_command(
        smartinvest::AppCommand::Predict {
            symbols: vec!["BTC".to_string()],
            asset_type: smartinvest::core::prediction::AssetType::Crypto,
            token: Some("override-token".to_string()),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok());
}

#[test_log::test(tokio::test)]
async fn test_predict_without_token_fails() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    fs::write(
        config_file.path(),
        r#"
        api:
          base_url: "http://localhost:8000"
    "#,
    )
    .expect("Failed to write config file");

    let result = smartinvest::run_command(
        smartinvest::AppCommand::Predict {
            symbols: vec!["AAPL".to_string()],
            asset_type: smartinvest::core::prediction::AssetType::Stock,
            token: None,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("No API token configured")
    );
}

#[test_log::test(tokio::test)]
async fn test_provider_surfaces_http_error() {
    use smartinvest::core::prediction::{AssetType, PredictionProvider};
    use smartinvest::providers::SmartInvestProvider;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/market/predict"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let provider = SmartInvestProvider::new(&mock_server.uri(), "abc");
    let result = provider.run_prediction("AAPL", AssetType::Stock).await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("HTTP error: 502"));
}

#[test_log::test(tokio::test)]
async fn test_demo_flow() {
    let result = smartinvest::run_command(smartinvest::AppCommand::Demo, None).await;
    assert!(result.is_ok());
}
