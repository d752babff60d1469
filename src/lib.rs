pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::prediction::AssetType;
use anyhow::{Context, Result};
use tracing::{debug, info};

pub enum AppCommand {
    Predict {
        symbols: Vec<String>,
        asset_type: AssetType,
        token: Option<String>,
    },
    Demo,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("SmartInvest dashboard starting...");

    match command {
        AppCommand::Demo => cli::demo::run(),
        AppCommand::Predict {
            symbols,
            asset_type,
            token,
        } => {
            let config = match config_path {
                Some(path) => AppConfig::load_from_path(path)?,
                None => AppConfig::load()?,
            };
            debug!("Loaded config: {config:#?}");

            let token = token.or(config.api.token).context(
                "No API token configured; set api.token in the config file or pass --token",
            )?;

            let provider = providers::SmartInvestProvider::new(&config.api.base_url, &token);
            cli::predict::run(&symbols, asset_type, &provider).await
        }
    }
}
