use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use smartinvest::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Fetch predictions and display the dashboard
    Predict {
        /// Ticker symbols to predict
        #[arg(required = true)]
        symbols: Vec<String>,

        /// Asset type: stock or crypto
        #[arg(short, long, default_value = "stock")]
        asset_type: String,

        /// Bearer token, overriding api.token from the configuration
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Display the dashboard for the bundled sample prediction
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(Commands::Predict {
            symbols,
            asset_type,
            token,
        }) => {
            let asset_type = asset_type.parse()?;
            smartinvest::run_command(
                smartinvest::AppCommand::Predict {
                    symbols,
                    asset_type,
                    token,
                },
                cli.config_path.as_deref(),
            )
            .await
        }
        Some(Commands::Demo) => {
            smartinvest::run_command(smartinvest::AppCommand::Demo, cli.config_path.as_deref())
                .await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = smartinvest::core::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
api:
  base_url: "http://localhost:8000"
  token: ~
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
