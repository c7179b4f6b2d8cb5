mod check_cmd;
mod describe_cmd;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use glimpse_config::{ensure_valid, load_dotenv, GatewayConfig, LogFormat};
use glimpse_gateway::{start_server, GatewayState};
use glimpse_logging::{init_logger, LogOptions};
use glimpse_understanding::BytezModel;

#[derive(Parser)]
#[command(name = "glimpse")]
#[command(about = "Glimpse: image caption gateway")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the caption gateway (default)
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind the HTTP server to
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Upload an image to a running gateway and print the reply
    Describe {
        /// Image file to caption
        file: std::path::PathBuf,
        /// Gateway base URL
        #[arg(short, long, default_value = "http://localhost:8000")]
        server: String,
    },
    /// Validate configuration and print it with secrets redacted
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    load_dotenv();

    match cli.command.unwrap_or(Commands::Serve { port: None, bind: None }) {
        Commands::Serve { port, bind } => {
            let mut config = GatewayConfig::from_env()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind_address = bind;
            }
            init_logger(&log_options(&config));
            run_server(ensure_valid(config)?).await?;
        }
        Commands::Describe { file, server } => {
            init_logger(&LogOptions {
                level: "warn".to_string(),
                ..Default::default()
            });
            describe_cmd::run(&server, &file).await?;
        }
        Commands::Check => {
            if !check_cmd::run()? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn log_options(config: &GatewayConfig) -> LogOptions {
    LogOptions {
        level: config.log_level.clone(),
        json: config.log_format == LogFormat::Json,
        log_dir: config.log_dir.clone(),
    }
}

async fn run_server(config: GatewayConfig) -> Result<()> {
    info!(
        bind = %config.bind_addr(),
        model = %config.model,
        max_upload_bytes = ?config.max_upload_bytes,
        "Starting Glimpse gateway"
    );

    let model = BytezModel::new(config.api_key.as_str())
        .with_model(config.model.as_str())
        .with_base_url(config.upstream_url.as_str());
    info!(model = %config.model, "Model loaded.");

    let state = GatewayState::new(Arc::new(model)).with_upload_limit(config.max_upload_bytes);

    let addr = tokio::net::lookup_host(config.bind_addr())
        .await
        .with_context(|| format!("Failed to resolve bind address {}", config.bind_addr()))?
        .next()
        .with_context(|| format!("No address found for {}", config.bind_addr()))?;

    start_server(addr, state).await
}
