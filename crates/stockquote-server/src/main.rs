//! Stockquote server entry point.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockquote_server::{Server, ServerConfig};

/// MCP-style HTTP facade for AlphaVantage stock quotes
#[derive(Parser, Debug)]
#[command(name = "stockquote-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, env = "STOCKQUOTE_CONFIG", default_value = "config/stockquote.toml")]
    config: String,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,stockquote=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Stockquote Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let file_config = if std::path::Path::new(&args.config).exists() {
        info!("Loading configuration from {}", args.config);
        ServerConfig::from_file(&args.config)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };
    let mut config = file_config.with_env_overrides();

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    config.validate().context("invalid configuration")?;
    info!(alphavantage = ?config.alphavantage, "Configuration loaded");

    let server = Server::new(config).context("failed to create AlphaVantage client")?;
    server.start().await.context("server error")?;

    Ok(())
}
