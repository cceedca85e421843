//! Effzins API Server binary.

use std::path::{Path, PathBuf};

use clap::Parser;
use effzins_api::config::{ServerConfig, DEFAULT_CONFIG_PATH};
use effzins_api::server::run_server;
use tracing_subscriber::EnvFilter;

/// Effective interest rate REST API Server
#[derive(Parser, Debug)]
#[command(name = "effzins-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host address to bind to (overrides the config file)
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging, RUST_LOG wins over --verbose
    let default_filter = if args.verbose {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    tracing::info!("Effzins Server v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args)?;
    run_server(&config).await
}

fn load_config(args: &Args) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            ServerConfig::from_file(path)?
        }
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            tracing::info!("Loading configuration from {}", DEFAULT_CONFIG_PATH);
            ServerConfig::from_file(DEFAULT_CONFIG_PATH)?
        }
        None => {
            tracing::info!("Using default configuration");
            ServerConfig::default()
        }
    };

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    Ok(config)
}
