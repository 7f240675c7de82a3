//! tandemd - Tandem aggregation gateway daemon
//!
//! HTTP gateway that composes records from independent downstream services
//! into single responses.
//!
//! Usage:
//!   tandemd [config.toml]
//!
//! Without a config file the downstream addresses fall back to the
//! `BICYCLE_SERVICE_PORT`, `BOAT_SERVICE_PORT` and `BRAND_SERVICE_PORT`
//! environment variables (local defaults 4000, 3333, 5000).

use std::net::SocketAddr;

use tandem_core::config::GatewayConfig;
use tandem_gateway::{create_router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn parse_args() -> Option<String> {
    let mut config_path = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            a if !a.starts_with('-') => {
                // Positional argument = config file
                config_path = Some(a.to_string());
            }
            _ => {
                tracing::warn!("Unknown argument: {}", arg);
            }
        }
    }

    config_path
}

fn print_help() {
    eprintln!(
        r#"tandemd - Tandem aggregation gateway daemon

Usage: tandemd [OPTIONS] [config.toml]

Options:
  -h, --help    Print this help message

Examples:
  # Run against local downstream services on the default ports
  tandemd

  # Run with a config file
  tandemd config.toml

  # Override a downstream port without a config file
  BRAND_SERVICE_PORT=5050 tandemd
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tandemd=info,tandem_gateway=info,tandem_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting tandemd");

    let config = match parse_args() {
        Some(path) => {
            tracing::info!("Loading config from: {}", path);
            load_config(&path)?
        }
        None => {
            tracing::info!("No config file provided, using local service defaults");
            GatewayConfig::from_env()
        }
    };

    tracing::info!(
        bicycle = %config.bicycle.url,
        boat = %config.boat.url,
        brand = %config.brand.url,
        "Configured downstream services"
    );

    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_config(path: &str) -> anyhow::Result<GatewayConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}
