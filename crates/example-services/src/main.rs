//! Runs all three in-memory downstream services on their default ports.
//!
//! Ports are overridable via `BICYCLE_SERVICE_PORT`, `BOAT_SERVICE_PORT`
//! and `BRAND_SERVICE_PORT`, matching what the gateway expects.

use std::net::SocketAddr;

use axum::Router;
use example_services::{bicycle_router, boat_router, brand_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn port_from_env(var: &str, default: u16) -> u16 {
    std::env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

async fn serve(name: &'static str, port: u16, router: Router) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(service = name, "Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "example_services=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bicycle_port = port_from_env("BICYCLE_SERVICE_PORT", 4000);
    let boat_port = port_from_env("BOAT_SERVICE_PORT", 3333);
    let brand_port = port_from_env("BRAND_SERVICE_PORT", 5000);

    tokio::try_join!(
        serve("bicycle", bicycle_port, bicycle_router()),
        serve("boat", boat_port, boat_router()),
        serve("brand", brand_port, brand_router()),
    )?;

    Ok(())
}
