//! Application state for the gateway

use tandem_client::{ClientError, DownstreamClient};
use tandem_core::config::GatewayConfig;

/// Shared state: one client per configured downstream.
///
/// Built once from the configuration snapshot before serving begins and
/// cloned into each handler invocation; never mutated while serving.
#[derive(Clone)]
pub struct AppState {
    pub bicycle: DownstreamClient,
    pub boat: DownstreamClient,
    pub brand: DownstreamClient,
}

impl AppState {
    /// Build the downstream clients from configuration
    pub fn from_config(config: &GatewayConfig) -> Result<Self, ClientError> {
        Ok(Self {
            bicycle: DownstreamClient::new(&config.bicycle)?,
            boat: DownstreamClient::new(&config.boat)?,
            brand: DownstreamClient::new(&config.brand)?,
        })
    }
}
