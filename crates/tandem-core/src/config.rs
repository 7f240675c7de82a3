//! Gateway configuration
//!
//! The configuration is an immutable snapshot built once before the gateway
//! starts serving. It is passed explicitly into the state constructor; no
//! handler reads ambient process-wide configuration.

use serde::Deserialize;

/// Default inbound port
const DEFAULT_PORT: u16 = 3000;
/// Default per-call downstream timeout in milliseconds
const DEFAULT_TIMEOUT_MS: u64 = 1250;

/// Top-level gateway configuration, loadable from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub bicycle: DownstreamConfig,
    pub boat: DownstreamConfig,
    pub brand: DownstreamConfig,
}

/// Inbound HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Address and call policy for one downstream dependency.
#[derive(Debug, Clone, Deserialize)]
pub struct DownstreamConfig {
    /// Base URL of the downstream service, e.g. "http://localhost:4000"
    pub url: String,
    /// Per-call request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Additional attempts after a connectivity failure (0 = no retry)
    #[serde(default)]
    pub retries: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl DownstreamConfig {
    /// Config for a downstream at `url` with default timeout and no retries.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retries: 0,
        }
    }
}

impl GatewayConfig {
    /// Build a config from the `*_SERVICE_PORT` environment variables,
    /// falling back to the default local service ports.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::default(),
            bicycle: local_service(port_from_env("BICYCLE_SERVICE_PORT", 4000)),
            boat: local_service(port_from_env("BOAT_SERVICE_PORT", 3333)),
            brand: local_service(port_from_env("BRAND_SERVICE_PORT", 5000)),
        }
    }
}

fn local_service(port: u16) -> DownstreamConfig {
    DownstreamConfig::new(format!("http://localhost:{}", port))
}

fn port_from_env(var: &str, default: u16) -> u16 {
    std::env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}
