//! Construction errors for the downstream client
//!
//! Per-call failures are `tandem_core::FetchError`; this covers the
//! startup-time problems of building a client at all.

use thiserror::Error;

/// Errors building a `DownstreamClient` from configuration
#[derive(Debug, Error)]
pub enum ClientError {
    /// Downstream base URL did not parse
    #[error("invalid downstream url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Underlying HTTP client could not be built
    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
}
