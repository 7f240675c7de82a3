//! Downstream HTTP client implementation

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use tandem_core::config::DownstreamConfig;
use tandem_core::error::{FetchError, FetchResult};

use crate::error::ClientError;

/// URL-encode a resource id for use as a single path segment.
///
/// Ids are opaque strings; one containing a literal `/` must not be split
/// across two path segments, and a literal `%` must not be mistaken for an
/// escape already applied, so the full segment is percent-encoded.
fn encode_path_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Client for one downstream service.
///
/// The downstream contract is `GET {base_url}/{id}` returning a JSON record
/// on 2xx or a standard HTTP error status. Timeout and retry policy come
/// from the per-downstream configuration.
#[derive(Debug, Clone)]
pub struct DownstreamClient {
    client: Client,
    base_url: Url,
    retries: u32,
}

impl DownstreamClient {
    /// Build a client for the downstream described by `config`.
    pub fn new(config: &DownstreamConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        let base_url = Url::parse(&config.url)?;

        Ok(Self {
            client,
            base_url,
            retries: config.retries,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the record stored under `id` and decode it as `T`.
    ///
    /// Connectivity failures (connection refused, timeout, unparseable
    /// body) are retried up to the configured retry count. A non-2xx
    /// answer is returned immediately and never retried: the downstream
    /// has already made a definitive statement about the id.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch<T: DeserializeOwned>(&self, id: &str) -> FetchResult<T> {
        let url = self
            .base_url
            .join(&format!("/{}", encode_path_segment(id)))
            .map_err(|e| FetchError::Connectivity(format!("invalid request url: {}", e)))?;

        let mut attempt = 0;
        loop {
            match self.fetch_once(url.clone()).await {
                Ok(record) => return Ok(record),
                Err(err @ FetchError::Status(_)) => return Err(err),
                Err(err) => {
                    if attempt >= self.retries {
                        return Err(err);
                    }
                    attempt += 1;
                    warn!(attempt, error = %err, "downstream fetch failed, retrying");
                }
            }
        }
    }

    /// One network round trip: exactly one request is issued per call.
    async fn fetch_once<T: DeserializeOwned>(&self, url: Url) -> FetchResult<T> {
        debug!(%url, "fetching downstream record");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Connectivity(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Connectivity(format!("unparseable downstream body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = DownstreamClient::new(&DownstreamConfig::new("http://localhost:4000"));
        assert!(client.is_ok());
    }

    #[test]
    fn invalid_url_rejected() {
        let client = DownstreamClient::new(&DownstreamConfig::new("not a url"));
        assert!(matches!(client, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn ids_stay_one_path_segment() {
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(encode_path_segment("7"), "7");
    }

    #[test]
    fn literal_percent_does_not_collide_with_encoded_slash() {
        // "a/b" and "a%2Fb" are distinct ids and must stay distinct on
        // the wire.
        assert_eq!(encode_path_segment("a%2Fb"), "a%252Fb");
        assert_ne!(encode_path_segment("a/b"), encode_path_segment("a%2Fb"));
    }
}
