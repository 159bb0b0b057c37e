//! Main client for the Synchro SDK.

use crate::api::*;
use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::error::{SynchroError, SynchroResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use synchro_core::NetworkId;
use url::Url;

/// Main client for the Instant-System transit API.
///
/// Every request is scoped to the configured network.
#[derive(Debug, Clone)]
pub struct SynchroClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl SynchroClient {
    /// Create a new client builder.
    pub fn builder() -> SynchroClientBuilder {
        SynchroClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> SynchroResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Network every request is scoped to.
    pub fn network_id(&self) -> NetworkId {
        self.config.network_id
    }

    /// Get the network API.
    pub fn network(&self) -> NetworkApi<'_> {
        NetworkApi::new(self)
    }

    /// Get the lines API.
    pub fn lines(&self) -> LinesApi<'_> {
        LinesApi::new(self)
    }

    /// Get the disruptions API.
    pub fn disruptions(&self) -> DisruptionsApi<'_> {
        DisruptionsApi::new(self)
    }

    /// Get the proximity API.
    pub fn proximity(&self) -> ProximityApi<'_> {
        ProximityApi::new(self)
    }
}

/// Builder for creating a SynchroClient.
pub struct SynchroClientBuilder {
    base_url: Option<String>,
    network_id: NetworkId,
    timeout: Duration,
}

impl SynchroClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            network_id: NetworkId::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API root. Defaults to the production Instant-System API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the network identifier.
    pub fn network_id(mut self, id: NetworkId) -> Self {
        self.network_id = id;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> SynchroResult<SynchroClient> {
        let base_url_str = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(base_url_str)?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(SynchroError::Config(format!(
                "base_url must be http or https, got: {}",
                base_url.scheme()
            )));
        }

        let mut config = ClientConfig::new(base_url);
        config.network_id = self.network_id;
        config.timeout = self.timeout;

        SynchroClient::from_config(config)
    }
}

impl Default for SynchroClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = SynchroClient::builder().build().unwrap();

        assert_eq!(client.network_id(), NetworkId(3));
        assert_eq!(client.config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(client.config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_overrides() {
        let client = SynchroClient::builder()
            .base_url("http://localhost:9000/api")
            .network_id(NetworkId(42))
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(client.network_id(), NetworkId(42));
        assert_eq!(client.config.base_url.as_str(), "http://localhost:9000/api/");
        assert_eq!(client.config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let result = SynchroClient::builder().base_url("not a url").build();
        assert!(matches!(result, Err(SynchroError::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_rejects_non_http_scheme() {
        let result = SynchroClient::builder().base_url("ftp://example.com/").build();
        assert!(matches!(result, Err(SynchroError::Config(_))));
    }
}
