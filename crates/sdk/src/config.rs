//! Configuration types for the Synchro SDK.

use std::time::Duration;
use synchro_core::NetworkId;
use url::Url;

/// Production Instant-System API root.
pub const DEFAULT_BASE_URL: &str = "https://prod.instant-system.com/InstantCore/v3/";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the transit API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root; relative request paths are resolved against it.
    pub base_url: Url,
    /// Network every request is scoped to.
    pub network_id: NetworkId,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    ///
    /// A trailing slash is added when missing so that joining a relative path
    /// keeps the last path segment of the base.
    pub fn new(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            base_url,
            network_id: NetworkId::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid");
        Self::new(base_url)
    }
}
