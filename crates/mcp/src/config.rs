use crate::protocol::ServerInfo;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use synchro_sdk::{NetworkId, SynchroClient, DEFAULT_BASE_URL};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(default)]
    pub server: ServerIdentity,

    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// Name and version reported in the `initialize` handshake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerIdentity {
    #[serde(default = "default_server_name")]
    pub name: String,

    #[serde(default = "default_server_version")]
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_network_id")]
    pub network_id: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_server_name() -> String {
    "synchro-bus-mcp-server".to_string()
}

fn default_server_version() -> String {
    "1.0.0".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_network_id() -> u32 {
    NetworkId::SYNCHRO_BUS.0
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServerIdentity {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            version: default_server_version(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            network_id: default_network_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl McpConfig {
    /// Load configuration from a TOML file. A missing file yields defaults.
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "Configuration file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read configuration file {}", config_path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse configuration file {}", config_path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply command-line or environment overrides on top of the file.
    pub fn apply_overrides(&mut self, base_url: Option<String>, network_id: Option<u32>) {
        if let Some(base_url) = base_url {
            self.upstream.base_url = base_url;
        }
        if let Some(network_id) = network_id {
            self.upstream.network_id = network_id;
        }
    }

    pub fn server_info(&self) -> ServerInfo {
        ServerInfo {
            name: self.server.name.clone(),
            version: self.server.version.clone(),
        }
    }

    /// Build the upstream client described by this configuration.
    pub fn build_client(&self) -> Result<SynchroClient> {
        SynchroClient::builder()
            .base_url(self.upstream.base_url.as_str())
            .network_id(NetworkId(self.upstream.network_id))
            .timeout(Duration::from_secs(self.upstream.timeout_secs))
            .build()
            .context("Failed to create upstream client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = McpConfig::default();

        assert_eq!(config.server.name, "synchro-bus-mcp-server");
        assert_eq!(config.server.version, "1.0.0");
        assert_eq!(config.upstream.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.upstream.network_id, 3);
        assert_eq!(config.upstream.timeout_secs, 30);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = McpConfig::from_toml_str(
            r#"
            [upstream]
            network_id = 12
            "#,
        )
        .unwrap();

        assert_eq!(config.upstream.network_id, 12);
        assert_eq!(config.upstream.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.server.name, "synchro-bus-mcp-server");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = McpConfig::load(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.upstream.network_id, 3);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nname = \"chambery-transit\"\n\n[upstream]\nbase_url = \"http://localhost:9000/v3/\"\ntimeout_secs = 5"
        )
        .unwrap();

        let config = McpConfig::load(file.path()).unwrap();

        assert_eq!(config.server.name, "chambery-transit");
        assert_eq!(config.server.version, "1.0.0");
        assert_eq!(config.upstream.base_url, "http://localhost:9000/v3/");
        assert_eq!(config.upstream.timeout_secs, 5);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[upstream]\nnetwork_id = \"three\"").unwrap();

        let err = McpConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration file"));
    }

    #[test]
    fn test_overrides() {
        let mut config = McpConfig::default();
        config.apply_overrides(Some("http://127.0.0.1:8080/".to_string()), None);

        assert_eq!(config.upstream.base_url, "http://127.0.0.1:8080/");
        assert_eq!(config.upstream.network_id, 3);

        config.apply_overrides(None, Some(7));
        assert_eq!(config.upstream.network_id, 7);
    }

    #[test]
    fn test_build_client() {
        let mut config = McpConfig::default();
        config.apply_overrides(None, Some(7));

        let client = config.build_client().unwrap();
        assert_eq!(client.network_id(), NetworkId(7));

        config.apply_overrides(Some("ftp://example.com".to_string()), None);
        assert!(config.build_client().is_err());
    }
}
