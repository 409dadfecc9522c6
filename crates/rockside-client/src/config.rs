/*
[INPUT]:  YAML configuration file or ROCKSIDE_* environment variables
[OUTPUT]: Parsed client configuration and a ready RocksideClient
[POS]:    Configuration layer - loose inputs validated into typed settings
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::auth::Credential;
use crate::http::{ClientConfig, Result, RocksideClient, RocksideError};
use crate::types::Network;

pub const ENV_BASE_URL: &str = "ROCKSIDE_BASE_URL";
pub const ENV_NETWORK: &str = "ROCKSIDE_NETWORK";
pub const ENV_APIKEY: &str = "ROCKSIDE_APIKEY";
pub const ENV_TOKEN: &str = "ROCKSIDE_TOKEN";

/// Client settings as written in a config file or environment
///
/// `apikey` and `token` are mutually exclusive; exactly one must be set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RocksideConfig {
    pub base_url: String,
    pub network: Network,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apikey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Whole-request timeout in seconds; unset means none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,
}

impl RocksideConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RocksideError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse YAML; exactly one of `apikey` and `token` must be set
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| RocksideError::Config(format!("invalid config: {e}")))?;
        config.credential()?;
        Ok(config)
    }

    /// Load from `ROCKSIDE_BASE_URL`, `ROCKSIDE_NETWORK`, `ROCKSIDE_APIKEY`, `ROCKSIDE_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Same as [`RocksideConfig::from_env`] with a custom variable lookup
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = non_empty(ENV_BASE_URL)
            .ok_or_else(|| RocksideError::Config(format!("{ENV_BASE_URL} is not set")))?;
        let network = non_empty(ENV_NETWORK)
            .ok_or_else(|| RocksideError::Config(format!("{ENV_NETWORK} is not set")))?
            .parse::<Network>()?;

        let config = Self {
            base_url,
            network,
            apikey: non_empty(ENV_APIKEY),
            token: non_empty(ENV_TOKEN),
            timeout_secs: None,
            connect_timeout_secs: None,
        };
        config.credential()?;
        Ok(config)
    }

    /// The single credential this configuration carries
    pub fn credential(&self) -> Result<Credential> {
        Credential::from_parts(self.apikey.clone(), self.token.clone())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.timeout_secs.map(Duration::from_secs),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl RocksideClient {
    /// Build a client from loose configuration, enforcing the credential rule
    pub fn from_config(config: &RocksideConfig) -> Result<Self> {
        let credential = config.credential()?;
        Self::with_config(
            config.client_config(),
            &config.base_url,
            config.network,
            credential,
        )
    }
}
