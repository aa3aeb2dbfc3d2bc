//! Configuration for internet15-sdk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding [`SdkConfig::storage_node_url`].
pub const STORAGE_NODE_URL_ENV: &str = "STORAGE_NODE_URL";

/// Environment variable overriding [`SdkConfig::blockchain_rpc`].
pub const BLOCKCHAIN_RPC_ENV: &str = "BLOCKCHAIN_RPC";

/// SDK configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkConfig {
    /// Base URL of the storage node, used for uploads and retrieval.
    #[serde(default = "default_storage_node_url")]
    pub storage_node_url: String,

    /// Ledger JSON-RPC endpoint address.
    #[serde(default = "default_blockchain_rpc")]
    pub blockchain_rpc: String,

    /// Timeout for storage network requests in seconds. Zero disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            storage_node_url: default_storage_node_url(),
            blockchain_rpc: default_blockchain_rpc(),
            timeout_secs: default_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

impl SdkConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn to_file(&self, path: &Path) -> crate::Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default location of the configuration file.
    ///
    /// Returns `None` when the platform has no home directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "internet15")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Apply `STORAGE_NODE_URL` and `BLOCKCHAIN_RPC` from the process environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(STORAGE_NODE_URL_ENV).filter(|v| !v.is_empty()) {
            self.storage_node_url = url;
        }
        if let Some(rpc) = lookup(BLOCKCHAIN_RPC_ENV).filter(|v| !v.is_empty()) {
            self.blockchain_rpc = rpc;
        }
        self
    }
}

fn default_storage_node_url() -> String {
    "http://127.0.0.1:5001".to_string()
}

fn default_blockchain_rpc() -> String {
    "https://api.mainnet-beta.solana.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}
