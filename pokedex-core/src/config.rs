//! Pokedex configuration
//!
//! Loaded from YAML. Every field has a default, so an empty or missing file
//! is a valid configuration.
//!
//! ```yaml
//! api_base_url: https://tyradex.app/api/v1
//! timeout_seconds: 10
//! cache_ttl_seconds: 3600
//! retry:
//!   max_retries: 3
//!   base_delay_ms: 1000
//!   max_delay_ms: 30000
//! data_dir: /home/me/.local/share/pokedex
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::catalog::RetryPolicy;

/// Public Tyradex API
pub const DEFAULT_API_BASE_URL: &str = "https://tyradex.app/api/v1";

/// Environment variable overriding `api_base_url`
pub const API_URL_ENV: &str = "POKEDEX_API_URL";

const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    #[serde(default = "default_cache_ttl_seconds")]
    pub cache_ttl_seconds: u64,

    #[serde(default)]
    pub retry: RetryConfig,

    /// Where favorites and the catalog cache live. Platform data dir when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt (`max_attempts` is accepted as an alias)
    #[serde(default = "default_max_retries", alias = "max_attempts")]
    pub max_retries: u32,

    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_cache_ttl_seconds() -> u64 {
    60 * 60
}

fn default_max_retries() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    30_000
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_seconds: default_timeout_seconds(),
            cache_ttl_seconds: default_cache_ttl_seconds(),
            retry: RetryConfig::default(),
            data_dir: None,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            base_delay: Duration::from_millis(self.base_delay_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
        }
    }
}

impl PokedexConfig {
    /// Load configuration and apply the environment override.
    ///
    /// An explicit path must exist. Without one, `config.yaml` in the
    /// platform config directory is used if present, defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Self::load_from_path(path)?
            }
            None => match Self::default_config_path() {
                Some(path) => Self::load_from_path(&path)?,
                None => Self::default(),
            },
        };

        config.apply_api_url_override(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    /// Parse a YAML file. A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        // serde_yaml_ng rejects an empty document
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Replace the API base URL when `value` is a non-empty string
    pub fn apply_api_url_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            debug!("API base URL overridden by {}: {}", API_URL_ENV, url);
            self.api_base_url = url;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry.policy()
    }

    /// Directory holding favorites, configured or platform default
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        directories::ProjectDirs::from("app", "pokedex", "pokedex")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .or_else(|| dirs::data_dir().map(|d| d.join("pokedex")))
            .context("Could not determine data directory")
    }

    /// Catalog cache directory, inside the data directory
    pub fn cache_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("cache"))
    }

    /// `config.yaml` in the platform config directory
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("app", "pokedex", "pokedex")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("pokedex")))
            .map(|dir| dir.join(CONFIG_FILE))
    }
}
