//! Configuration loading and management for vidsum.
//!
//! Loads settings from `vidsum.toml` with an environment variable override
//! for the backend URL. A missing config file falls back to defaults so the
//! tool runs against a local backend out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Fallback backend address when nothing is configured
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout in seconds. Summarisation of a long video can
/// take minutes, so this is deliberately generous.
const DEFAULT_TIMEOUT_SECS: u64 = 300;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Summarization backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the summarization service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; `None` disables the local timeout
    #[serde(default = "default_timeout")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECS)
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
}

impl Config {
    /// Load configuration from the default location (vidsum.toml in cwd or
    /// home), falling back to defaults when no file exists
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::apply_env_overrides(Config::default())),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(Self::apply_env_overrides(config))
    }

    /// Override the backend URL from the environment
    fn apply_env_overrides(mut config: Config) -> Config {
        if let Ok(url) = std::env::var("VIDSUM_BACKEND_URL") {
            config.backend.base_url = url;
        }
        config
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from("vidsum.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("vidsum").join("vidsum.toml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }
}
