use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::Profile;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub retrieval: RetrievalConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RetrievalConfig {
    pub connect_timeout_secs: u64,
    /// Total request timeout; 0 disables it
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Upper bound on a downloaded playlist body
    pub max_playlist_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub default_profile: Profile,
    /// Candidates processed per scheduling tick; 0 parses in one pass
    pub chunk_size: usize,
    /// Members shown per category row in text output
    pub preview_limit: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
            user_agent: format!("m3u-catalog/{}", env!("CARGO_PKG_VERSION")),
            max_playlist_bytes: 256 * 1024 * 1024,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_profile: Profile::Live,
            chunk_size: 5000,
            preview_limit: 50,
        }
    }
}

impl Config {
    /// Load from the file named by `CONFIG_FILE`, defaulting to `config.toml`
    pub fn load() -> AppResult<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from_file(&config_file)
    }

    /// Load from an explicit path; a missing file yields the defaults
    pub fn load_from_file<P: AsRef<Path>>(config_file: P) -> AppResult<Self> {
        let path = config_file.as_ref();

        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.retrieval.connect_timeout_secs == 0 {
            return Err(AppError::configuration(
                "retrieval.connect_timeout_secs must be greater than 0",
            ));
        }
        if self.retrieval.max_playlist_bytes == 0 {
            return Err(AppError::configuration(
                "retrieval.max_playlist_bytes must be greater than 0",
            ));
        }
        if self.retrieval.user_agent.trim().is_empty() {
            return Err(AppError::configuration("retrieval.user_agent must not be empty"));
        }
        Ok(())
    }
}
