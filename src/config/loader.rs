use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

use crate::config::types::Config;

/// Largest page the backend serves (`limit` is capped at 100).
pub const MAX_PAGE_SIZE: u32 = 100;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/adpilot/config.toml` on Unix/macOS, or the
    /// equivalent from `dirs::config_dir()` elsewhere. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("adpilot").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `api.base_url` is an absolute http(s) URL
    /// - `views.page_size` is within 1..=100
    /// - `views.brief_limit` is at least 1
    /// - `views.advice_type` is not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError { message };

        let url = Url::parse(&self.api.base_url)
            .map_err(|e| invalid(format!("api.base_url '{}' is not a URL: {}", self.api.base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "api.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.views.page_size == 0 || self.views.page_size > MAX_PAGE_SIZE {
            return Err(invalid(format!(
                "views.page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.views.page_size
            )));
        }

        if self.views.brief_limit == 0 {
            return Err(invalid("views.brief_limit must be at least 1".to_string()));
        }

        if self.views.advice_type.trim().is_empty() {
            return Err(invalid("views.advice_type must not be empty".to_string()));
        }

        Ok(())
    }
}
