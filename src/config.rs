use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating a diagnostics configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("HTTP client construction failed: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

impl ConfigError {
    /// Create a new invalid configuration error
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Configuration for the HTTP transport behind the diagnostics layer.
///
/// The timeout configured here is the single authoritative deadline for a
/// call; the diagnostics layer itself never imposes a second one.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DiagnosticsConfig {
    /// Request timeout in seconds (default 30)
    pub timeout_seconds: Option<u64>,
    /// Whether to follow redirects (default true)
    pub follow_redirects: Option<bool>,
    /// Static headers applied to every request
    pub headers: Option<HashMap<String, String>>,
    /// User-Agent header value
    pub user_agent: Option<String>,
}

impl DiagnosticsConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(&path).map_err(|_| ConfigError::NotFound {
                path: path.as_ref().to_path_buf(),
            })?;

        let config: DiagnosticsConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_seconds == Some(0) {
            return Err(ConfigError::invalid("timeout_seconds must be positive"));
        }

        if let Some(headers) = &self.headers {
            for name in headers.keys() {
                if name.trim().is_empty() {
                    return Err(ConfigError::invalid("header names cannot be empty"));
                }
            }
        }

        Ok(())
    }

    /// Create a config builder
    pub fn builder() -> DiagnosticsConfigBuilder {
        DiagnosticsConfigBuilder::new()
    }

    /// Effective request timeout in seconds
    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(30)
    }

    /// Effective redirect policy
    pub fn follow_redirects(&self) -> bool {
        self.follow_redirects.unwrap_or(true)
    }
}

/// Builder for programmatic configuration construction
#[derive(Debug, Default)]
pub struct DiagnosticsConfigBuilder {
    config: DiagnosticsConfig,
}

impl DiagnosticsConfigBuilder {
    /// Create a new config builder
    pub fn new() -> Self {
        Self {
            config: DiagnosticsConfig::default(),
        }
    }

    /// Set timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.timeout_seconds = Some(seconds);
        self
    }

    /// Set whether to follow redirects
    #[must_use]
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.config.follow_redirects = Some(follow);
        self
    }

    /// Add a static header applied to every request
    #[must_use]
    pub fn header<S: Into<String>>(mut self, name: S, value: S) -> Self {
        self.config
            .headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set the User-Agent header value
    #[must_use]
    pub fn user_agent<S: Into<String>>(mut self, value: S) -> Self {
        self.config.user_agent = Some(value.into());
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<DiagnosticsConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
