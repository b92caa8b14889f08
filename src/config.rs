//! Backend connection settings.
//!
//! Settings are read from a TOML file and may be overridden from the
//! environment:
//!
//! ```toml
//! [backend]
//! url = "https://project.example.co"
//! api_key = "anon-key"
//! request_timeout_secs = 10
//! ```

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding [`BackendConfig::url`].
pub const BACKEND_URL_ENV: &str = "TASKFLOW_BACKEND_URL";

/// Environment variable overriding [`BackendConfig::api_key`].
pub const API_KEY_ENV: &str = "TASKFLOW_API_KEY";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is present but unusable.
    #[error("invalid config value for '{field}': {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskflowConfig {
    /// Remote backend settings.
    pub backend: BackendConfig,
}

/// Connection settings for the managed backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend project, without a trailing slash.
    pub url: String,
    /// Public API key sent with every request.
    pub api_key: String,
    /// Upper bound for a single request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl BackendConfig {
    /// Creates settings with the default request timeout.
    #[must_use]
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the base URL with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Checks that the settings can be used to build a client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an empty or non-HTTP URL, an
    /// empty API key, or a zero timeout.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = self.url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                field: "backend.url",
                reason: format!("expected an http or https URL, got '{url}'"),
            });
        }
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "backend.api_key",
                reason: "must not be empty".to_owned(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "backend.request_timeout_secs",
                reason: "must be greater than zero".to_owned(),
            });
        }
        Ok(())
    }
}

impl TaskflowConfig {
    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for unusable values.
    pub fn from_toml_str(raw: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.backend.validate()?;
        Ok(config)
    }

    /// Reads configuration from `path`, then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// the errors of [`TaskflowConfig::from_toml_str`].
    pub fn load(path: &Utf8Path) -> ConfigResult<Self> {
        let io_error = |source| ConfigError::Io {
            path: path.to_string(),
            source,
        };
        let parent = path
            .parent()
            .filter(|dir| !dir.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let file_name = path.file_name().ok_or_else(|| {
            io_error(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "path has no file name",
            ))
        })?;

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
        let raw = dir.read_to_string(file_name).map_err(io_error)?;
        let mut config: Self = toml::from_str(&raw)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.backend.validate()?;
        Ok(config)
    }

    /// Applies overrides looked up by environment variable name.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(BACKEND_URL_ENV) {
            self.backend.url = url;
        }
        if let Some(api_key) = lookup(API_KEY_ENV) {
            self.backend.api_key = api_key;
        }
    }
}
