//! Shared HTTP plumbing for the hosted backend.
//!
//! The REST adapters of both the session and task modules talk to the same
//! project: every request carries the public API key, and authenticated
//! requests add the session's bearer token.

use crate::config::{BackendConfig, ConfigError, ConfigResult};
use crate::session::domain::AccessToken;
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;

/// Configured HTTP client for the hosted backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl BackendClient {
    /// Builds a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the settings fail validation or
    /// the HTTP client cannot be constructed.
    pub fn new(config: BackendConfig) -> ConfigResult<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|err| ConfigError::Invalid {
                field: "backend",
                reason: err.to_string(),
            })?;
        Ok(Self { http, config })
    }

    /// Returns the settings the client was built from.
    #[must_use]
    pub const fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Starts a request to `path` below the project URL.
    ///
    /// Without a session token the API key doubles as the bearer token, as
    /// the backend expects for anonymous calls.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&AccessToken>,
    ) -> RequestBuilder {
        let url = format!("{}{path}", self.config.base_url());
        let bearer = token.map_or(self.config.api_key.as_str(), AccessToken::expose);
        self.http
            .request(method, url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(bearer)
    }
}

/// Non-success response from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServiceFailure {
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ServiceFailure {
    /// Reads the status and the most specific message the body offers.
    pub(crate) async fn from_response(response: Response) -> Self {
        let status = response.status();
        let raw = response.text().await.unwrap_or_default();
        let body: ErrorBody = serde_json::from_str(&raw).unwrap_or_default();
        let message = body
            .message
            .or(body.msg)
            .or(body.error_description)
            .or(body.error)
            .unwrap_or_else(|| {
                if raw.trim().is_empty() {
                    status.canonical_reason().unwrap_or("request failed").to_owned()
                } else {
                    raw
                }
            });
        Self {
            status: status.as_u16(),
            message,
        }
    }
}
