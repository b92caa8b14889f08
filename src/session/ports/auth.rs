//! Port for the remote authentication service.

use crate::session::domain::{AccessToken, Credentials, Identity, Registration, SignUpOutcome};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for auth provider operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication contract offered by the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Opens a session for existing credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the service rejects
    /// the e-mail/password pair.
    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Identity>;

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] when the service refuses the
    /// registration, for example because the address is already in use.
    async fn sign_up(&self, registration: &Registration) -> AuthResult<SignUpOutcome>;

    /// Closes the session of `identity` on the service side.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the service cannot be reached.
    async fn sign_out(&self, identity: &Identity) -> AuthResult<()>;

    /// Resolves the identity behind a stored access token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] when the token is unknown or
    /// expired.
    async fn current_identity(&self, token: &AccessToken) -> AuthResult<Identity>;
}

/// Errors returned by auth provider implementations.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The e-mail/password pair was not accepted.
    #[error("invalid login credentials")]
    InvalidCredentials,

    /// The access token is unknown or expired.
    #[error("session token is invalid or expired")]
    InvalidToken,

    /// The service refused the request.
    #[error("auth request rejected ({status}): {message}")]
    Rejected {
        /// HTTP-style status code reported by the service.
        status: u16,
        /// Service-provided message.
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("auth request timed out")]
    Timeout,

    /// Transport or decoding failure.
    #[error("auth transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
