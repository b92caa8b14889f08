//! Authenticated identity and the observable session state.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of an authenticated user, as assigned by the auth service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bearer token proving an authenticated session.
///
/// The `Debug` output is redacted so tokens never reach logs.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw token for transport headers.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// The authenticated user a session belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user_id: UserId,
    email: String,
    display_name: Option<String>,
    access_token: AccessToken,
}

impl Identity {
    /// Creates an identity.
    #[must_use]
    pub fn new(user_id: UserId, email: impl Into<String>, access_token: AccessToken) -> Self {
        Self {
            user_id,
            email: email.into(),
            display_name: None,
            access_token,
        }
    }

    /// Sets the display name chosen at sign-up.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the e-mail address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the display name, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Returns the session access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }
}

/// Snapshot of the session as observed by subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// `true` while the initial identity resolution is still running.
    pub loading: bool,
    /// Current identity, or `None` when signed out.
    pub identity: Option<Identity>,
}

impl SessionState {
    /// State before the stored session has been resolved.
    #[must_use]
    pub const fn resolving() -> Self {
        Self {
            loading: true,
            identity: None,
        }
    }

    /// Resolved state with no identity.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            loading: false,
            identity: None,
        }
    }

    /// Resolved state for `identity`.
    #[must_use]
    pub const fn signed_in(identity: Identity) -> Self {
        Self {
            loading: false,
            identity: Some(identity),
        }
    }
}
