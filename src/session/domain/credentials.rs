//! Sign-in and sign-up input, validated before reaching the auth service.

use super::{Identity, SessionDomainError};
use std::fmt;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// E-mail and password pair for signing in.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Creates validated credentials.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDomainError::InvalidEmail`] when the trimmed e-mail is
    /// empty or lacks an `@`, and [`SessionDomainError::PasswordTooShort`]
    /// when the password has fewer than [`MIN_PASSWORD_LENGTH`] characters.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, SessionDomainError> {
        let raw_email = email.into();
        let normalized = raw_email.trim();
        let is_valid_email = normalized
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !is_valid_email {
            return Err(SessionDomainError::InvalidEmail(raw_email));
        }

        let secret = password.into();
        if secret.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(SessionDomainError::PasswordTooShort {
                minimum: MIN_PASSWORD_LENGTH,
            });
        }

        Ok(Self {
            email: normalized.to_owned(),
            password: secret,
        })
    }

    /// Returns the e-mail address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password for the auth request body.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Sign-up input: credentials plus the display name shown in the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    credentials: Credentials,
    display_name: String,
}

impl Registration {
    /// Creates a validated registration.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDomainError::EmptyDisplayName`] when the trimmed
    /// display name is empty.
    pub fn new(
        credentials: Credentials,
        display_name: impl Into<String>,
    ) -> Result<Self, SessionDomainError> {
        let raw = display_name.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(SessionDomainError::EmptyDisplayName);
        }
        Ok(Self {
            credentials,
            display_name: normalized.to_owned(),
        })
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Result of a successful sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The account is active and a session was opened.
    SignedIn(Identity),
    /// The account exists but the e-mail address must be confirmed first.
    ConfirmationRequired {
        /// Address the confirmation was sent to.
        email: String,
    },
}
