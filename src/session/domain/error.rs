//! Error types for session input validation.

use thiserror::Error;

/// Errors returned while validating sign-in and sign-up input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionDomainError {
    /// The e-mail address is not of the form `local@domain`.
    #[error("invalid e-mail address: '{0}'")]
    InvalidEmail(String),

    /// The password is shorter than the accepted minimum.
    #[error("password must be at least {minimum} characters long")]
    PasswordTooShort {
        /// Minimum accepted length.
        minimum: usize,
    },

    /// The display name is empty after trimming.
    #[error("display name must not be empty")]
    EmptyDisplayName,
}
