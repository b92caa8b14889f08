//! Domain model for authenticated sessions.

mod credentials;
mod error;
mod identity;

pub use credentials::{Credentials, MIN_PASSWORD_LENGTH, Registration, SignUpOutcome};
pub use error::SessionDomainError;
pub use identity::{AccessToken, Identity, SessionState, UserId};
