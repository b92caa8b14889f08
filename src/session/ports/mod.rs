//! Port contracts for session management.

pub mod auth;

#[cfg(test)]
pub use auth::MockAuthProvider;
pub use auth::{AuthError, AuthProvider, AuthResult};
