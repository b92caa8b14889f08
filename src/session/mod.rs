//! Authenticated sessions.
//!
//! The session module supplies the current identity (or none) that every
//! task operation is scoped to, and drives sign-in, sign-up and sign-out
//! against the hosted auth service:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
