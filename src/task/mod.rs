//! Task management.
//!
//! Tasks are created with a title, optional description, priority and due
//! date, advanced along `pending → in_progress → done`, and deleted. All
//! persistence is remote; [`services::TaskStoreClient`] keeps a per-identity
//! cache of the list that is invalidated, never patched, after each
//! successful mutation. The module follows hexagonal architecture:
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
