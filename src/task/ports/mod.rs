//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod store;

#[cfg(test)]
pub use store::MockTaskStore;
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
