//! Taskflow: task management over a hosted backend.
//!
//! Users authenticate, create tasks, advance them through
//! `pending → in_progress → done`, and delete them. Persistence and
//! authentication belong to the hosted service; this crate is the
//! data-access and state-transition layer in front of it.
//!
//! # Architecture
//!
//! Taskflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, REST)
//!
//! # Modules
//!
//! - [`session`]: Current identity, sign-in, sign-up and sign-out
//! - [`task`]: Task store client, status policy, form and list view
//! - [`notify`]: User-visible notices
//! - [`config`]: Backend connection settings
//! - [`backend`]: Shared HTTP client for the REST adapters

pub mod backend;
pub mod config;
pub mod notify;
pub mod session;
pub mod task;
