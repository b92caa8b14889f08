//! Port for the remote task collection.

use crate::session::domain::Identity;
use crate::task::domain::{NewTask, Task, TaskChanges, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Remote CRUD contract for tasks.
///
/// Every call is made on behalf of `identity`. Ownership of existing rows is
/// enforced by the service's access policy, not by callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns every task owned by `identity`, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskStoreError`] when the service call fails.
    async fn select(&self, identity: &Identity) -> TaskStoreResult<Vec<Task>>;

    /// Inserts a task owned by `identity` and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Rejected`] when the service refuses the row,
    /// for example on a constraint violation.
    async fn insert(&self, identity: &Identity, task: &NewTask) -> TaskStoreResult<Task>;

    /// Applies `changes` to task `id` and returns the updated row.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no visible task has `id`.
    async fn update(
        &self,
        identity: &Identity,
        id: TaskId,
        changes: &TaskChanges,
    ) -> TaskStoreResult<Task>;

    /// Deletes task `id`.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskStoreError`] when the service call fails.
    async fn delete(&self, identity: &Identity, id: TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The session is missing or was not accepted by the service.
    #[error("not authenticated")]
    Unauthenticated,

    /// The access policy denied the operation.
    #[error("not authorized to modify this task")]
    Unauthorized,

    /// No visible task has the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The service refused the request.
    #[error("request rejected ({status}): {message}")]
    Rejected {
        /// HTTP-style status code reported by the service.
        status: u16,
        /// Service-provided message.
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Transport or decoding failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
