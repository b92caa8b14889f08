//! Data-access client for the current identity's tasks.

use super::cache::TaskListCache;
use crate::session::{domain::Identity, services::Session};
use crate::task::{
    domain::{NewTask, Task, TaskChanges, TaskId},
    ports::{TaskStore, TaskStoreError},
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Errors returned by task client operations.
#[derive(Debug, Clone, Error)]
pub enum TaskClientError {
    /// A mutation was attempted without a signed-in identity.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The store failed or refused the request.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task client operations.
pub type TaskClientResult<T> = Result<T, TaskClientError>;

/// Reads and writes tasks for the session's identity.
///
/// The task list is cached per identity. Every successful mutation drops the
/// current identity's entry so the next [`TaskStoreClient::list`] refetches;
/// failed mutations leave it untouched. Clones share the cache.
pub struct TaskStoreClient<S>
where
    S: TaskStore,
{
    store: Arc<S>,
    session: Session,
    cache: Arc<TaskListCache>,
    in_flight: Arc<AtomicUsize>,
}

impl<S> Clone for TaskStoreClient<S>
where
    S: TaskStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            session: self.session.clone(),
            cache: Arc::clone(&self.cache),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

/// Counts a list fetch as in flight until dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<S> TaskStoreClient<S>
where
    S: TaskStore,
{
    /// Creates a client scoped to `session`.
    #[must_use]
    pub fn new(store: Arc<S>, session: Session) -> Self {
        Self {
            store,
            session,
            cache: Arc::new(TaskListCache::default()),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns the session the client is scoped to.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns `true` while a list fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Returns the cached list for the current identity without fetching.
    #[must_use]
    pub fn cached(&self) -> Option<Vec<Task>> {
        let identity = self.session.identity()?;
        self.cache.get(identity.user_id())
    }

    /// Returns the current identity's tasks, most recently created first.
    ///
    /// Without an identity the query is disabled: no store call is made and
    /// the list is empty. A cached list is returned as is; otherwise the
    /// store is queried and the result cached.
    ///
    /// # Errors
    ///
    /// Returns [`TaskClientError::Store`] when the fetch fails.
    pub async fn list(&self) -> TaskClientResult<Vec<Task>> {
        let Some(identity) = self.session.identity() else {
            return Ok(Vec::new());
        };
        let owner = identity.user_id();
        if let Some(tasks) = self.cache.get(owner) {
            return Ok(tasks);
        }

        let generation = self.cache.generation(owner);
        let fetched = {
            let _in_flight = InFlight::start(&self.in_flight);
            self.store.select(&identity).await
        };
        let tasks = fetched.inspect_err(|err| {
            tracing::warn!(user_id = %owner, error = %err, "task list fetch failed");
        })?;

        if !self.cache.fill(owner, generation, tasks.clone()) {
            tracing::debug!(user_id = %owner, "discarded task list invalidated mid-fetch");
        }
        Ok(tasks)
    }

    /// Creates a task owned by the current identity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskClientError::NotAuthenticated`] without contacting the
    /// store when signed out, and [`TaskClientError::Store`] when the insert
    /// fails.
    pub async fn create(&self, task: NewTask) -> TaskClientResult<Task> {
        let identity = self.require_identity()?;
        let created = self
            .store
            .insert(&identity, &task)
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "task creation failed"))?;
        self.invalidate(&identity);
        Ok(created)
    }

    /// Applies `changes` to task `id`.
    ///
    /// Ownership is left to the store's access policy.
    ///
    /// # Errors
    ///
    /// Returns [`TaskClientError::NotAuthenticated`] when signed out and
    /// [`TaskClientError::Store`] when the update fails.
    pub async fn update(&self, id: TaskId, changes: TaskChanges) -> TaskClientResult<Task> {
        let identity = self.require_identity()?;
        let updated = self
            .store
            .update(&identity, id, &changes)
            .await
            .inspect_err(|err| tracing::warn!(task_id = %id, error = %err, "task update failed"))?;
        self.invalidate(&identity);
        Ok(updated)
    }

    /// Deletes task `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskClientError::NotAuthenticated`] when signed out and
    /// [`TaskClientError::Store`] when the delete fails.
    pub async fn delete(&self, id: TaskId) -> TaskClientResult<()> {
        let identity = self.require_identity()?;
        self.store
            .delete(&identity, id)
            .await
            .inspect_err(|err| tracing::warn!(task_id = %id, error = %err, "task delete failed"))?;
        self.invalidate(&identity);
        Ok(())
    }

    fn require_identity(&self) -> TaskClientResult<Identity> {
        self.session
            .identity()
            .ok_or(TaskClientError::NotAuthenticated)
    }

    fn invalidate(&self, identity: &Identity) {
        tracing::debug!(user_id = %identity.user_id(), "invalidating task list");
        self.cache.invalidate(identity.user_id());
    }
}
