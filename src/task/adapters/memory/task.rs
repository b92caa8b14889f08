//! In-memory task store for tests and local development.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use crate::session::domain::Identity;
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskChanges, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Rows are only visible to their owner, matching the row-level access
/// policy of the hosted backend. Failures can be queued with
/// [`InMemoryTaskStore::fail_next`] to exercise error paths.
#[derive(Clone)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, StoredTask>,
    next_sequence: u64,
    pending_failures: VecDeque<TaskStoreError>,
    select_calls: usize,
}

#[derive(Debug, Clone)]
struct StoredTask {
    sequence: u64,
    task: Task,
}

impl InMemoryTaskStore {
    /// Creates an empty store stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty store stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }

    /// Makes the next store call fail with `error`.
    ///
    /// Queued failures are consumed in order, one per call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Transport`] when the store lock is poisoned.
    pub fn fail_next(&self, error: TaskStoreError) -> TaskStoreResult<()> {
        self.lock()?.pending_failures.push_back(error);
        Ok(())
    }

    /// Returns how many `select` calls reached the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Transport`] when the store lock is poisoned.
    pub fn select_calls(&self) -> TaskStoreResult<usize> {
        Ok(self.lock()?.select_calls)
    }

    fn lock(&self) -> TaskStoreResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state
            .write()
            .map_err(|err| TaskStoreError::transport(std::io::Error::other(err.to_string())))
    }

    /// Locks the state and consumes a queued failure, if any.
    fn begin(&self) -> TaskStoreResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        let mut state = self.lock()?;
        if let Some(error) = state.pending_failures.pop_front() {
            return Err(error);
        }
        Ok(state)
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the stored row for `id` when `identity` may see it.
fn visible_mut<'a>(
    state: &'a mut InMemoryTaskState,
    identity: &Identity,
    id: TaskId,
) -> Option<&'a mut StoredTask> {
    state
        .tasks
        .get_mut(&id)
        .filter(|stored| stored.task.owner() == identity.user_id())
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn select(&self, identity: &Identity) -> TaskStoreResult<Vec<Task>> {
        let mut state = self.lock()?;
        state.select_calls += 1;
        if let Some(error) = state.pending_failures.pop_front() {
            return Err(error);
        }

        let mut owned: Vec<&StoredTask> = state
            .tasks
            .values()
            .filter(|stored| stored.task.owner() == identity.user_id())
            .collect();
        owned.sort_by(|left, right| {
            right
                .task
                .created_at()
                .cmp(&left.task.created_at())
                .then_with(|| right.sequence.cmp(&left.sequence))
        });
        Ok(owned.into_iter().map(|stored| stored.task.clone()).collect())
    }

    async fn insert(&self, identity: &Identity, task: &NewTask) -> TaskStoreResult<Task> {
        let mut state = self.begin()?;
        let timestamp = self.clock.utc();
        let created = Task::from_persisted(PersistedTaskData {
            id: TaskId::new(),
            owner: identity.user_id(),
            title: task.title().clone(),
            description: task.description().map(str::to_owned),
            status: TaskStatus::Pending,
            priority: task.priority(),
            due_date: task.due_date(),
            created_at: timestamp,
            updated_at: timestamp,
        });

        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.tasks.insert(
            created.id(),
            StoredTask {
                sequence,
                task: created.clone(),
            },
        );
        Ok(created)
    }

    async fn update(
        &self,
        identity: &Identity,
        id: TaskId,
        changes: &TaskChanges,
    ) -> TaskStoreResult<Task> {
        let mut state = self.begin()?;
        let timestamp = self.clock.utc();
        let stored =
            visible_mut(&mut state, identity, id).ok_or(TaskStoreError::NotFound(id))?;
        stored.task.apply(changes, timestamp);
        Ok(stored.task.clone())
    }

    async fn delete(&self, identity: &Identity, id: TaskId) -> TaskStoreResult<()> {
        let mut state = self.begin()?;
        if visible_mut(&mut state, identity, id).is_some() {
            state.tasks.remove(&id);
        }
        Ok(())
    }
}
