//! Per-identity cache of the task list.

use crate::session::domain::UserId;
use crate::task::domain::Task;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Read-through cache keyed by the owning identity.
///
/// Entries are never patched, only dropped. Each invalidation bumps a
/// per-identity generation so a fetch that started before the invalidation
/// cannot store its now-stale result.
#[derive(Debug, Default)]
pub(crate) struct TaskListCache {
    state: Mutex<CacheState>,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<UserId, Vec<Task>>,
    generations: HashMap<UserId, u64>,
}

impl TaskListCache {
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn get(&self, owner: UserId) -> Option<Vec<Task>> {
        self.lock().entries.get(&owner).cloned()
    }

    pub(crate) fn generation(&self, owner: UserId) -> u64 {
        self.lock().generations.get(&owner).copied().unwrap_or_default()
    }

    /// Stores `tasks` unless the entry was invalidated after `generation`
    /// was read. Returns whether the entry was stored.
    pub(crate) fn fill(&self, owner: UserId, generation: u64, tasks: Vec<Task>) -> bool {
        let mut state = self.lock();
        let current = state.generations.get(&owner).copied().unwrap_or_default();
        if current != generation {
            return false;
        }
        state.entries.insert(owner, tasks);
        true
    }

    pub(crate) fn invalidate(&self, owner: UserId) {
        let mut state = self.lock();
        state.entries.remove(&owner);
        *state.generations.entry(owner).or_default() += 1;
    }
}
