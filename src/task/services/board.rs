//! Task list view: filtering, summary counts and per-task actions.

use super::client::{TaskClientResult, TaskStoreClient};
use crate::notify::Notifier;
use crate::task::{
    domain::{Task, TaskChanges, TaskCounts, TaskFilter, TaskId, TaskStatus},
    ports::TaskStore,
};
use std::sync::Arc;

/// Snapshot of the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Filter the snapshot was taken with.
    pub filter: TaskFilter,
    /// Counts over the whole collection, independent of `filter`.
    pub counts: TaskCounts,
    /// Tasks passing `filter`, in collection order.
    pub tasks: Vec<Task>,
}

impl BoardView {
    /// Builds a snapshot of `tasks` under `filter`.
    #[must_use]
    pub fn project(tasks: &[Task], filter: TaskFilter) -> Self {
        Self {
            filter,
            counts: TaskCounts::tally(tasks),
            tasks: filter.apply(tasks).cloned().collect(),
        }
    }
}

/// Returns the confirmation shown after a task moves to `status`.
#[must_use]
pub fn advance_notice(status: TaskStatus) -> String {
    format!("Task moved to \"{}\"", status.label())
}

/// Confirmation shown after a task is deleted.
pub const DELETE_NOTICE: &str = "Task removed";

/// List view over the current identity's tasks.
pub struct TaskBoard<S, N>
where
    S: TaskStore,
    N: Notifier,
{
    client: TaskStoreClient<S>,
    notifier: Arc<N>,
    filter: TaskFilter,
}

impl<S, N> TaskBoard<S, N>
where
    S: TaskStore,
    N: Notifier,
{
    /// Creates a board showing every task.
    #[must_use]
    pub fn new(client: TaskStoreClient<S>, notifier: Arc<N>) -> Self {
        Self {
            client,
            notifier,
            filter: TaskFilter::default(),
        }
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Switches the active filter. Counts are unaffected.
    pub const fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Returns `true` while the task list is being fetched.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.client.is_loading()
    }

    /// Loads the list and projects it through the active filter.
    ///
    /// # Errors
    ///
    /// Propagates the client's list error.
    pub async fn view(&self) -> TaskClientResult<BoardView> {
        let tasks = self.client.list().await?;
        Ok(BoardView::project(&tasks, self.filter))
    }

    /// Moves `task` one step along the workflow.
    ///
    /// A task in the terminal status is left alone: no update is sent and
    /// `Ok(None)` is returned. Otherwise the updated task is returned and a
    /// confirmation naming the new status is shown.
    ///
    /// # Errors
    ///
    /// Returns the client error after reporting it through the notifier.
    pub async fn advance(&self, task: &Task) -> TaskClientResult<Option<Task>> {
        let Some(next) = task.status().next() else {
            return Ok(None);
        };
        match self
            .client
            .update(task.id(), TaskChanges::status_only(next))
            .await
        {
            Ok(updated) => {
                self.notifier.success(&advance_notice(next));
                Ok(Some(updated))
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Deletes task `id` immediately.
    ///
    /// # Errors
    ///
    /// Returns the client error after reporting it through the notifier.
    pub async fn delete(&self, id: TaskId) -> TaskClientResult<()> {
        match self.client.delete(id).await {
            Ok(()) => {
                self.notifier.success(DELETE_NOTICE);
                Ok(())
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }
}
