//! New-task form: draft input, the due-date rule and submission.

use super::client::{TaskClientError, TaskStoreClient};
use crate::notify::Notifier;
use crate::task::{
    domain::{
        NewTask, Task, TaskDomainError, TaskPriority, TaskTitle, ensure_due_date_not_past, today,
    },
    ports::TaskStore,
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Confirmation shown after a task is created.
pub const CREATED_NOTICE: &str = "Task created";

/// Message shown when the due date lies in the past.
pub const PAST_DUE_DATE_NOTICE: &str = "Due date cannot be in the past";

/// Errors returned by form submission.
#[derive(Debug, Clone, Error)]
pub enum TaskFormError {
    /// Local validation failed; nothing was sent.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The create call failed.
    #[error(transparent)]
    Client(#[from] TaskClientError),
}

/// Raw input held by the form between edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Title as typed.
    pub title: String,
    /// Description as typed; blank means none.
    pub description: String,
    /// Selected priority.
    pub priority: TaskPriority,
    /// Selected due date, if any.
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Validates the draft against `today` and builds the create payload.
    ///
    /// Title and description are trimmed; a blank description is dropped.
    /// The due-date rule is checked first, so a past due date is reported
    /// even when the title is also blank.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueDateInPast`] for a due date before
    /// `today` and [`TaskDomainError::EmptyTitle`] for a blank title.
    pub fn to_new_task(&self, today: NaiveDate) -> Result<NewTask, TaskDomainError> {
        ensure_due_date_not_past(self.due_date, today)?;
        let title = TaskTitle::new(self.title.as_str())?;
        let task = NewTask::new(title, self.priority).with_description(&self.description);
        Ok(match self.due_date {
            Some(due_date) => task.with_due_date(due_date),
            None => task,
        })
    }
}

/// Form for creating tasks.
///
/// Holds the draft while the creation surface is open. A successful submit
/// resets the draft and closes the form; a failed one keeps the draft so it
/// can be corrected and resubmitted.
pub struct TaskForm<S, N, C>
where
    S: TaskStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    client: TaskStoreClient<S>,
    notifier: Arc<N>,
    clock: Arc<C>,
    draft: TaskDraft,
    open: bool,
}

impl<S, N, C> TaskForm<S, N, C>
where
    S: TaskStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a closed form with an empty draft.
    #[must_use]
    pub fn new(client: TaskStoreClient<S>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            client,
            notifier,
            clock,
            draft: TaskDraft::default(),
            open: false,
        }
    }

    /// Opens the creation surface.
    pub const fn open(&mut self) {
        self.open = true;
    }

    /// Closes the creation surface, keeping the draft.
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Returns `true` while the creation surface is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Returns the draft for editing.
    pub const fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    /// Validates and submits the draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFormError::Domain`] when validation fails (no request is
    /// sent) and [`TaskFormError::Client`] when creation fails. Either way
    /// the notifier shows the error and the draft is kept.
    pub async fn submit(&mut self) -> Result<Task, TaskFormError> {
        let new_task = match self.draft.to_new_task(today(&*self.clock)) {
            Ok(task) => task,
            Err(err) => {
                let message = match err {
                    TaskDomainError::DueDateInPast { .. } => PAST_DUE_DATE_NOTICE.to_owned(),
                    TaskDomainError::EmptyTitle => err.to_string(),
                };
                self.notifier.error(&message);
                return Err(err.into());
            }
        };

        match self.client.create(new_task).await {
            Ok(created) => {
                self.notifier.success(CREATED_NOTICE);
                self.draft = TaskDraft::default();
                self.open = false;
                Ok(created)
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err.into())
            }
        }
    }
}
