//! List filtering and per-status counts.

use super::{ParseTaskFilterError, Task, TaskStatus};

/// Status filter applied to the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskFilter {
    /// Every task.
    #[default]
    All,
    /// Only tasks with the given status.
    Only(TaskStatus),
}

impl TaskFilter {
    /// Every filter, in display order.
    pub const ALL: [Self; 4] = [
        Self::All,
        Self::Only(TaskStatus::Pending),
        Self::Only(TaskStatus::InProgress),
        Self::Only(TaskStatus::Done),
    ];

    /// Returns `true` when `task` passes the filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => task.status() == status,
        }
    }

    /// Projects `tasks` through the filter without mutating or reordering it.
    pub fn apply(self, tasks: &[Task]) -> impl Iterator<Item = &Task> {
        tasks.iter().filter(move |task| self.matches(task))
    }

    /// Returns the canonical name of the filter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }
}

impl From<TaskStatus> for TaskFilter {
    fn from(status: TaskStatus) -> Self {
        Self::Only(status)
    }
}

impl TryFrom<&str> for TaskFilter {
    type Error = ParseTaskFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        TaskStatus::try_from(value)
            .map(Self::Only)
            .map_err(|_| ParseTaskFilterError(value.to_owned()))
    }
}

/// Summary counts over an unfiltered task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    /// Total number of tasks.
    pub all: usize,
    /// Tasks in [`TaskStatus::Pending`].
    pub pending: usize,
    /// Tasks in [`TaskStatus::InProgress`].
    pub in_progress: usize,
    /// Tasks in [`TaskStatus::Done`].
    pub done: usize,
}

impl TaskCounts {
    /// Counts `tasks` by status.
    #[must_use]
    pub fn tally(tasks: &[Task]) -> Self {
        tasks.iter().fold(
            Self {
                all: tasks.len(),
                ..Self::default()
            },
            |mut counts, task| {
                match task.status() {
                    TaskStatus::Pending => counts.pending += 1,
                    TaskStatus::InProgress => counts.in_progress += 1,
                    TaskStatus::Done => counts.done += 1,
                }
                counts
            },
        )
    }

    /// Returns the count shown next to `filter`.
    #[must_use]
    pub const fn for_filter(&self, filter: TaskFilter) -> usize {
        match filter {
            TaskFilter::All => self.all,
            TaskFilter::Only(TaskStatus::Pending) => self.pending,
            TaskFilter::Only(TaskStatus::InProgress) => self.in_progress,
            TaskFilter::Only(TaskStatus::Done) => self.done,
        }
    }
}
