//! Domain model for task management.
//!
//! Tasks, their forward-only status policy, list filtering and the due-date
//! rule live here, free of any transport or persistence concern.

mod error;
mod filter;
mod ids;
mod schedule;
mod status;
mod task;

pub use error::{
    ParseTaskFilterError, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError,
};
pub use filter::{TaskCounts, TaskFilter};
pub use ids::{TaskId, TaskTitle, normalize_description};
pub use schedule::{ensure_due_date_not_past, today};
pub use status::{TaskPriority, TaskStatus};
pub use task::{NewTask, PersistedTaskData, Task, TaskChanges};
