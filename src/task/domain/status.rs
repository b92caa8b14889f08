//! Task status, priority and the forward-only advancement policy.

use super::{ParseTaskPriorityError, ParseTaskStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task.
///
/// Variants are declared in advancement order; the discriminant indexes the
/// policy tables below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Pending = 0,
    /// Task is being worked on.
    InProgress = 1,
    /// Task has been completed. Terminal.
    Done = 2,
}

impl TaskStatus {
    /// Every status, in advancement order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Done];

    /// Successor of each status, indexed by discriminant.
    const SUCCESSORS: [Option<Self>; 3] = [Some(Self::InProgress), Some(Self::Done), None];

    const STORAGE_NAMES: [&'static str; 3] = ["pending", "in_progress", "done"];

    const LABELS: [&'static str; 3] = ["Pending", "In progress", "Done"];

    const fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the status one step further along the workflow, or `None`
    /// when the status is terminal.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::SUCCESSORS.get(self.ordinal()).copied().flatten()
    }

    /// Returns `true` when an advance action should be offered.
    #[must_use]
    pub fn can_advance(self) -> bool {
        self.next().is_some()
    }

    /// Returns `true` for the terminal status.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !self.can_advance()
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        Self::STORAGE_NAMES
            .get(self.ordinal())
            .copied()
            .unwrap_or_default()
    }

    /// Returns the human-readable label shown to users.
    #[must_use]
    pub fn label(self) -> &'static str {
        Self::LABELS.get(self.ordinal()).copied().unwrap_or_default()
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task priority. Display only, no ordering semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Low priority.
    Low,
    /// Medium priority, the default for new tasks.
    #[default]
    Medium,
    /// High priority.
    High,
}

impl TaskPriority {
    /// Every priority.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Returns the human-readable label shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
