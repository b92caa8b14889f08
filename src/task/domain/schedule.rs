//! Due-date rule applied before a task is submitted.

use super::TaskDomainError;
use chrono::NaiveDate;
use mockable::Clock;

/// Returns the current local calendar day.
#[must_use]
pub fn today(clock: &impl Clock) -> NaiveDate {
    clock.local().date_naive()
}

/// Rejects due dates that fall strictly before `today`.
///
/// The comparison is by calendar day, so a task due today is accepted.
///
/// # Errors
///
/// Returns [`TaskDomainError::DueDateInPast`] when `due_date` is earlier than
/// `today`.
pub fn ensure_due_date_not_past(
    due_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), TaskDomainError> {
    match due_date {
        Some(due) if due < today => Err(TaskDomainError::DueDateInPast {
            due_date: due,
            today,
        }),
        _ => Ok(()),
    }
}
