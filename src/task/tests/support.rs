//! Shared fixtures for task unit tests.

use crate::session::domain::{AccessToken, Identity, UserId};
use crate::task::domain::{PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus, TaskTitle};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

/// Clock pinned to noon local time on a given day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub fn on(year: i32, month: u32, day: u32) -> Self {
        let noon = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .expect("valid calendar date");
        Self(
            Local
                .from_local_datetime(&noon)
                .earliest()
                .expect("noon exists in the local time zone"),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

#[fixture]
pub fn identity() -> Identity {
    Identity::new(UserId::new(), "ada@example.com", AccessToken::new("token-ada"))
}

pub fn task_with_status(owner: UserId, title: &str, status: TaskStatus) -> Task {
    let timestamp = Utc::now();
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        owner,
        title: TaskTitle::new(title).expect("valid title"),
        description: None,
        status,
        priority: TaskPriority::Medium,
        due_date: None,
        created_at: timestamp,
        updated_at: timestamp,
    })
}

/// One task per status, plus a second pending task.
pub fn mixed_tasks(owner: UserId) -> Vec<Task> {
    vec![
        task_with_status(owner, "Write report", TaskStatus::Pending),
        task_with_status(owner, "Review budget", TaskStatus::InProgress),
        task_with_status(owner, "Book flights", TaskStatus::Done),
        task_with_status(owner, "Call plumber", TaskStatus::Pending),
    ]
}
