//! Then steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use crate::test_helpers::Notice;
use rstest_bdd_macros::then;
use taskflow::task::{
    domain::{TaskDomainError, TaskFilter, TaskStatus},
    services::{PAST_DUE_DATE_NOTICE, TaskFormError},
};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())?;
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    eyre::ensure!(
        task.status() == expected,
        "expected status {}, found {}",
        expected.as_str(),
        task.status().as_str()
    );
    Ok(())
}

#[then(r#"the last notice names "{label}""#)]
fn last_notice_names(world: &TaskWorkflowWorld, label: String) -> Result<(), eyre::Report> {
    match world.app.notifier.last() {
        Some(Notice::Success(message)) if message.contains(&label) => Ok(()),
        other => Err(eyre::eyre!(
            "expected a confirmation naming {label}, got {other:?}"
        )),
    }
}

#[then("no notice was shown for the last advance")]
fn no_notice_for_last_advance(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let shown = world.app.notifier.notices().len();
    eyre::ensure!(
        shown == world.notices_before_advance,
        "expected no new notice, {} were shown",
        shown - world.notices_before_advance
    );
    Ok(())
}

#[then("the submission is rejected as past due")]
fn submission_rejected_as_past_due(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_submit
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submission result"))?;
    eyre::ensure!(
        matches!(
            result,
            Err(TaskFormError::Domain(TaskDomainError::DueDateInPast { .. }))
        ),
        "expected a past due date error, got {result:?}"
    );
    eyre::ensure!(
        world.app.notifier.last() == Some(Notice::Error(PAST_DUE_DATE_NOTICE.to_owned())),
        "missing past due date notice"
    );
    eyre::ensure!(world.form.is_open(), "form should stay open");
    Ok(())
}

#[then("the task list is empty")]
fn task_list_is_empty(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let view = run_async(world.board.view())?;
    eyre::ensure!(view.tasks.is_empty(), "expected no tasks, found {}", view.tasks.len());
    eyre::ensure!(view.counts.all == 0, "expected zero counts");
    Ok(())
}

#[then("the task list shows {count:usize} tasks")]
fn task_list_shows(world: &TaskWorkflowWorld, count: usize) -> Result<(), eyre::Report> {
    let view = run_async(world.board.view())?;
    eyre::ensure!(
        view.tasks.len() == count,
        "expected {count} tasks, found {}",
        view.tasks.len()
    );
    Ok(())
}

#[then(r#"the count for "{filter}" is {count:usize}"#)]
fn count_for_filter(
    world: &TaskWorkflowWorld,
    filter: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let parsed = TaskFilter::try_from(filter.as_str())?;
    let view = run_async(world.board.view())?;
    let actual = view.counts.for_filter(parsed);
    eyre::ensure!(
        actual == count,
        "expected {count} tasks counted under {filter}, found {actual}"
    );
    Ok(())
}
