//! When steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use crate::test_helpers::today;
use chrono::Days;
use rstest_bdd_macros::when;
use taskflow::task::domain::TaskFilter;

#[when("the task is advanced")]
fn advance_task(world: &mut TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    world.notices_before_advance = world.app.notifier.notices().len();
    if let Some(updated) = run_async(world.board.advance(&task))? {
        world.last_task = Some(updated);
    }
    Ok(())
}

#[when(r#"a task titled "{title}" due {days:u64} days ago is submitted"#)]
fn submit_with_due_date(
    world: &mut TaskWorkflowWorld,
    title: String,
    days: u64,
) -> Result<(), eyre::Report> {
    let due_date = today()
        .checked_sub_days(Days::new(days))
        .ok_or_else(|| eyre::eyre!("due date out of range"))?;
    world.form.open();
    let draft = world.form.draft_mut();
    draft.title = title;
    draft.due_date = Some(due_date);
    let result = run_async(world.form.submit());
    if let Ok(ref created) = result {
        world.last_task = Some(created.clone());
    }
    world.last_submit = Some(result);
    Ok(())
}

#[when(r#"the filter is set to "{filter}""#)]
fn set_filter(world: &mut TaskWorkflowWorld, filter: String) -> Result<(), eyre::Report> {
    let parsed = TaskFilter::try_from(filter.as_str())?;
    world.board.set_filter(parsed);
    Ok(())
}
