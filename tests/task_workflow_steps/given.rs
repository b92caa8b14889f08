//! Given steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use crate::test_helpers::PASSWORD;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskflow::task::domain::{NewTask, TaskPriority, TaskTitle};

#[given(r#"a signed-in user "{email}""#)]
fn signed_in_user(world: &mut TaskWorkflowWorld, email: String) -> Result<(), eyre::Report> {
    run_async(world.app.auth.sign_in(&email, PASSWORD)).wrap_err("sign in scenario user")?;
    Ok(())
}

#[given("nobody is signed in")]
fn nobody_signed_in(world: &mut TaskWorkflowWorld) -> Result<(), eyre::Report> {
    run_async(world.app.auth.restore(None)).wrap_err("resolve signed-out session")?;
    Ok(())
}

#[given(r#"a task titled "{title}""#)]
fn task_titled(world: &mut TaskWorkflowWorld, title: String) -> Result<(), eyre::Report> {
    let task = NewTask::new(TaskTitle::new(title)?, TaskPriority::Medium);
    let created = run_async(world.app.client.create(task)).wrap_err("create scenario task")?;
    world.last_task = Some(created);
    Ok(())
}
