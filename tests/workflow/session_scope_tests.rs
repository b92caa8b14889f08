//! Identity scoping of the task list across sign-in and sign-out.

use super::helpers::{App, PASSWORD, app};
use rstest::rstest;
use taskflow::task::{
    domain::{NewTask, TaskPriority, TaskTitle},
    services::TaskClientError,
};

fn new_task(title: &str) -> Result<NewTask, eyre::Report> {
    Ok(NewTask::new(TaskTitle::new(title)?, TaskPriority::Medium))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signed_out_list_is_empty_without_a_fetch(app: App) -> Result<(), eyre::Report> {
    app.auth.restore(None).await?;

    let tasks = app.client.list().await?;

    eyre::ensure!(tasks.is_empty(), "signed-out list should be empty");
    eyre::ensure!(app.store.select_calls()? == 0, "no fetch should be issued");
    eyre::ensure!(
        matches!(
            app.client.create(new_task("A")?).await,
            Err(TaskClientError::NotAuthenticated)
        ),
        "signed-out create should fail"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn each_identity_sees_only_its_own_tasks(app: App) -> Result<(), eyre::Report> {
    let ada = app.auth.sign_in("ada@example.com", PASSWORD).await?;
    let mine = app.client.create(new_task("Ada's task")?).await?;
    eyre::ensure!(mine.owner() == ada.user_id(), "owner comes from the session");

    app.auth.sign_out().await?;
    app.auth.sign_in("grace@example.com", PASSWORD).await?;
    let graces = app.client.list().await?;
    eyre::ensure!(graces.is_empty(), "grace must not see ada's task");

    app.auth.sign_out().await?;
    app.auth.sign_in("ada@example.com", PASSWORD).await?;
    let adas = app.client.list().await?;
    eyre::ensure!(adas == vec![mine], "ada still sees the earlier task");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cache_is_kept_per_identity(app: App) -> Result<(), eyre::Report> {
    app.auth.sign_in("ada@example.com", PASSWORD).await?;
    app.client.list().await?;
    app.client.list().await?;
    eyre::ensure!(app.store.select_calls()? == 1, "second list should be cached");

    app.auth.sign_in("grace@example.com", PASSWORD).await?;
    app.client.list().await?;
    eyre::ensure!(app.store.select_calls()? == 2, "new identity should fetch");

    app.auth.sign_in("ada@example.com", PASSWORD).await?;
    app.client.list().await?;
    eyre::ensure!(
        app.store.select_calls()? == 2,
        "returning identity should reuse its cached list"
    );
    Ok(())
}
