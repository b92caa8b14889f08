//! Shared world state for task workflow BDD scenarios.

use crate::test_helpers::{App, FixedClock, RecordingNotifier};
use rstest::fixture;
use taskflow::task::{
    adapters::memory::InMemoryTaskStore,
    domain::Task,
    services::{TaskBoard, TaskForm, TaskFormError},
};

/// Scenario world for task workflow behaviour tests.
pub struct TaskWorkflowWorld {
    pub app: App,
    pub board: TaskBoard<InMemoryTaskStore, RecordingNotifier>,
    pub form: TaskForm<InMemoryTaskStore, RecordingNotifier, FixedClock>,
    pub last_task: Option<Task>,
    pub last_submit: Option<Result<Task, TaskFormError>>,
    pub notices_before_advance: usize,
}

impl TaskWorkflowWorld {
    /// Creates a world with nobody signed in.
    #[must_use]
    pub fn new() -> Self {
        let app = App::new();
        let board = app.board();
        let form = app.form();
        Self {
            app,
            board,
            form,
            last_task: None,
            last_submit: None,
            notices_before_advance: 0,
        }
    }
}

impl Default for TaskWorkflowWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorkflowWorld {
    TaskWorkflowWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
