//! REST adapter for the hosted `tasks` table.
//!
//! Rows are exchanged as JSON through the backend's table endpoint
//! (`/rest/v1/tasks`). Writes ask for `Prefer: return=representation` so the
//! stored row, with its server-assigned fields, comes back in the response.

use async_trait::async_trait;
use reqwest::{Method, Response};
use serde::Serialize;

use crate::backend::{BackendClient, ServiceFailure};
use crate::session::domain::{Identity, UserId};
use crate::task::{
    domain::{NewTask, Task, TaskChanges, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

const TASKS_PATH: &str = "/rest/v1/tasks";
const RETURN_REPRESENTATION: &str = "return=representation";

/// Task store backed by the hosted REST API.
#[derive(Debug, Clone)]
pub struct RestTaskStore {
    client: BackendClient,
}

#[derive(Serialize)]
struct InsertRow<'a> {
    #[serde(flatten)]
    task: &'a NewTask,
    user_id: UserId,
}

impl RestTaskStore {
    /// Creates a store using `client`.
    #[must_use]
    pub const fn new(client: BackendClient) -> Self {
        Self { client }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> TaskStoreResult<Response> {
        let response = request.send().await.map_err(transport_error)?;
        if response.status().is_success() {
            return Ok(response);
        }
        let failure = ServiceFailure::from_response(response).await;
        tracing::warn!(
            status = failure.status,
            message = %failure.message,
            "task store request failed"
        );
        Err(store_error(failure))
    }

    async fn rows(&self, request: reqwest::RequestBuilder) -> TaskStoreResult<Vec<Task>> {
        self.send(request)
            .await?
            .json::<Vec<Task>>()
            .await
            .map_err(transport_error)
    }
}

fn store_error(failure: ServiceFailure) -> TaskStoreError {
    match failure.status {
        401 => TaskStoreError::Unauthenticated,
        403 => TaskStoreError::Unauthorized,
        status => TaskStoreError::Rejected {
            status,
            message: failure.message,
        },
    }
}

fn transport_error(err: reqwest::Error) -> TaskStoreError {
    if err.is_timeout() {
        TaskStoreError::Timeout
    } else {
        TaskStoreError::transport(err)
    }
}

fn id_filter(id: TaskId) -> [(&'static str, String); 1] {
    [("id", format!("eq.{id}"))]
}

#[async_trait]
impl TaskStore for RestTaskStore {
    async fn select(&self, identity: &Identity) -> TaskStoreResult<Vec<Task>> {
        tracing::debug!(user_id = %identity.user_id(), "selecting tasks");
        let request = self
            .client
            .request(Method::GET, TASKS_PATH, Some(identity.access_token()))
            .query(&[
                ("select", "*".to_owned()),
                ("user_id", format!("eq.{}", identity.user_id())),
                ("order", "created_at.desc".to_owned()),
            ]);
        self.rows(request).await
    }

    async fn insert(&self, identity: &Identity, task: &NewTask) -> TaskStoreResult<Task> {
        tracing::debug!(user_id = %identity.user_id(), "inserting task");
        let request = self
            .client
            .request(Method::POST, TASKS_PATH, Some(identity.access_token()))
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&InsertRow {
                task,
                user_id: identity.user_id(),
            });
        self.rows(request).await?.into_iter().next().ok_or_else(|| {
            TaskStoreError::Rejected {
                status: 200,
                message: "insert returned no row".to_owned(),
            }
        })
    }

    async fn update(
        &self,
        identity: &Identity,
        id: TaskId,
        changes: &TaskChanges,
    ) -> TaskStoreResult<Task> {
        tracing::debug!(task_id = %id, "updating task");
        let request = self
            .client
            .request(Method::PATCH, TASKS_PATH, Some(identity.access_token()))
            .query(&id_filter(id))
            .header("Prefer", RETURN_REPRESENTATION)
            .json(changes);
        self.rows(request)
            .await?
            .into_iter()
            .next()
            .ok_or(TaskStoreError::NotFound(id))
    }

    async fn delete(&self, identity: &Identity, id: TaskId) -> TaskStoreResult<()> {
        tracing::debug!(task_id = %id, "deleting task");
        let request = self
            .client
            .request(Method::DELETE, TASKS_PATH, Some(identity.access_token()))
            .query(&id_filter(id));
        self.send(request).await?;
        Ok(())
    }
}
