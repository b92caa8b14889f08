//! Application services for task management.

mod board;
mod cache;
mod client;
mod form;

pub use board::{BoardView, DELETE_NOTICE, TaskBoard, advance_notice};
pub use client::{TaskClientError, TaskClientResult, TaskStoreClient};
pub use form::{CREATED_NOTICE, PAST_DUE_DATE_NOTICE, TaskDraft, TaskForm, TaskFormError};
