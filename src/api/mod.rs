//! Client side of the task REST API.
//!
//! [`TaskApi`] is the seam the list view talks through. [`HttpTaskApi`]
//! implements it over HTTP with `reqwest`; tests substitute an in-memory
//! implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::api::{HttpTaskApi, TaskApi};
//! use taskdesk::libs::{session::Session, task::TaskFilter};
//!
//! # async fn run() -> Result<(), taskdesk::api::FetchError> {
//! let api = HttpTaskApi::new("http://127.0.0.1:5000", Session::read().unwrap_or_default());
//! let open = api.list(TaskFilter::Incomplete).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::task::{Task, TaskFilter, TaskPatch};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod tasks;

pub use tasks::HttpTaskApi;

/// Why a request did not produce a usable response.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no session token")]
    Unauthenticated,

    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// `GET /tasks` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
}

/// Body of single-task responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    pub task: Task,
}

/// Body of plain acknowledgements such as `DELETE /tasks/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

/// Error envelope returned by the server for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub msg: String,
}

/// Operations the list view needs from the server.
#[allow(async_fn_in_trait)]
pub trait TaskApi {
    async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>, FetchError>;

    async fn get(&self, id: &str) -> Result<Task, FetchError>;

    async fn create(&self, description: &str) -> Result<Task, FetchError>;

    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task, FetchError>;

    async fn delete(&self, id: &str) -> Result<(), FetchError>;
}
