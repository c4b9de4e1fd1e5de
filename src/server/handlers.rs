//! REST handlers for `/tasks`.
//!
//! Each handler locks the store only for the duration of its own query.

use super::auth::AuthUser;
use super::error::ApiError;
use super::extract::ApiJson;
use super::state::AppState;
use crate::api::{MessageResponse, TaskResponse, TasksResponse};
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, TaskFilter, TaskPatch};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    completed: Option<String>,
}

impl ListQuery {
    fn filter(&self) -> Result<TaskFilter, ApiError> {
        let completed = match self.completed.as_deref() {
            None => None,
            Some("true") => Some(true),
            Some("false") => Some(false),
            Some(other) => {
                return Err(ApiError::validation(format!(
                    "Query parameter `completed` must be true or false, got '{}'",
                    other
                )))
            }
        };
        Ok(TaskFilter::from_completed(completed))
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    AuthUser(owner): AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<TasksResponse>, ApiError> {
    let filter = query.filter()?;
    let db = state.db();
    let tasks = Tasks::new(&db.conn).fetch(&owner, filter)?;
    Ok(Json(TasksResponse { tasks }))
}

pub async fn create_task(
    State(state): State<AppState>,
    AuthUser(owner): AuthUser,
    ApiJson(body): ApiJson<NewTask>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    // The owner always comes from the session, never from the body.
    let new_task = NewTask {
        owner: Some(owner),
        ..body
    };
    let db = state.db();
    let task = Tasks::new(&db.conn).insert(&new_task)?;
    tracing::info!(id = %task.id, owner = %task.owner, "task created");
    Ok((StatusCode::CREATED, Json(TaskResponse { task })))
}

pub async fn get_task(
    State(state): State<AppState>,
    AuthUser(owner): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError> {
    let db = state.db();
    let task = Tasks::new(&db.conn).get(&owner, &id)?;
    Ok(Json(TaskResponse { task }))
}

pub async fn update_task(
    State(state): State<AppState>,
    AuthUser(owner): AuthUser,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<TaskPatch>,
) -> Result<Json<TaskResponse>, ApiError> {
    let db = state.db();
    let task = Tasks::new(&db.conn).update(&owner, &id, &patch)?;
    tracing::info!(id = %task.id, completed = task.completed, "task updated");
    Ok(Json(TaskResponse { task }))
}

pub async fn delete_task(
    State(state): State<AppState>,
    AuthUser(owner): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let db = state.db();
    Tasks::new(&db.conn).delete(&owner, &id)?;
    tracing::info!(id = %id, "task deleted");
    Ok(Json(MessageResponse {
        msg: Message::TaskDeleted.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(completed: Option<&str>) -> ListQuery {
        ListQuery {
            completed: completed.map(str::to_string),
        }
    }

    #[test]
    fn completed_query_maps_to_filter() {
        assert_eq!(query(None).filter().unwrap(), TaskFilter::All);
        assert_eq!(query(Some("true")).filter().unwrap(), TaskFilter::Completed);
        assert_eq!(query(Some("false")).filter().unwrap(), TaskFilter::Incomplete);
        assert!(query(Some("yes")).filter().is_err());
    }
}
