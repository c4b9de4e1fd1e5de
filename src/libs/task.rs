//! Task record shape and the rules a record must satisfy before it is stored.

use super::error::TaskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A persisted, user-owned task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub owner: String,
    pub description: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Insert payload. `owner` comes from the authenticated session, the rest
/// from the request body, so every field may be missing at this point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl NewTask {
    pub fn new(owner: &str, description: &str) -> Self {
        Self {
            owner: Some(owner.to_string()),
            description: Some(description.to_string()),
            completed: None,
        }
    }

    /// Checks required fields and applies the `completed = false` default.
    ///
    /// Returns `(owner, description, completed)` ready for insertion.
    pub fn validate(&self) -> Result<(String, String, bool), TaskError> {
        let owner = required("owner", self.owner.as_deref())?;
        let description = required("description", self.description.as_deref())?;
        Ok((owner, description, self.completed.unwrap_or(false)))
    }
}

/// Partial update. There is no `owner` field: ownership is fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            description: None,
            completed: Some(completed),
        }
    }

    pub fn description(description: &str) -> Self {
        Self {
            description: Some(description.to_string()),
            completed: None,
        }
    }

    /// Applies the patch to `task`, rejecting a blank description.
    pub fn apply(&self, task: &mut Task) -> Result<(), TaskError> {
        if let Some(description) = &self.description {
            task.description = required("description", Some(description))?;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        Ok(())
    }
}

fn required(field: &'static str, value: Option<&str>) -> Result<String, TaskError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(TaskError::MissingField(field)),
    }
}

/// Status filter of the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl TaskFilter {
    /// The `completed` value a task must have to pass, `None` for no filtering.
    pub fn completed(&self) -> Option<bool> {
        match self {
            TaskFilter::All => None,
            TaskFilter::Completed => Some(true),
            TaskFilter::Incomplete => Some(false),
        }
    }

    pub fn from_completed(completed: Option<bool>) -> Self {
        match completed {
            None => TaskFilter::All,
            Some(true) => TaskFilter::Completed,
            Some(false) => TaskFilter::Incomplete,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.completed().map_or(true, |c| task.completed == c)
    }

    /// Query string appended to `GET /tasks`.
    pub fn query(&self) -> &'static str {
        match self {
            TaskFilter::All => "",
            TaskFilter::Completed => "?completed=true",
            TaskFilter::Incomplete => "?completed=false",
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskFilter::All => "all",
            TaskFilter::Completed => "completed",
            TaskFilter::Incomplete => "incomplete",
        };
        f.write_str(name)
    }
}

impl FromStr for TaskFilter {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TaskFilter::All),
            "completed" => Ok(TaskFilter::Completed),
            "incomplete" => Ok(TaskFilter::Incomplete),
            other => Err(TaskError::InvalidFilter(other.to_string())),
        }
    }
}
