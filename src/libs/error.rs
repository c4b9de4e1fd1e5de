//! Error type shared by the task model and the store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// A required field was absent or blank.
    #[error("Validation failed: `{0}` is required")]
    MissingField(&'static str),

    #[error("Task '{0}' not found")]
    NotFound(String),

    #[error("Unknown filter '{0}', expected all, completed or incomplete")]
    InvalidFilter(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl TaskError {
    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::MissingField(_) | TaskError::InvalidFilter(_))
    }
}
