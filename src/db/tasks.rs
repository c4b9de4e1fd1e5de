use crate::libs::error::TaskError;
use crate::libs::task::{NewTask, Task, TaskFilter, TaskPatch};
use chrono::{SecondsFormat, Utc};
use rusqlite::{params, params_from_iter, types::Value, Connection, OptionalExtension, Row};
use uuid::Uuid;

const INSERT_TASK: &str =
    "INSERT INTO tasks (id, owner, description, completed, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_TASKS: &str = "SELECT id, owner, description, completed, created_at, updated_at FROM tasks";
const WHERE_OWNER: &str = "WHERE owner = ?";
const AND_COMPLETED: &str = "AND completed = ?";
const WHERE_OWNER_ID: &str = "WHERE owner = ?1 AND id = ?2";
const ORDER_NATURAL: &str = "ORDER BY seq";
const UPDATE_TASK: &str = "UPDATE tasks SET description = ?1, completed = ?2, updated_at = ?3 WHERE owner = ?4 AND id = ?5";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE owner = ?1 AND id = ?2";

pub type Result<T> = std::result::Result<T, TaskError>;

/// Owner-scoped task records. A task owned by someone else behaves exactly
/// like a task that does not exist.
pub struct Tasks<'c> {
    conn: &'c Connection,
}

impl<'c> Tasks<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Tasks { conn }
    }

    pub fn insert(&self, new_task: &NewTask) -> Result<Task> {
        let (owner, description, completed) = new_task.validate()?;
        let now = now();
        let task = Task {
            id: Uuid::new_v4().to_string(),
            owner,
            description,
            completed,
            created_at: now.clone(),
            updated_at: now,
        };

        self.conn.execute(
            INSERT_TASK,
            params![task.id, task.owner, task.description, task.completed, task.created_at, task.updated_at],
        )?;
        tracing::debug!(id = %task.id, owner = %task.owner, "task inserted");

        Ok(task)
    }

    pub fn fetch(&self, owner: &str, filter: TaskFilter) -> Result<Vec<Task>> {
        let mut params: Vec<Value> = vec![Value::from(owner.to_string())];
        let sql = match filter.completed() {
            Some(completed) => {
                params.push(Value::from(completed));
                format!("{} {} {} {}", SELECT_TASKS, WHERE_OWNER, AND_COMPLETED, ORDER_NATURAL)
            }
            None => format!("{} {} {}", SELECT_TASKS, WHERE_OWNER, ORDER_NATURAL),
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(params), from_row)?;
        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    pub fn get(&self, owner: &str, id: &str) -> Result<Task> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_OWNER_ID), params![owner, id], from_row)
            .optional()?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    /// Applies a partial update and refreshes `updated_at`.
    pub fn update(&self, owner: &str, id: &str, patch: &TaskPatch) -> Result<Task> {
        let mut task = self.get(owner, id)?;
        patch.apply(&mut task)?;
        task.updated_at = now();

        self.conn.execute(
            UPDATE_TASK,
            params![task.description, task.completed, task.updated_at, owner, id],
        )?;
        tracing::debug!(id = %task.id, completed = task.completed, "task updated");

        Ok(task)
    }

    pub fn delete(&self, owner: &str, id: &str) -> Result<()> {
        match self.conn.execute(DELETE_TASK, params![owner, id])? {
            0 => Err(TaskError::NotFound(id.to_string())),
            _ => {
                tracing::debug!(id = %id, "task deleted");
                Ok(())
            }
        }
    }
}

fn from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        owner: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

/// Microsecond precision so two writes in the same second still differ.
fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
