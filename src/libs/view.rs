//! The task list view.
//!
//! Holds the fetched `tasks` and the status `filter`; `loading` belongs to the
//! [`Fetch`] runner. The view never patches its list locally: every
//! successful mutation is followed by a full reload of the current filter,
//! and a failed one leaves the list as it was.
//!
//! All operations take `&mut self`, so at most one request is in flight and
//! responses are applied in the order they were issued.

use super::fetch::{Fetch, LoadingFlag};
use super::messages::Message;
use super::session::Session;
use super::task::{Task, TaskFilter, TaskPatch};
use crate::api::TaskApi;
use prettytable::{row, Table};

/// Where the empty state sends the user to create a task.
pub const ADD_TASK_LINK: &str = "taskdesk add <description>";

pub struct TaskListView<A: TaskApi> {
    session: Session,
    fetch: Fetch<A>,
    tasks: Vec<Task>,
    filter: TaskFilter,
}

impl<A: TaskApi> TaskListView<A> {
    pub fn new(session: Session, api: A) -> Self {
        Self::with_filter(session, api, TaskFilter::default())
    }

    pub fn with_filter(session: Session, api: A, filter: TaskFilter) -> Self {
        Self {
            session,
            fetch: Fetch::new(api),
            tasks: Vec::new(),
            filter,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    /// Handle that reads `true` while a request of this view is in flight.
    pub fn loading(&self) -> LoadingFlag {
        self.fetch.loading()
    }

    pub fn fetch(&self) -> &Fetch<A> {
        &self.fetch
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// First load after the view is created.
    pub async fn mount(&mut self) {
        self.load().await;
    }

    /// Changes the filter and reloads; setting the current filter again is a no-op.
    pub async fn set_filter(&mut self, filter: TaskFilter) {
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.load().await;
    }

    /// Replaces `tasks` with the server's list for the current filter.
    ///
    /// Does nothing for an anonymous session. Returns whether the list was
    /// refreshed.
    pub async fn load(&mut self) -> bool {
        if !self.session.is_logged_in() {
            return false;
        }
        match self.fetch.list(self.filter).await {
            Some(tasks) => {
                tracing::debug!(filter = %self.filter, count = tasks.len(), "tasks loaded");
                self.tasks = tasks;
                true
            }
            None => false,
        }
    }

    /// Sets `completed` to `!current` on the server, then reloads.
    pub async fn toggle(&mut self, id: &str, current: bool) -> bool {
        if self.fetch.update(id, &TaskPatch::completed(!current)).await.is_none() {
            return false;
        }
        self.load().await
    }

    pub async fn delete(&mut self, id: &str) -> bool {
        if self.fetch.delete(id).await.is_none() {
            return false;
        }
        self.load().await
    }

    pub fn render(&self) -> String {
        render(&self.tasks, self.is_loading())
    }
}

/// Text rendering of the list: a loading line, the empty state, or one row
/// per task in received order.
pub fn render(tasks: &[Task], loading: bool) -> String {
    let header = Message::TasksHeader(tasks.len());
    if loading {
        return format!("{}\n\n{}\n", header, Message::Loading);
    }
    if tasks.is_empty() {
        return format!("{}\n\n{}  {}: {}\n", header, Message::TasksNotFound, Message::AddNewTask, ADD_TASK_LINK);
    }

    let mut table = Table::new();
    table.add_row(row!["DONE", "#", "TASK", "EDIT", "DELETE"]);
    for (index, task) in tasks.iter().enumerate() {
        table.add_row(row![
            checkbox(task.completed),
            format!("Task #{}", index + 1),
            task.description,
            format!("taskdesk edit {} <description>", task.id),
            format!("taskdesk delete {}", task.id)
        ]);
    }

    format!("{}\n\n{}", header, table)
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}
