//! Shared request runner for the client.
//!
//! [`Fetch`] wraps a [`TaskApi`], owns the `loading` flag and reports every
//! failure to the console, so callers only see `Some(value)` or `None`.
//! Success is announced for mutations only; loads stay quiet.
//!
//! The flag is a shared [`LoadingFlag`]: while a request is in flight the
//! runner holds `&mut self`, so anyone who wants to observe it (a status
//! line, a render from another task) keeps a clone of the handle.

use crate::api::{FetchError, TaskApi};
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter, TaskPatch};
use crate::{msg_error, msg_print, msg_success};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared handle to the in-flight state of one [`Fetch`].
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn set(&self, loading: bool) {
        self.0.store(loading, Ordering::SeqCst);
    }
}

pub struct Fetch<A: TaskApi> {
    api: A,
    loading: LoadingFlag,
}

impl<A: TaskApi> Fetch<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            loading: LoadingFlag::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn loading(&self) -> LoadingFlag {
        self.loading.clone()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn list(&mut self, filter: TaskFilter) -> Option<Vec<Task>> {
        run(&self.loading, self.api.list(filter), None).await
    }

    pub async fn get(&mut self, id: &str) -> Option<Task> {
        run(&self.loading, self.api.get(id), None).await
    }

    pub async fn create(&mut self, description: &str) -> Option<Task> {
        run(&self.loading, self.api.create(description), Some(Message::TaskCreated)).await
    }

    pub async fn update(&mut self, id: &str, patch: &TaskPatch) -> Option<Task> {
        run(&self.loading, self.api.update(id, patch), Some(Message::TaskUpdated)).await
    }

    pub async fn delete(&mut self, id: &str) -> Option<()> {
        run(&self.loading, self.api.delete(id), Some(Message::TaskDeleted)).await
    }
}

/// Awaits one request with `loading` raised for its duration, showing the
/// loading indicator as it starts.
async fn run<T, F>(loading: &LoadingFlag, request: F, success: Option<Message>) -> Option<T>
where
    F: Future<Output = Result<T, FetchError>>,
{
    loading.set(true);
    msg_print!(Message::Loading);
    let result = request.await;
    loading.set(false);

    match result {
        Ok(value) => {
            if let Some(msg) = success {
                msg_success!(msg);
            }
            Some(value)
        }
        Err(e) => {
            tracing::warn!(error = %e, "task request failed");
            msg_error!(describe(&e));
            None
        }
    }
}

fn describe(e: &FetchError) -> Message {
    match e {
        FetchError::Unauthenticated => Message::NotLoggedIn,
        FetchError::Status { status, message } => Message::ServerError(*status, message.clone()),
        FetchError::Transport(err) => Message::RequestFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_map_to_console_messages() {
        let e = FetchError::Status {
            status: 404,
            message: "Task 'abc' not found".into(),
        };
        assert_eq!(describe(&e).to_string(), "Server responded with 404: Task 'abc' not found");
        assert!(matches!(describe(&FetchError::Unauthenticated), Message::NotLoggedIn));
    }
}
