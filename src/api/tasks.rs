use super::{ErrorResponse, FetchError, TaskApi, TaskResponse, TasksResponse};
use crate::libs::session::Session;
use crate::libs::task::{NewTask, Task, TaskFilter, TaskPatch};
use reqwest::{header, Client, RequestBuilder, Response};

const TASKS_URL: &str = "tasks";

/// [`TaskApi`] over HTTP. Every request carries the session's bearer token.
pub struct HttpTaskApi {
    client: Client,
    api_url: String,
    session: Session,
}

impl HttpTaskApi {
    pub fn new(api_url: &str, session: Session) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    fn task_url(&self, id: &str) -> String {
        self.url(&format!("{}/{}", TASKS_URL, id))
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, FetchError> {
        let token = self.session.token().ok_or(FetchError::Unauthenticated)?;
        Ok(request.header(header::AUTHORIZATION, format!("Bearer {}", token)))
    }

    /// Sends the request, turning non-2xx responses into [`FetchError::Status`].
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let res = self.authorized(request)?.send().await?;
        let status = res.status();
        tracing::debug!(status = status.as_u16(), url = %res.url(), "task api response");

        if status.is_success() {
            return Ok(res);
        }

        let body = res.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.msg)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("request failed").to_string());
        Err(FetchError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

impl TaskApi for HttpTaskApi {
    async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>, FetchError> {
        let url = format!("{}{}", self.url(TASKS_URL), filter.query());
        let res = self.send(self.client.get(url)).await?;
        Ok(res.json::<TasksResponse>().await?.tasks)
    }

    async fn get(&self, id: &str) -> Result<Task, FetchError> {
        let res = self.send(self.client.get(self.task_url(id))).await?;
        Ok(res.json::<TaskResponse>().await?.task)
    }

    async fn create(&self, description: &str) -> Result<Task, FetchError> {
        let body = NewTask {
            description: Some(description.to_string()),
            ..NewTask::default()
        };
        let res = self.send(self.client.post(self.url(TASKS_URL)).json(&body)).await?;
        Ok(res.json::<TaskResponse>().await?.task)
    }

    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task, FetchError> {
        let res = self.send(self.client.patch(self.task_url(id)).json(patch)).await?;
        Ok(res.json::<TaskResponse>().await?.task)
    }

    async fn delete(&self, id: &str) -> Result<(), FetchError> {
        self.send(self.client.delete(self.task_url(id))).await?;
        Ok(())
    }
}
