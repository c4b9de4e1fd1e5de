use super::error::ApiError;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

/// JSON request body whose rejections use the API error envelope.
///
/// Wrong field types, malformed JSON and a missing `Content-Type` all become
/// `400 VALIDATION_ERROR` with axum's description as the message.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(status = %rejection.status(), "json body rejected");
            ApiError::validation(rejection.body_text())
        })?;
        Ok(ApiJson(value))
    }
}
