use crate::services::editor::EditorError;
use crate::services::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

pub struct AppError(anyhow::Error);

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        let store_error = match self.0.downcast_ref::<EditorError>() {
            Some(EditorError::Validation(msg)) => {
                return (StatusCode::BAD_REQUEST, msg.clone());
            }
            Some(EditorError::Store(e)) => Some(e),
            None => self.0.downcast_ref::<StoreError>(),
        };

        match store_error {
            Some(e @ StoreError::NotFound(_)) => (StatusCode::NOT_FOUND, e.to_string()),
            Some(e @ StoreError::SlugConflict(_)) => (StatusCode::CONFLICT, e.to_string()),
            Some(e @ StoreError::Invalid(_)) => (StatusCode::BAD_REQUEST, e.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("Application error: {:?}", self.0);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, message);
        }

        let body = serde_json::json!({
            "error": status.canonical_reason().unwrap_or("Error"),
            "message": message,
        });
        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
