//! API error type with Axum `IntoResponse` support.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

/// Errors a handler can answer with. The body is always `{error, status}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("session '{0}' not found")]
    SessionNotFound(Uuid),

    /// A second chat turn arrived while one is still being resolved.
    #[error("session '{0}' already has a message in flight")]
    TurnInFlight(Uuid),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::TurnInFlight(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(_) => tracing::error!(error = %self, "request failed"),
            ApiError::TurnInFlight(session_id) => {
                tracing::debug!(%session_id, "rejected concurrent chat turn")
            }
            _ => {}
        }

        let body = json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
