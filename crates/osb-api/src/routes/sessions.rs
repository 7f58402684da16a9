//! Session lifecycle endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::session::SessionView;
use crate::state::AppState;
use crate::suggestions::{GREETING, SuggestedPrompt, quick_actions};

/// Response body for a new session.
#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: Uuid,
    pub greeting: &'static str,
    pub quick_actions: Vec<SuggestedPrompt>,
}

/// Request body for updating profile fields of the context.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionRequest {
    #[serde(default)]
    pub tech_stack: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
}

/// POST /api/v1/sessions: start a new chat session.
pub async fn create_session(State(state): State<AppState>) -> Json<NewSessionResponse> {
    let session_id = state.create_session().await;
    tracing::info!(%session_id, "session created");
    Json(NewSessionResponse {
        session_id,
        greeting: GREETING,
        quick_actions: quick_actions(),
    })
}

/// GET /api/v1/sessions/{id}: current context and turn count.
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Json<SessionView>> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&session_id)
        .ok_or(ApiError::SessionNotFound(session_id))?;
    Ok(Json(session.view()))
}

/// PATCH /api/v1/sessions/{id}: set tech stack and/or interests.
pub async fn update_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<UpdateSessionRequest>,
) -> ApiResult<Json<SessionView>> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or(ApiError::SessionNotFound(session_id))?;

    if let Some(tech_stack) = req.tech_stack {
        session.context.tech_stack = Some(tech_stack);
    }
    if let Some(interests) = req.interests {
        session.context.interests = Some(interests);
    }
    session.updated_at = chrono::Utc::now();

    Ok(Json(session.view()))
}

/// DELETE /api/v1/sessions/{id}: forget a session.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .sessions
        .write()
        .await
        .remove(&session_id)
        .ok_or(ApiError::SessionNotFound(session_id))?;
    tracing::info!(%session_id, "session deleted");
    Ok(StatusCode::NO_CONTENT)
}
