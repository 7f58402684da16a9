//! Chat turn endpoint.

use axum::Json;
use axum::extract::State;
use osb_agent::classify;
use osb_protocol::{AgentReply, ConversationContext};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::session::advance_context;
use crate::state::AppState;
use crate::suggestions::{APOLOGY, SuggestedPrompt, suggested_prompts};

/// Request body for one chat turn.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Existing session; a new one is created when absent.
    #[serde(default)]
    pub session_id: Option<Uuid>,
    /// Free-text user message.
    pub message: String,
}

/// Response body for one chat turn.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: Uuid,
    pub reply: AgentReply,
    /// Context after this turn was applied.
    pub context: ConversationContext,
    pub suggestions: Vec<SuggestedPrompt>,
}

/// POST /api/v1/chat: resolve one message and advance the session.
pub async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    if req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message must not be empty".into()));
    }

    let session_id = match req.session_id {
        Some(id) => id,
        None => state.create_session().await,
    };

    // Hold the guard for the whole turn; it clears the busy flag on drop.
    let (before, _turn) = {
        let sessions = state.sessions.read().await;
        let session = sessions
            .get(&session_id)
            .ok_or(ApiError::SessionNotFound(session_id))?;
        let turn = session
            .try_begin_turn()
            .ok_or(ApiError::TurnInFlight(session_id))?;
        (session.context.clone(), turn)
    };

    let reply = resolve_turn(&state, &req.message, before.clone()).await?;

    let context = {
        let mut sessions = state.sessions.write().await;
        match sessions.get_mut(&session_id) {
            // Failed turns leave the context as it was.
            Some(session) if reply.success => {
                session.record_turn(reply.intent, &req.message);
                session.context.clone()
            }
            Some(session) => session.context.clone(),
            None => {
                tracing::debug!(%session_id, "session deleted during turn");
                if reply.success {
                    advance_context(&before, reply.intent, &req.message)
                } else {
                    before
                }
            }
        }
    };

    tracing::info!(
        %session_id,
        intent = %reply.intent,
        source = ?reply.source,
        success = reply.success,
        "chat turn resolved"
    );

    let suggestions = suggested_prompts(reply.intent, &context);
    Ok(Json(ChatResponse {
        session_id,
        reply,
        context,
        suggestions,
    }))
}

/// Run the resolver on its own task so a panic becomes an apology reply
/// instead of a dropped connection.
async fn resolve_turn(
    state: &AppState,
    message: &str,
    context: ConversationContext,
) -> ApiResult<AgentReply> {
    let resolver = state.resolver.clone();
    let owned = message.to_string();
    let task = tokio::spawn(async move { resolver.resolve(&owned, &context).await });

    match task.await {
        Ok(reply) => Ok(reply),
        Err(e) if e.is_panic() => {
            tracing::error!(error = %e, "resolver panicked");
            Ok(AgentReply::failure(classify(message), APOLOGY, "resolver panicked"))
        }
        Err(e) => Err(ApiError::Internal(format!("chat turn cancelled: {e}"))),
    }
}
