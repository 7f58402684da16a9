//! Stateless classification endpoint, for UI affordances.

use axum::Json;
use osb_agent::{classify, extract_github_url};
use osb_protocol::Intent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub intent: Intent,
    /// GitHub URL found in the message, if any.
    pub github_url: Option<String>,
}

/// POST /api/v1/intent: classify a message without resolving it.
pub async fn classify_message(Json(req): Json<ClassifyRequest>) -> Json<ClassifyResponse> {
    Json(ClassifyResponse {
        intent: classify(&req.message),
        github_url: extract_github_url(&req.message).map(str::to_string),
    })
}
