//! Direct profile analysis endpoint.

use axum::Json;
use axum::extract::State;
use osb_agent::analyze_github_profile;
use osb_protocol::AgentReply;
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeProfileRequest {
    pub github_url: String,
}

/// POST /api/v1/profile/analyze: analyze a profile URL outside any session.
///
/// An unusable URL is reported in the reply body (`success: false`), not as
/// an HTTP error.
pub async fn analyze_profile(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeProfileRequest>,
) -> Json<AgentReply> {
    let reply = analyze_github_profile(state.resolver.as_ref(), &req.github_url).await;
    if !reply.success {
        tracing::info!(github_url = %req.github_url, "rejected profile url");
    }
    Json(reply)
}
