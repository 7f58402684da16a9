//! Shared test harness for E2E integration tests.
//!
//! Drives the real API router with either the fallback resolver or a live
//! resolver pointed at a wiremock agent endpoint.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use osb_agent::AgentConfig;
use osb_api::routes::build_router;
use osb_api::state::AppState;

pub const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

/// End-to-end test harness around the chat API.
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// Harness with no agent endpoint configured.
    pub fn fallback() -> Self {
        Self::from_config(&AgentConfig::default())
    }

    /// Harness whose agent endpoint is the given mock server.
    pub fn live(server: &MockServer) -> Self {
        let mut config = AgentConfig::new(server.uri(), "e2e-key");
        config.timeout_secs = 1;
        Self::from_config(&config)
    }

    pub fn from_config(config: &AgentConfig) -> Self {
        let state = AppState::from_config(config);
        let router = build_router(state.clone());
        Self { state, router }
    }

    /// Send a request through the router. Returns (status, JSON body).
    pub async fn request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
    }

    /// Create a session via POST /api/v1/sessions.
    pub async fn new_session(&self) -> Uuid {
        let (status, json) = self.post("/api/v1/sessions", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        json["session_id"].as_str().unwrap().parse().unwrap()
    }

    /// Send one chat turn via POST /api/v1/chat.
    pub async fn chat(&self, session_id: Uuid, message: &str) -> (StatusCode, Value) {
        self.post(
            "/api/v1/chat",
            json!({ "session_id": session_id, "message": message }),
        )
        .await
    }

    /// Update profile fields via PATCH /api/v1/sessions/{id}.
    pub async fn set_profile(&self, session_id: Uuid, tech_stack: &str, interests: &str) {
        let (status, _) = self
            .request(
                Request::patch(format!("/api/v1/sessions/{session_id}"))
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&json!({
                            "techStack": tech_stack,
                            "interests": interests,
                        }))
                        .unwrap(),
                    ))
                    .unwrap(),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }
}

/// Completion body with a single assistant choice.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-e2e",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

/// Mount a successful completion answer on the mock server.
pub async fn mount_completion(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .mount(server)
        .await;
}

/// Prompts received by the mock agent endpoint, in order.
pub async fn received_prompts(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| {
            let body: Value = serde_json::from_slice(&r.body).unwrap();
            body["messages"][0]["content"].as_str().unwrap().to_string()
        })
        .collect()
}
