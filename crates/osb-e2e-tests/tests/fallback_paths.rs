//! Live agent endpoint paths, including every way of falling back.
//!
//! Whatever happens upstream, a chat turn must answer with the same intent
//! the classifier picks, and a failed upstream call must look exactly like
//! running without an endpoint at all.

mod helpers;

use std::time::Duration;

use axum::http::StatusCode;
use helpers::{COMPLETIONS_PATH, TestHarness, completion_body, mount_completion, received_prompts};
use osb_agent::classify;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run one message through a fresh session and return the reply object.
async fn reply_for(h: &TestHarness, message: &str) -> Value {
    let id = h.new_session().await;
    let (status, json) = h.chat(id, message).await;
    assert_eq!(status, StatusCode::OK);
    json["reply"].clone()
}

#[tokio::test]
async fn live_reply_carries_agent_text_and_retrieval() {
    let server = MockServer::start().await;
    let mut body = completion_body("Try tokio-rs/axum, it matches your stack.");
    body["retrieval"] = json!({ "retrieved_data": [{ "id": "kb-7" }] });
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(header("authorization", "Bearer e2e-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let h = TestHarness::live(&server);
    let reply = reply_for(&h, "find projects").await;

    assert_eq!(reply["success"], true);
    assert_eq!(reply["source"], "live");
    assert_eq!(reply["intent"], "SUGGEST_PROJECTS");
    assert_eq!(reply["message"], "Try tokio-rs/axum, it matches your stack.");
    assert_eq!(reply["retrieval"]["retrieved_data"][0]["id"], "kb-7");
}

#[tokio::test]
async fn live_prompt_reflects_session_profile() {
    let server = MockServer::start().await;
    mount_completion(&server, "ok").await;

    let h = TestHarness::live(&server);
    let id = h.new_session().await;
    h.set_profile(id, "Rust, Tokio", "networking").await;
    let (status, _) = h.chat(id, "recommend some repos").await;
    assert_eq!(status, StatusCode::OK);

    let prompts = received_prompts(&server).await;
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("**Tech Stack:** Rust, Tokio"));
    assert!(prompts[0].contains("**Interests:** networking"));
}

#[tokio::test]
async fn live_health_reports_mode() {
    let server = MockServer::start().await;
    let h = TestHarness::live(&server);
    let (status, json) = h
        .request(
            axum::http::Request::get("/health")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mode"], "live");
}

#[tokio::test]
async fn server_error_matches_unconfigured_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let live = TestHarness::live(&server);
    let offline = TestHarness::fallback();

    for message in ["analyze", "torvalds", "find projects", "where can I help", "hello there"] {
        let failed = reply_for(&live, message).await;
        let canned = reply_for(&offline, message).await;

        assert_eq!(failed, canned, "message: {message}");
        assert_eq!(failed["source"], "fallback");
        assert_eq!(failed["success"], true);
        assert_eq!(failed["intent"], classify(message).as_str());
    }
}

#[tokio::test]
async fn timeout_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("too late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let h = TestHarness::live(&server);
    let reply = reply_for(&h, "find projects").await;

    assert_eq!(reply["source"], "fallback");
    assert_eq!(reply["intent"], "SUGGEST_PROJECTS");
    assert!(reply["message"].as_str().unwrap().contains("Recommended Open-Source Projects"));
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let h = TestHarness::live(&server);
    let reply = reply_for(&h, "analyze").await;
    assert_eq!(reply["source"], "fallback");
    assert_eq!(reply["intent"], "ASK_FOR_USERNAME");
}

#[tokio::test]
async fn profile_endpoint_uses_live_agent() {
    let server = MockServer::start().await;
    mount_completion(&server, "Strong systems background.").await;

    let h = TestHarness::live(&server);
    let (status, json) = h
        .post(
            "/api/v1/profile/analyze",
            json!({ "github_url": "https://github.com/torvalds" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["source"], "live");
    assert_eq!(json["message"], "Strong systems background.");

    let prompts = received_prompts(&server).await;
    assert!(prompts[0].contains("https://github.com/torvalds"));
}

#[tokio::test]
async fn invalid_profile_url_never_reaches_agent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("x")))
        .expect(0)
        .mount(&server)
        .await;

    let h = TestHarness::live(&server);
    let (_, json) = h
        .post("/api/v1/profile/analyze", json!({ "github_url": "not a url" }))
        .await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Invalid GitHub URL");
}
