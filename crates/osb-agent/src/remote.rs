//! HTTP client for the remote chat-completions agent endpoint.
//!
//! Sends one single-turn request per chat message and normalizes the
//! completion body into plain reply text. Retries are not attempted; the
//! caller decides what to do with an error.

use serde::{Deserialize, Serialize};

use crate::config::AgentConfig;
use crate::error::{AgentError, AgentResult};

/// Path appended to the configured base URL.
const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

/// Reply text used when the endpoint answered without any message.
pub const NO_RESPONSE: &str = "No response from agent";

/// Chat-completions request body.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    include_functions_info: bool,
    include_retrieval_info: bool,
    include_guardrails_info: bool,
}

/// A single message in the request.
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Completion response (only the fields we read).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CompletionResponse {
    choices: Vec<Choice>,
    message: Option<serde_json::Value>,
    retrieval: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Normalized answer from the endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// Reply text; never empty.
    pub text: String,
    /// Retrieval metadata, when the endpoint included it.
    pub retrieval: Option<serde_json::Value>,
}

/// Client for the remote agent endpoint.
pub struct RemoteAgentClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl RemoteAgentClient {
    /// Build a client from config. Fails when the endpoint or key is missing.
    pub fn new(config: &AgentConfig) -> AgentResult<Self> {
        let (Some(endpoint), Some(api_key)) = (config.endpoint(), config.api_key()) else {
            return Err(AgentError::NotConfigured);
        };
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AgentError::Client(e.to_string()))?;
        Ok(Self {
            client,
            url: completions_url(endpoint),
            api_key: api_key.to_string(),
        })
    }

    /// Fully resolved completions URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send `prompt` as the only user message and normalize the reply.
    pub async fn complete(&self, prompt: &str) -> AgentResult<Completion> {
        let body = CompletionRequest {
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
            include_functions_info: false,
            include_retrieval_info: true,
            include_guardrails_info: false,
        };

        tracing::debug!(url = %self.url, prompt_len = prompt.len(), "sending agent request");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let parsed: CompletionResponse =
            serde_json::from_slice(&bytes).map_err(|e| AgentError::Malformed(e.to_string()))?;

        Ok(normalize(parsed))
    }
}

/// Base URL with the completions path appended unless it is already there.
fn completions_url(endpoint: &str) -> String {
    if endpoint.ends_with(COMPLETIONS_PATH) {
        endpoint.to_string()
    } else {
        format!("{}{COMPLETIONS_PATH}", endpoint.trim_end_matches('/'))
    }
}

/// First choice's content, then a top-level `message` string, then `NO_RESPONSE`.
fn normalize(response: CompletionResponse) -> Completion {
    let from_choice = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|t| !t.is_empty());

    let text = from_choice
        .or_else(|| {
            response
                .message
                .as_ref()
                .and_then(|v| v.as_str())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| NO_RESPONSE.to_string());

    Completion {
        text,
        retrieval: response.retrieval,
    }
}
