use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// Which resolver strategy produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// Normalized answer from the remote agent endpoint.
    Live,
    /// Canned answer (endpoint unconfigured or the call failed).
    Fallback,
}

/// Result of resolving one chat turn.
///
/// `message` is never empty, even when `success` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReply {
    pub success: bool,
    /// Markdown text to show in the transcript.
    pub message: String,
    /// Intent the message was classified as.
    pub intent: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub source: ReplySource,
    /// Retrieval metadata returned by the remote agent, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieval: Option<serde_json::Value>,
}

impl AgentReply {
    /// Successful reply from the remote agent.
    pub fn live(intent: Intent, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            intent,
            error: None,
            source: ReplySource::Live,
            retrieval: None,
        }
    }

    /// Canned reply served without the remote agent.
    pub fn fallback(intent: Intent, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            intent,
            error: None,
            source: ReplySource::Fallback,
            retrieval: None,
        }
    }

    /// Failed reply that still carries user-facing text.
    pub fn failure(intent: Intent, message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            intent,
            error: Some(error.into()),
            source: ReplySource::Fallback,
            retrieval: None,
        }
    }

    pub fn with_retrieval(mut self, retrieval: Option<serde_json::Value>) -> Self {
        self.retrieval = retrieval;
        self
    }
}
