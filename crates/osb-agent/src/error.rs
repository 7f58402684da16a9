//! Agent error types.

use thiserror::Error;

/// Errors raised while talking to the remote agent endpoint.
///
/// These never reach callers of a resolver; the live strategy logs them and
/// answers from the fallback strategy instead.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent endpoint not configured")]
    NotConfigured,

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("request to agent endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("agent endpoint returned status {0}")]
    Status(u16),

    #[error("malformed agent response: {0}")]
    Malformed(String),
}

impl AgentError {
    /// True when the failure was the client-side timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, AgentError::Transport(e) if e.is_timeout())
    }
}

/// Convenience alias for agent results.
pub type AgentResult<T> = Result<T, AgentError>;
