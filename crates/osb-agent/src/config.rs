//! Remote agent endpoint configuration, loadable from TOML or environment.

use std::time::Duration;

use serde::Deserialize;

/// Settings for the remote agent endpoint.
///
/// Both `endpoint` and `api_key` must be present for the live strategy to be
/// used; otherwise the resolver runs in fallback mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgentConfig {
    /// Agent base URL, with or without the `/api/v1/chat/completions` suffix.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Bearer credential for the endpoint.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Shortest request timeout honored. A zero timeout would fail every call.
const MIN_TIMEOUT_SECS: u64 = 1;

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AgentConfig {
    /// Build a config with explicit endpoint and key.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            api_key: Some(api_key.into()),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Load from `AGENT_API_URL`, `AGENT_API_KEY` and `AGENT_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let timeout_secs =
            parse_timeout_secs(std::env::var("AGENT_TIMEOUT_SECS").ok().as_deref());
        Self {
            endpoint: std::env::var("AGENT_API_URL").ok(),
            api_key: std::env::var("AGENT_API_KEY").ok(),
            timeout_secs,
        }
    }

    /// Endpoint with blank values treated as absent.
    pub fn endpoint(&self) -> Option<&str> {
        non_blank(self.endpoint.as_deref())
    }

    /// API key with blank values treated as absent.
    pub fn api_key(&self) -> Option<&str> {
        non_blank(self.api_key.as_deref())
    }

    /// True when both endpoint and credential are set.
    pub fn is_configured(&self) -> bool {
        self.endpoint().is_some() && self.api_key().is_some()
    }

    /// Request timeout, never shorter than one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(MIN_TIMEOUT_SECS))
    }
}

/// Unset, unparsable or zero values fall back to the default.
fn parse_timeout_secs(raw: Option<&str>) -> u64 {
    match raw.map(str::trim).map(str::parse::<u64>) {
        Some(Ok(secs)) if secs >= MIN_TIMEOUT_SECS => secs,
        Some(_) => {
            tracing::warn!(value = ?raw, "ignoring invalid AGENT_TIMEOUT_SECS");
            default_timeout_secs()
        }
        None => default_timeout_secs(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
