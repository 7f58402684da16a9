//! Response resolution: live agent with canned fallback.
//!
//! `resolver_from_config` picks the strategy once at startup:
//! - **live** when both endpoint and key are configured; any remote failure
//!   is logged and answered by the fallback strategy.
//! - **fallback** otherwise; canned replies only, no network.
//!
//! Both always return a well-formed `AgentReply` with the same intent for
//! the same message.

use std::sync::Arc;

use async_trait::async_trait;
use osb_protocol::{AgentReply, ConversationContext};

use crate::classifier::classify;
use crate::config::AgentConfig;
use crate::fallback::FallbackResolver;
use crate::prompts::build;
use crate::remote::RemoteAgentClient;

/// Strategy that turns a chat message into a reply.
#[async_trait]
pub trait ResponseResolver: Send + Sync {
    /// Resolve one chat turn. Never fails; failures degrade to canned text.
    async fn resolve(&self, message: &str, context: &ConversationContext) -> AgentReply;

    /// Name of this strategy (for logging and health output).
    fn mode_name(&self) -> &str;
}

/// Resolver backed by the remote agent endpoint.
pub struct LiveResolver {
    client: RemoteAgentClient,
    fallback: FallbackResolver,
}

impl LiveResolver {
    pub fn new(client: RemoteAgentClient) -> Self {
        Self {
            client,
            fallback: FallbackResolver::new(),
        }
    }
}

#[async_trait]
impl ResponseResolver for LiveResolver {
    async fn resolve(&self, message: &str, context: &ConversationContext) -> AgentReply {
        let intent = classify(message);
        let prompt = build(intent, message, context);

        match self.client.complete(&prompt).await {
            Ok(completion) => {
                tracing::debug!(%intent, "agent reply received");
                AgentReply::live(intent, completion.text).with_retrieval(completion.retrieval)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    timeout = e.is_timeout(),
                    %intent,
                    "agent request failed, using fallback reply"
                );
                self.fallback.reply(message)
            }
        }
    }

    fn mode_name(&self) -> &str {
        "live"
    }
}

/// Pick the resolver strategy for this config.
pub fn resolver_from_config(config: &AgentConfig) -> Arc<dyn ResponseResolver> {
    if !config.is_configured() {
        tracing::info!("agent endpoint not configured, serving fallback replies");
        return Arc::new(FallbackResolver::new());
    }

    match RemoteAgentClient::new(config) {
        Ok(client) => {
            tracing::info!(
                url = %client.url(),
                timeout_secs = config.timeout_secs,
                "agent endpoint configured"
            );
            Arc::new(LiveResolver::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "agent client unavailable, serving fallback replies");
            Arc::new(FallbackResolver::new())
        }
    }
}
