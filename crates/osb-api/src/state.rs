//! Shared application state for the Axum server.

use std::collections::HashMap;
use std::sync::Arc;

use osb_agent::{AgentConfig, FallbackResolver, ResponseResolver, resolver_from_config};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::session::Session;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Live chat sessions, keyed by session id. Lost on restart.
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    /// Reply strategy (live agent or canned fallback).
    pub resolver: Arc<dyn ResponseResolver>,
}

impl AppState {
    /// State with an explicit resolver.
    pub fn with_resolver(resolver: Arc<dyn ResponseResolver>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            resolver,
        }
    }

    /// State whose resolver is chosen from the agent config.
    pub fn from_config(config: &AgentConfig) -> Self {
        Self::with_resolver(resolver_from_config(config))
    }

    /// Fallback-only state (for tests and offline development).
    pub fn new() -> Self {
        Self::with_resolver(Arc::new(FallbackResolver::new()))
    }

    /// Create a session and return its id.
    pub async fn create_session(&self) -> Uuid {
        let session = Session::new();
        let id = session.id;
        self.sessions.write().await.insert(id, session);
        id
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
