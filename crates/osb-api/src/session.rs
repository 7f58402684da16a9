//! In-memory chat sessions.
//!
//! A session holds the `ConversationContext` between turns and a busy flag
//! that keeps at most one turn in flight per session.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use osb_agent::extract_github_url;
use osb_protocol::{ConversationContext, Intent};
use serde::Serialize;
use uuid::Uuid;

/// One chat session.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub context: ConversationContext,
    /// Completed turns.
    pub turns: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    busy: Arc<AtomicBool>,
}

/// Serializable snapshot of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub context: ConversationContext,
    pub turns: u32,
    pub busy: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            context: ConversationContext::default(),
            turns: 0,
            created_at: now,
            updated_at: now,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Mark the session busy. Returns `None` if a turn is already in flight.
    ///
    /// The flag clears when the returned guard drops, including when the
    /// request is abandoned mid-turn.
    pub fn try_begin_turn(&self) -> Option<TurnGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| TurnGuard {
                busy: self.busy.clone(),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Apply a finished turn to the session.
    pub fn record_turn(&mut self, intent: Intent, message: &str) {
        self.context = advance_context(&self.context, intent, message);
        self.turns += 1;
        self.updated_at = Utc::now();
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            session_id: self.id,
            context: self.context.clone(),
            turns: self.turns,
            busy: self.is_busy(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the session's busy flag on drop.
#[derive(Debug)]
pub struct TurnGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for TurnGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// Context for the next turn, given the intent the last message resolved to.
pub fn advance_context(
    context: &ConversationContext,
    intent: Intent,
    message: &str,
) -> ConversationContext {
    let mut next = context.clone();
    match intent {
        Intent::AskForUsername => next.waiting_for_username = true,
        Intent::AnalyzeGithub => {
            next.github_url = extract_github_url(message).map(str::to_string);
            next.analyzed = true;
            next.waiting_for_username = false;
        }
        Intent::SuggestProjects => next.projects_shown = true,
        Intent::SuggestContributions => {
            if let Some(url) = extract_github_url(message) {
                next.selected_repo = Some(url.to_string());
            }
        }
        Intent::General => {}
    }
    next
}
