//! Open Source Buddy agent core.
//!
//! Turns a chat message plus the caller's `ConversationContext` into an
//! `AgentReply`:
//!
//! - **classifier**: ordered keyword rules map text to an `Intent`.
//! - **prompts**: one template per intent, filled from message and context.
//! - **resolver**: live strategy (remote agent endpoint) or fallback strategy
//!   (canned replies), chosen once from `AgentConfig`.

pub mod classifier;
pub mod config;
pub mod error;
pub mod fallback;
pub mod github;
pub mod profile;
pub mod prompts;
pub mod remote;
pub mod resolver;

pub use classifier::classify;
pub use config::AgentConfig;
pub use error::{AgentError, AgentResult};
pub use fallback::FallbackResolver;
pub use github::{extract_github_url, github_username, looks_like_username};
pub use profile::analyze_github_profile;
pub use prompts::{build, build_prompt};
pub use remote::RemoteAgentClient;
pub use resolver::{LiveResolver, ResponseResolver, resolver_from_config};
