//! Direct profile-analysis helper for callers holding a GitHub URL.

use osb_protocol::{AgentReply, ConversationContext, Intent};

use crate::github::github_username;
use crate::resolver::ResponseResolver;

pub const INVALID_GITHUB_URL: &str = "Invalid GitHub URL";

const INVALID_URL_MESSAGE: &str = "I couldn't find a GitHub username in that link. \
Please share a profile URL like https://github.com/username, or just the username.";

/// Analyze the profile behind `github_url`.
///
/// Returns a failed reply when the URL carries no username segment;
/// otherwise resolves a standard analysis request with an empty context.
pub async fn analyze_github_profile(
    resolver: &dyn ResponseResolver,
    github_url: &str,
) -> AgentReply {
    let Some(username) = github_username(github_url) else {
        tracing::debug!(github_url, "profile analysis rejected: no username");
        return AgentReply::failure(Intent::AnalyzeGithub, INVALID_URL_MESSAGE, INVALID_GITHUB_URL);
    };

    tracing::info!(username, "analyzing github profile");
    let message = format!("Analyze my GitHub profile: {github_url}");
    resolver
        .resolve(&message, &ConversationContext::default())
        .await
}
