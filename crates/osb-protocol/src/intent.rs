use std::fmt;

use serde::{Deserialize, Serialize};

/// Conversational intent assigned to every inbound chat message.
///
/// The set is closed: every message maps to exactly one variant, with
/// `General` as the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// User wants a profile analysis but gave no URL or username.
    AskForUsername,
    /// Message carries a GitHub URL or a bare username.
    AnalyzeGithub,
    /// User is looking for projects to join.
    SuggestProjects,
    /// User wants guidance on where to contribute in a repository.
    SuggestContributions,
    /// Anything else.
    General,
}

impl Intent {
    /// All intents, in declaration order.
    pub const ALL: [Intent; 5] = [
        Intent::AskForUsername,
        Intent::AnalyzeGithub,
        Intent::SuggestProjects,
        Intent::SuggestContributions,
        Intent::General,
    ];

    /// Wire label, e.g. `"ANALYZE_GITHUB"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::AskForUsername => "ASK_FOR_USERNAME",
            Intent::AnalyzeGithub => "ANALYZE_GITHUB",
            Intent::SuggestProjects => "SUGGEST_PROJECTS",
            Intent::SuggestContributions => "SUGGEST_CONTRIBUTIONS",
            Intent::General => "GENERAL",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
