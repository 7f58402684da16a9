//! Quick-reply prompts offered to the chat surface.

use osb_protocol::{ConversationContext, Intent};
use serde::Serialize;

/// Opening message of a new session.
pub const GREETING: &str = "👋 Hi! I'm **Open Source Buddy**. I'll help you find the perfect open-source projects to contribute to!\n\nTo get started, share your GitHub profile URL and I'll analyze your tech stack.";

/// Shown when a turn fails outside the resolver's own fallback.
pub const APOLOGY: &str = "😅 Oops! Something went wrong. Please try again in a moment.";

/// A clickable prompt the chat surface can send on the user's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedPrompt {
    pub label: &'static str,
    pub prompt: &'static str,
}

const fn suggestion(label: &'static str, prompt: &'static str) -> SuggestedPrompt {
    SuggestedPrompt { label, prompt }
}

/// Fixed actions offered on a fresh session.
pub fn quick_actions() -> Vec<SuggestedPrompt> {
    vec![
        suggestion("Analyze My GitHub", "Analyze my GitHub profile"),
        suggestion("Find Projects", "Find open-source projects matching my skills"),
        suggestion(
            "Suggest Contributions",
            "How can I start contributing to open source?",
        ),
    ]
}

/// Follow-ups for the reply just shown, given the updated context.
pub fn suggested_prompts(intent: Intent, context: &ConversationContext) -> Vec<SuggestedPrompt> {
    if intent == Intent::AskForUsername || context.waiting_for_username {
        return vec![
            suggestion("Example: torvalds", "torvalds"),
            suggestion("Example: gaearon", "gaearon"),
            suggestion("Example: tj", "tj"),
        ];
    }

    match intent {
        Intent::AnalyzeGithub if context.analyzed => vec![
            suggestion("Find matching projects", "Find open-source projects matching my skills"),
            suggestion("Show beginner-friendly projects", "Show me beginner-friendly projects"),
            suggestion(
                "Trending projects",
                "What are trending open-source projects in my tech stack?",
            ),
        ],
        Intent::SuggestProjects if context.projects_shown => vec![
            suggestion(
                "How to start contributing?",
                "How can I start contributing to these projects?",
            ),
            suggestion("Good first issues", "Show me good first issues in these projects"),
            suggestion("More similar projects", "Find more similar projects"),
        ],
        Intent::SuggestContributions => vec![
            suggestion("Explain the codebase", "Explain the project structure"),
            suggestion("Learning resources", "What should I learn before contributing?"),
            suggestion("Community guidelines", "What are the contribution guidelines?"),
        ],
        _ => vec![
            suggestion("Analyze my GitHub", "Analyze my GitHub profile"),
            suggestion("Find projects", "Find open-source projects for me"),
            suggestion("Get started guide", "How do I get started with open source?"),
        ],
    }
}
