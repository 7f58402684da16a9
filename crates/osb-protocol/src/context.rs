use serde::{Deserialize, Serialize};

/// Per-session conversation state owned by the chat surface.
///
/// The agent core only reads it. The caller updates it after each turn
/// based on the intent echoed back in the reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversationContext {
    /// Free-text description of the user's languages and frameworks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    /// Free-text description of what the user wants to work on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    /// Repository the user picked for contribution guidance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_repo: Option<String>,
    /// Profile URL from the last analysis turn, if the message carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// The assistant asked for a username and is waiting for it.
    pub waiting_for_username: bool,
    /// A profile analysis has been shown.
    pub analyzed: bool,
    /// Project recommendations have been shown.
    pub projects_shown: bool,
}

impl ConversationContext {
    /// `tech_stack`, treating blank text as absent.
    pub fn tech_stack(&self) -> Option<&str> {
        non_blank(self.tech_stack.as_deref())
    }

    /// `interests`, treating blank text as absent.
    pub fn interests(&self) -> Option<&str> {
        non_blank(self.interests.as_deref())
    }

    /// `selected_repo`, treating blank text as absent.
    pub fn selected_repo(&self) -> Option<&str> {
        non_blank(self.selected_repo.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
