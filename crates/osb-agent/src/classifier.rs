//! Rule-based intent classifier.
//!
//! Ordered keyword rules; the first rule that matches wins. The rules
//! overlap, so the order is part of the contract:
//!
//! 1. `github.com/` anywhere → `AnalyzeGithub`
//! 2. "analyze" → `AskForUsername`
//! 3. bare username-shaped token → `AnalyzeGithub`
//! 4. project search keywords → `SuggestProjects`
//! 5. contribution keywords → `SuggestContributions`
//! 6. everything else → `General`
//!
//! Rule 3 also catches one-word replies such as "yes" or "ok123"; callers
//! that need to tell those apart must do so before classifying. A
//! username-shaped token containing "analyze" (e.g. "Analyzer42") is taken
//! by rule 2 first.

use osb_protocol::Intent;

use crate::github::looks_like_username;

const GITHUB_MARKER: &str = "github.com/";

const PROJECT_KEYWORDS: &[&str] = &["find", "search", "suggest project", "recommend"];

const CONTRIBUTION_KEYWORDS: &[&str] = &["contribute", "where can i", "which module"];

/// Classify a chat message. Total and deterministic.
pub fn classify(message: &str) -> Intent {
    let lower = message.to_lowercase();

    if lower.contains(GITHUB_MARKER) {
        return Intent::AnalyzeGithub;
    }

    // Rule 1 already took every URL-bearing message.
    if lower.contains("analyze") {
        return Intent::AskForUsername;
    }

    if looks_like_username(message) {
        return Intent::AnalyzeGithub;
    }

    if matches_any(&lower, PROJECT_KEYWORDS) {
        return Intent::SuggestProjects;
    }

    if matches_any(&lower, CONTRIBUTION_KEYWORDS) {
        return Intent::SuggestContributions;
    }

    Intent::General
}

/// Check if the text contains any of the given patterns.
fn matches_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}
