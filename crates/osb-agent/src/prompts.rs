//! Intent-specific prompt templates for the remote agent.
//!
//! Building a prompt never fails: anything the message and context cannot
//! supply is filled with placeholder text.

use osb_protocol::{ConversationContext, Intent};

use crate::classifier::classify;
use crate::github::{extract_github_url, looks_like_username};

const PERSONA: &str = "You are \"Open Source Buddy\", an expert AI agent that helps developers discover and contribute to open-source projects.";

const DEFAULT_TECH_STACK: &str = "Not specified";
const DEFAULT_INTERESTS: &str = "General open-source contributions";
const DEFAULT_REPO: &str = "repository mentioned";
const DEFAULT_SKILLS: &str = "skills from profile";

/// Classify the message and build the matching prompt.
pub fn build_prompt(message: &str, context: &ConversationContext) -> String {
    build(classify(message), message, context)
}

/// Build the prompt for an already-classified message.
pub fn build(intent: Intent, message: &str, context: &ConversationContext) -> String {
    match intent {
        Intent::AskForUsername => ask_for_username(),
        Intent::AnalyzeGithub => analyze_github(&profile_url(message)),
        Intent::SuggestProjects => {
            let tech_stack = context.tech_stack().unwrap_or(DEFAULT_TECH_STACK);
            let interests = context.interests().unwrap_or(message);
            suggest_projects(tech_stack, interests)
        }
        Intent::SuggestContributions => {
            let repo_url = extract_github_url(message)
                .or_else(|| context.selected_repo())
                .unwrap_or(DEFAULT_REPO);
            let skills = context.tech_stack().unwrap_or(DEFAULT_SKILLS);
            suggest_contributions(repo_url, skills)
        }
        Intent::General => general(message),
    }
}

/// Profile URL for an analysis turn: extracted URL, then a URL synthesized
/// from a bare username, then the raw message as-is.
pub fn profile_url(message: &str) -> String {
    if let Some(url) = extract_github_url(message) {
        return url.to_string();
    }
    let trimmed = message.trim();
    if looks_like_username(trimmed) {
        return format!("https://github.com/{trimmed}");
    }
    message.to_string()
}

fn ask_for_username() -> String {
    format!(
        r#"{PERSONA}

The user wants a GitHub profile analysis but has not shared a username yet.

Reply in a short, friendly, conversational way and ask for their GitHub username.

Suggested reply format:
"**🎯 Let's analyze your GitHub profile!**

What's your GitHub username? (Just the username, like 'torvalds' or 'gaearon')

Once you share it, I'll look at your:
- Programming languages & frameworks
- Project complexity & experience level
- Areas of expertise
- Best open-source matches!"

Keep it brief and encouraging.
"#
    )
}

fn analyze_github(github_url: &str) -> String {
    format!(
        r#"{PERSONA}

The user shared their GitHub profile: {github_url}

Analyze this profile and:
1. Identify their primary programming languages and technologies
2. Identify their areas of expertise (web, AI/ML, mobile, backend, etc.)
3. Estimate their experience level from project complexity
4. Summarize their tech stack as concise bullet points

Use exactly this layout:
**🔍 GitHub Profile Analysis**

**Languages & Frameworks:**
- Main languages/frameworks

**Areas of Expertise:**
- Focus areas

**Experience Level:** Beginner/Intermediate/Advanced

**Summary:**
Two or three sentences summarizing the profile.
"#
    )
}

fn suggest_projects(tech_stack: &str, interests: &str) -> String {
    let interests = if interests.trim().is_empty() {
        DEFAULT_INTERESTS
    } else {
        interests
    };
    format!(
        r#"{PERSONA}

Developer profile:
**Tech Stack:** {tech_stack}
**Interests:** {interests}

Find 3-5 recently active, beginner-friendly open-source projects that match these skills.

For each project, give:
1. **Project Name** (with GitHub link if possible)
2. **Primary Language/Tech Stack**
3. **Stars/Popularity** (if available)
4. **Description** (1-2 sentences)
5. **Why it's a good fit** for this developer

Use clear headers and bullet points.

Prefer projects that:
- Are actively maintained (updated in the last 3-6 months)
- Have good documentation and contributor guidelines
- Use "good first issue" or "help wanted" labels
- Have a welcoming community
"#
    )
}

fn suggest_contributions(repo_url: &str, skills: &str) -> String {
    format!(
        r#"{PERSONA}

The developer wants to contribute to this repository: {repo_url}

Their skills: {skills}

Analyze the repository and suggest:
1. **Where to start**: which directories/modules to explore first
2. **Contribution opportunities:**
   - Documentation improvements
   - Bug fixes (check recent issues)
   - Feature enhancements
   - Testing improvements
3. **Specific files/modules** to look at given their skills
4. **Getting started steps:**
   - How to clone and set up the project
   - How to run the tests
   - Where to find the contribution guidelines

Use clear sections and actionable advice.
"#
    )
}

fn general(message: &str) -> String {
    format!(
        r#"{PERSONA}

User message: {message}

Respond helpfully. If the user is asking about:
- GitHub analysis without a URL → ask for their GitHub USERNAME (just "What's your GitHub username?", not the full URL)
- Finding projects → ask about their tech stack and interests
- Contributing → ask which repository they want to contribute to
- Anything else about open source → give guidance on getting started

Stay friendly and conversational, and ask for usernames rather than full URLs when you need one.
"#
    )
}
