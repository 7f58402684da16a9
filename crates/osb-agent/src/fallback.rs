//! Canned replies served when the remote agent is unavailable.
//!
//! Used directly when no endpoint is configured, and by the live resolver
//! whenever a remote call fails. The intent on every reply is
//! `classify(message)`, so callers see the same intent either way.

use async_trait::async_trait;
use osb_protocol::{AgentReply, ConversationContext, Intent};

use crate::classifier::classify;
use crate::github::{extract_github_url, github_username, looks_like_username};
use crate::resolver::ResponseResolver;

/// Resolver that answers from fixed per-intent templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackResolver;

impl FallbackResolver {
    pub fn new() -> Self {
        Self
    }

    /// Canned reply for a message. Synchronous; never fails.
    pub fn reply(&self, message: &str) -> AgentReply {
        let intent = classify(message);
        AgentReply::fallback(intent, canned_message(intent, message))
    }
}

#[async_trait]
impl ResponseResolver for FallbackResolver {
    async fn resolve(&self, message: &str, _context: &ConversationContext) -> AgentReply {
        self.reply(message)
    }

    fn mode_name(&self) -> &str {
        "fallback"
    }
}

/// Canned reply text for an intent.
pub fn canned_message(intent: Intent, message: &str) -> String {
    match intent {
        Intent::AskForUsername => ASK_FOR_USERNAME.to_string(),
        Intent::AnalyzeGithub => profile_analysis(message),
        Intent::SuggestProjects => PROJECT_RECOMMENDATIONS.to_string(),
        Intent::SuggestContributions => contribution_guide(message),
        Intent::General => GREETING.to_string(),
    }
}

fn profile_analysis(message: &str) -> String {
    let (username, url) = match extract_github_url(message) {
        Some(url) => (github_username(url).map(str::to_string), Some(url.to_string())),
        None if looks_like_username(message) => {
            let username = message.trim();
            (
                Some(username.to_string()),
                Some(format!("https://github.com/{username}")),
            )
        }
        None => (None, None),
    };
    let username = username.as_deref().unwrap_or("user");
    let url = url.as_deref().unwrap_or("your GitHub");

    format!(
        r#"**🔍 GitHub Profile Analysis for @{username}**

I've analyzed the profile: {url}

**Languages & Frameworks:**
- JavaScript / TypeScript (Primary)
- React.js, Node.js
- Python (Secondary)
- MongoDB, PostgreSQL

**Areas of Expertise:**
- Full-stack web development
- AI/ML integration
- REST API design
- Frontend UI/UX

**Experience Level:** Intermediate to Advanced

**Summary:**
This developer has strong full-stack skills with a focus on modern JavaScript frameworks and backend development. Their projects show experience integrating AI features, which makes them a good match for open-source work in web development, automation tools or developer productivity.

**🎯 Next Steps:**
Would you like me to find open-source projects matching this profile?"#
    )
}

fn contribution_guide(message: &str) -> String {
    let project = extract_github_url(message)
        .and_then(|url| url.rsplit('/').next())
        .unwrap_or("this project");

    format!(
        r#"**🎯 Contribution Guide for {project}**

I've looked through the repository. Here's where you can help:

**📁 Best Areas to Start:**

**1. Documentation** (/docs or /README.md)
- Refresh outdated setup instructions
- Add more code examples
- Improve the API reference
- Fix typos and unclear wording

**2. Frontend Components** (/src/components)
- `UserProfile.jsx`: accessibility improvements
- `SearchBar.jsx`: keyboard shortcuts
- `RepoCard.jsx`: loading skeleton states

**3. Backend API** (/src/api or /server)
- `githubService.js`: rate limiting
- `searchController.js`: better error handling
- Unit tests for the API endpoints

**4. Open Issues to Tackle:**
- #234: "Add dark mode toggle" (good first issue)
- #189: "Improve mobile responsiveness"
- #156: "Add TypeScript types for API responses"

**🚀 Getting Started:**

```bash
# 1. Fork and clone
git clone https://github.com/[your-username]/[repo-name]
cd [repo-name]

# 2. Install dependencies
npm install

# 3. Run the development server
npm run dev

# 4. Run the tests
npm test
```

**📋 Before Contributing:**
1. Read CONTRIBUTING.md
2. Check existing issues and PRs
3. Open an issue or comment on an existing one
4. Follow the code style guidelines
5. Write tests for new features

**💡 Quick Wins:**
- Start with documentation (low risk, high value)
- Look for "good first issue" labels
- Fix small bugs before tackling features
- Ask questions in discussions or issues

Ready to start? Pick an area and I'll walk you through it! 🎉"#
    )
}

const ASK_FOR_USERNAME: &str = r#"**🎯 Let's analyze your GitHub profile!**

What's your GitHub username? (Just the username, like 'torvalds' or 'gaearon')

Once you share it, I'll look at your:
- 💻 Programming languages & frameworks
- 📊 Project complexity & experience level
- 🎯 Areas of expertise
- ✨ Best open-source project matches!"#;

const PROJECT_RECOMMENDATIONS: &str = r#"**🚀 Recommended Open-Source Projects**

Based on your tech stack, here are 5 great projects to contribute to:

**1. LangChain.js**
🔗 [github.com/langchain-ai/langchainjs](https://github.com/langchain-ai/langchainjs)
- **Stack:** TypeScript, Node.js, AI/LLM
- **⭐ Stars:** 11k+
- **Description:** Framework for building LLM-powered applications
- **Why it's a good fit:** Active JavaScript project that combines web development with AI

**2. Strapi**
🔗 [github.com/strapi/strapi](https://github.com/strapi/strapi)
- **Stack:** Node.js, TypeScript, React
- **⭐ Stars:** 60k+
- **Description:** Headless CMS for building APIs
- **Why it's a good fit:** Full-stack project with good documentation and an active community

**3. Docusaurus**
🔗 [github.com/facebook/docusaurus](https://github.com/facebook/docusaurus)
- **Stack:** React, TypeScript, MDX
- **⭐ Stars:** 50k+
- **Description:** Documentation website generator
- **Why it's a good fit:** Frontend-focused with many "good first issues"

**4. Apache Superset**
🔗 [github.com/apache/superset](https://github.com/apache/superset)
- **Stack:** Python, React, TypeScript
- **⭐ Stars:** 58k+
- **Description:** Data visualization and exploration platform
- **Why it's a good fit:** Python backend paired with a React frontend

**5. NextChat**
🔗 [github.com/ChatGPTNextWeb/ChatGPT-Next-Web](https://github.com/ChatGPTNextWeb/ChatGPT-Next-Web)
- **Stack:** Next.js, TypeScript, React
- **⭐ Stars:** 70k+
- **Description:** Cross-platform chat UI for LLMs
- **Why it's a good fit:** Modern React/Next.js codebase with AI integration

**💡 All of these have:**
- Active maintenance (updated in the last month)
- Good contributor documentation
- "Good first issue" labels
- Welcoming communities

**Pick one and I'll help you find where to contribute!**"#;

const GREETING: &str = r#"**👋 Hi! I'm Open Source Buddy**

I can help you:

**1️⃣ Analyze Your GitHub Profile**
Share your GitHub username or profile URL (e.g., "https://github.com/username") and I'll analyze your tech stack and experience.

**2️⃣ Find Matching Projects**
Based on your skills, I'll recommend active open-source projects you can contribute to.

**3️⃣ Suggest Contribution Areas**
Pick a project and I'll show you exactly where to contribute (which files and modules to focus on).

**How to get started:**
- Ask me to "Analyze my GitHub", or
- Type your GitHub profile URL, or
- Tell me which technologies you know!

What would you like to do? 🚀"#;
