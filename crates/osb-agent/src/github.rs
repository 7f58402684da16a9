//! GitHub username and profile URL helpers.

use std::sync::LazyLock;

use regex::Regex;

// GitHub usernames: 1-39 chars, ASCII letters, digits and hyphens.
static RE_USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]{1,39}$").unwrap());

// Profile or repo URL, captured up to the owner segment only.
static RE_GITHUB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://(?:www\.)?github\.com/[A-Za-z0-9_-]+").unwrap()
});

/// True when the trimmed text has the shape of a GitHub username.
pub fn looks_like_username(text: &str) -> bool {
    let trimmed = text.trim();
    RE_USERNAME.is_match(trimmed) && !trimmed.contains(char::is_whitespace)
}

/// First GitHub profile URL in the text, truncated after the owner segment.
///
/// `"see https://github.com/foo/bar"` yields `"https://github.com/foo"`.
pub fn extract_github_url(text: &str) -> Option<&str> {
    RE_GITHUB_URL.find(text).map(|m| m.as_str())
}

/// Path segment following `github.com/`, up to the next `/`.
///
/// Returns `None` when the text has no `github.com/` or the segment is empty.
pub fn github_username(url: &str) -> Option<&str> {
    const MARKER: &str = "github.com/";
    let start = url.to_ascii_lowercase().find(MARKER)? + MARKER.len();
    let rest = &url[start..];
    let segment = rest.split('/').next().unwrap_or_default();
    (!segment.is_empty()).then_some(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── looks_like_username ─────────────────────────────────────

    #[test]
    fn plain_handles_look_like_usernames() {
        assert!(looks_like_username("torvalds"));
        assert!(looks_like_username("gaearon"));
        assert!(looks_like_username("my-handle-42"));
        assert!(looks_like_username("  tj  "));
    }

    #[test]
    fn length_bounds() {
        assert!(looks_like_username("a"));
        assert!(looks_like_username(&"a".repeat(39)));
        assert!(!looks_like_username(&"a".repeat(40)));
        assert!(!looks_like_username(""));
        assert!(!looks_like_username("   "));
    }

    #[test]
    fn rejects_spaces_and_punctuation() {
        assert!(!looks_like_username("two words"));
        assert!(!looks_like_username("under_score"));
        assert!(!looks_like_username("dot.name"));
        assert!(!looks_like_username("hello!"));
        assert!(!looks_like_username("ünïcode"));
    }

    // ── extract_github_url ──────────────────────────────────────

    #[test]
    fn extract_stops_at_owner_segment() {
        assert_eq!(
            extract_github_url("check https://github.com/foo/bar please"),
            Some("https://github.com/foo")
        );
    }

    #[test]
    fn extract_profile_url() {
        assert_eq!(
            extract_github_url("my profile: https://github.com/torvalds"),
            Some("https://github.com/torvalds")
        );
    }

    #[test]
    fn extract_www_and_http() {
        assert_eq!(
            extract_github_url("http://www.github.com/rust-lang/rust"),
            Some("http://www.github.com/rust-lang")
        );
    }

    #[test]
    fn extract_is_case_insensitive() {
        assert_eq!(
            extract_github_url("HTTPS://GitHub.com/Foo"),
            Some("HTTPS://GitHub.com/Foo")
        );
    }

    #[test]
    fn extract_returns_first_match() {
        assert_eq!(
            extract_github_url("https://github.com/a and https://github.com/b"),
            Some("https://github.com/a")
        );
    }

    #[test]
    fn extract_requires_scheme_and_owner() {
        assert_eq!(extract_github_url("github.com/foo"), None);
        assert_eq!(extract_github_url("https://github.com/"), None);
        assert_eq!(extract_github_url("no links here"), None);
    }

    // ── github_username ─────────────────────────────────────────

    #[test]
    fn username_from_profile_and_repo_urls() {
        assert_eq!(github_username("https://github.com/torvalds"), Some("torvalds"));
        assert_eq!(github_username("https://github.com/foo/bar"), Some("foo"));
        assert_eq!(github_username("github.com/tj"), Some("tj"));
    }

    #[test]
    fn username_missing() {
        assert_eq!(github_username("https://github.com/"), None);
        assert_eq!(github_username("https://gitlab.com/foo"), None);
        assert_eq!(github_username("not a url"), None);
    }
}
