use osb_agent::{FallbackResolver, classify, looks_like_username};
use osb_protocol::Intent;
use proptest::prelude::*;

proptest! {
    #[test]
    fn github_marker_always_wins(prefix in ".{0,60}", suffix in ".{0,60}") {
        let message = format!("{prefix}github.com/{suffix}");
        prop_assert_eq!(classify(&message), Intent::AnalyzeGithub);
    }

    #[test]
    fn username_tokens_are_analysis(token in "[A-Za-z0-9-]{1,39}") {
        prop_assume!(!token.to_lowercase().contains("analyze"));
        prop_assert!(looks_like_username(&token));
        prop_assert_eq!(classify(&token), Intent::AnalyzeGithub);
    }

    // The "analyze" rule runs before the username rule.
    #[test]
    fn analyze_inside_username_token_asks_for_username(
        head in "[A-Za-z0-9-]{0,16}",
        keyword in "[Aa][Nn][Aa][Ll][Yy][Zz][Ee]",
        tail in "[A-Za-z0-9-]{0,16}",
    ) {
        let token = format!("{head}{keyword}{tail}");
        prop_assert!(looks_like_username(&token));
        prop_assert_eq!(classify(&token), Intent::AskForUsername);
    }

    #[test]
    fn classify_is_deterministic(s in ".{0,200}") {
        prop_assert_eq!(classify(&s), classify(&s));
    }

    #[test]
    fn fallback_reply_follows_classifier(s in ".{0,200}") {
        let reply = FallbackResolver::new().reply(&s);
        prop_assert!(reply.success);
        prop_assert!(!reply.message.is_empty());
        prop_assert_eq!(reply.intent, classify(&s));
    }
}
