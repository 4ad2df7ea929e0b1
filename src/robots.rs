//! Crawler access policy.
//!
//! Builds the ordered rule set served as robots.txt. The rules are advisory;
//! crawlers evaluate them top to bottom under their own semantics and nothing
//! here enforces access. Everything is fixed per deployment except the base
//! URL interpolated into the sitemap pointer.

/// Public content paths every general-purpose crawler may index.
const PUBLIC_CONTENT_PATHS: &[&str] = &[
    "/",
    "/articles",
    "/vol",
    "/about",
    "/contact",
    "/guidelines",
    "/editorial-board",
    "/masthead",
];

/// Dashboard, auth, API, and admin surfaces kept out of indexes.
const RESTRICTED_PATHS: &[&str] = &["/dashboard/*", "/auth/*", "/api/*", "/admin/*"];

/// Surfaces the academic indexer is limited to: published content only.
const SCHOLAR_PATHS: &[&str] = &["/vol/*", "/articles/*"];

/// Academic-indexing crawler that gets a scoped rule of its own.
const SCHOLAR_AGENT: &str = "SemanticScholarBot";

/// Major general-purpose search crawlers bundled under one rule.
const GENERAL_CRAWLERS: &[&str] = &[
    "Googlebot",
    "Bingbot",
    "Slurp",
    "DuckDuckBot",
    "Baiduspider",
    "YandexBot",
];

/// Agents a rule applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAgents {
    /// Every crawler (`User-agent: *`).
    Any,
    One(&'static str),
    Many(&'static [&'static str]),
}

/// One allow/disallow group, in crawler evaluation order.
#[derive(Debug, Clone)]
pub struct RobotsRule {
    pub user_agents: UserAgents,
    pub allow: &'static [&'static str],
    pub disallow: &'static [&'static str],
}

/// The full crawler policy for one deployment.
#[derive(Debug, Clone)]
pub struct CrawlerRuleSet {
    pub rules: Vec<RobotsRule>,
    /// Absolute sitemap pointer appended after the rule groups.
    pub sitemap: String,
}

/// Build the crawler policy for a deployment base URL. Pure; the base URL is
/// interpolated as given, so callers pass it already normalized.
pub fn build_policy(base_url: &str) -> CrawlerRuleSet {
    CrawlerRuleSet {
        rules: vec![
            RobotsRule {
                user_agents: UserAgents::Any,
                allow: PUBLIC_CONTENT_PATHS,
                disallow: RESTRICTED_PATHS,
            },
            RobotsRule {
                user_agents: UserAgents::One(SCHOLAR_AGENT),
                allow: SCHOLAR_PATHS,
                disallow: &["/"],
            },
            RobotsRule {
                user_agents: UserAgents::Many(GENERAL_CRAWLERS),
                allow: PUBLIC_CONTENT_PATHS,
                disallow: RESTRICTED_PATHS,
            },
        ],
        sitemap: format!("{base_url}/sitemap.xml"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_pointer() {
        let policy = build_policy("https://example.org");
        assert_eq!(policy.sitemap, "https://example.org/sitemap.xml");
    }

    #[test]
    fn test_wildcard_rule_comes_first() {
        let policy = build_policy("https://example.org");
        let general = &policy.rules[0];
        assert_eq!(general.user_agents, UserAgents::Any);
        assert!(general.allow.contains(&"/articles"));
        assert!(general.disallow.contains(&"/dashboard/*"));
        assert!(general.disallow.contains(&"/api/*"));
    }

    #[test]
    fn test_scholar_rule_is_scoped_to_content() {
        let policy = build_policy("https://example.org");
        let scholar = &policy.rules[1];
        assert_eq!(scholar.user_agents, UserAgents::One("SemanticScholarBot"));
        assert_eq!(scholar.allow, &["/vol/*", "/articles/*"]);
        assert_eq!(scholar.disallow, &["/"]);
    }

    #[test]
    fn test_general_crawlers_share_the_wildcard_policy() {
        let policy = build_policy("https://example.org");
        let bundled = &policy.rules[2];
        match bundled.user_agents {
            UserAgents::Many(agents) => {
                assert_eq!(agents.len(), 6);
                assert!(agents.contains(&"Googlebot"));
                assert!(agents.contains(&"YandexBot"));
            }
            ref other => panic!("expected bundled agents, got {other:?}"),
        }
        assert_eq!(bundled.allow, policy.rules[0].allow);
        assert_eq!(bundled.disallow, policy.rules[0].disallow);
    }
}
