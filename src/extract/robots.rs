//! Robots.txt parsing
//!
//! A line-oriented scan that keeps every directive in source order, plus a
//! thin wrapper over the robotstxt crate for per-agent allow decisions.

use robotstxt::DefaultMatcher;
use serde::Serialize;

/// One `Disallow`/`Allow` directive and the user-agent group it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsRule {
    pub user_agent: String,
    pub path: String,
}

/// Directives found in a robots.txt body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsRules {
    /// Distinct user agents, in order of first appearance
    pub user_agents: Vec<String>,

    /// Sitemap URLs, in source order
    pub sitemaps: Vec<String>,

    pub disallows: Vec<RobotsRule>,

    pub allows: Vec<RobotsRule>,
}

impl RobotsRules {
    /// Returns true if `Disallow: /` applies to every crawler
    pub fn blocks_all_crawlers(&self) -> bool {
        self.disallows
            .iter()
            .any(|rule| rule.user_agent == "*" && rule.path == "/")
    }
}

/// Parses robots.txt content into its directives
///
/// Blank lines and `#` comments are skipped. Directive names are matched
/// case-insensitively; the first matching prefix wins and anything else is
/// ignored. Rules before any `User-agent` line belong to `*`.
///
/// # Example
///
/// ```
/// use seo_audit::extract::parse_robots_txt;
///
/// let rules = parse_robots_txt("User-agent: *\nDisallow: /admin\nSitemap: https://example.com/sitemap.xml");
/// assert_eq!(rules.sitemaps, vec!["https://example.com/sitemap.xml"]);
/// assert_eq!(rules.disallows[0].path, "/admin");
/// ```
pub fn parse_robots_txt(content: &str) -> RobotsRules {
    let mut rules = RobotsRules::default();
    let mut current_agent = "*".to_string();

    for line in content.lines() {
        let trimmed = line.trim();

        // Skip comments and empty lines
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(value) = strip_directive(trimmed, "user-agent:") {
            current_agent = value.to_string();
            if !rules.user_agents.contains(&current_agent) {
                rules.user_agents.push(current_agent.clone());
            }
        } else if let Some(value) = strip_directive(trimmed, "sitemap:") {
            rules.sitemaps.push(value.to_string());
        } else if let Some(value) = strip_directive(trimmed, "disallow:") {
            rules.disallows.push(RobotsRule {
                user_agent: current_agent.clone(),
                path: value.to_string(),
            });
        } else if let Some(value) = strip_directive(trimmed, "allow:") {
            rules.allows.push(RobotsRule {
                user_agent: current_agent.clone(),
                path: value.to_string(),
            });
        }
    }

    rules
}

/// Returns the trimmed value after `prefix` when the line starts with it
fn strip_directive<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(line[prefix.len()..].trim())
    } else {
        None
    }
}

/// Checks whether the site root may be crawled by `user_agent`
///
/// Uses Google's matching semantics, so group selection and
/// longest-match precedence follow what real crawlers do.
///
/// # Arguments
///
/// * `content` - The raw robots.txt body
/// * `site_url` - The site origin the body was served from
/// * `user_agent` - The crawler product token, e.g. `Googlebot`
pub fn root_allowed_for(content: &str, site_url: &str, user_agent: &str) -> bool {
    if content.trim().is_empty() {
        return true;
    }

    let root = format!("{}/", site_url.trim_end_matches('/'));
    let mut matcher = DefaultMatcher::default();
    matcher.one_agent_allowed_by_robots(content, user_agent, &root)
}
