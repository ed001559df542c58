//! robots.txt check

use crate::checks::{CheckResult, CheckStatus, Findings};
use crate::extract::{parse_robots_txt, root_allowed_for};
use crate::fetch::{FetchError, FetchedPage, Fetcher};

/// Crawlers whose access to the homepage is verified individually
const MAJOR_CRAWLERS: [&str; 2] = ["Googlebot", "Bingbot"];

pub(crate) async fn run(fetcher: &Fetcher, site_url: &str) -> Result<CheckResult, FetchError> {
    let url = format!("{}/robots.txt", site_url);
    let page = fetcher.fetch(&url).await?;
    Ok(evaluate(&page, site_url))
}

/// Classifies a robots.txt response
pub fn evaluate(page: &FetchedPage, site_url: &str) -> CheckResult {
    let mut findings = Findings::new();

    if !page.is_ok() {
        return findings.fail(format!(
            "robots.txt not found or not accessible (Status: {})",
            page.status_code
        ));
    }

    findings.pass("robots.txt is accessible");

    let rules = parse_robots_txt(&page.body);

    if rules.sitemaps.is_empty() {
        findings.warn("No sitemap reference found in robots.txt");
    } else {
        findings.pass(format!(
            "Found {} sitemap reference(s)",
            rules.sitemaps.len()
        ));
    }

    if rules.blocks_all_crawlers() {
        findings.issue("All crawlers are blocked (Disallow: /)");
        return findings.finish(CheckStatus::Failed);
    }

    for agent in MAJOR_CRAWLERS {
        if !root_allowed_for(&page.body, site_url, agent) {
            findings.warn(format!("Homepage is disallowed for {}", agent));
        }
    }

    findings.finish(CheckStatus::Passed)
}
