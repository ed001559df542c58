//! Sitemap check

use crate::checks::{CheckResult, CheckStatus, Findings};
use crate::fetch::{FetchedPage, Fetcher};

/// Locations probed in order, relative to the site origin
pub const SITEMAP_CANDIDATES: [&str; 3] = ["sitemap-index.xml", "sitemap.xml", "sitemap-0.xml"];

/// Probes the candidate locations one at a time
///
/// A later candidate is only tried once the previous one is known to be
/// absent; transport errors on a candidate count as absent.
pub(crate) async fn run(fetcher: &Fetcher, site_url: &str) -> CheckResult {
    for candidate in SITEMAP_CANDIDATES {
        let url = format!("{}/{}", site_url, candidate);
        match fetcher.fetch(&url).await {
            Ok(page) if page.is_ok() => return evaluate(Some((url.as_str(), &page))),
            Ok(page) => {
                tracing::debug!("No sitemap at {} (Status: {})", url, page.status_code);
            }
            Err(e) => {
                tracing::debug!("No sitemap at {}: {}", url, e);
            }
        }
    }

    evaluate(None)
}

/// Classifies the first sitemap found, if any
///
/// # Arguments
///
/// * `found` - The URL and 200 response of the first reachable candidate
pub fn evaluate(found: Option<(&str, &FetchedPage)>) -> CheckResult {
    let mut findings = Findings::new();

    let Some((url, page)) = found else {
        return findings.fail("No sitemap found at common locations");
    };

    findings.pass(format!("Sitemap found at {}", url));

    if page.body.contains("<urlset") || page.body.contains("<sitemapindex") {
        findings.pass("Sitemap appears to be valid XML");

        let url_count = page.body.matches("<url>").count();
        if url_count > 0 {
            findings.pass(format!("Found {} URL(s) in sitemap", url_count));
        } else {
            findings.warn("Sitemap exists but contains no URLs");
        }
    } else {
        findings.issue("Sitemap does not appear to be valid XML");
    }

    findings.finish(CheckStatus::Passed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::page;

    const URL: &str = "https://example.com/sitemap.xml";

    #[test]
    fn test_urlset_with_urls() {
        let body = format!(
            "<?xml version=\"1.0\"?><urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">{}</urlset>",
            "<url><loc>https://example.com/</loc></url>".repeat(5)
        );
        let result = evaluate(Some((URL, &page(&body))));
        assert_eq!(result.status, CheckStatus::Passed);
        assert!(result.passed.contains(&"Found 5 URL(s) in sitemap".to_string()));
        assert_eq!(result.passed[0], format!("Sitemap found at {}", URL));
        assert!(result.issues.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_sitemap_index_without_url_entries() {
        let body = "<sitemapindex><sitemap><loc>https://example.com/sitemap-0.xml</loc></sitemap></sitemapindex>";
        let result = evaluate(Some((URL, &page(body))));
        assert_eq!(result.status, CheckStatus::Passed);
        assert_eq!(result.warnings, vec!["Sitemap exists but contains no URLs"]);
    }

    #[test]
    fn test_not_xml() {
        let result = evaluate(Some((URL, &page("<html>not a sitemap</html>"))));
        assert_eq!(result.status, CheckStatus::Passed);
        assert_eq!(result.issues, vec!["Sitemap does not appear to be valid XML"]);
        assert_eq!(result.passed.len(), 1);
    }

    #[test]
    fn test_nothing_found() {
        let result = evaluate(None);
        assert_eq!(result.status, CheckStatus::Failed);
        assert_eq!(result.issues, vec!["No sitemap found at common locations"]);
    }
}
