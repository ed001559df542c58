//! Basic accessibility check

use crate::checks::{fetch_homepage, require_homepage, CheckResult, CheckStatus, Findings};
use crate::extract::{count_h1_tags, has_html_lang, ImageAltSummary};
use crate::fetch::{FetchError, FetchedPage, Fetcher};

pub(crate) async fn run(fetcher: &Fetcher, site_url: &str) -> Result<CheckResult, FetchError> {
    let page = fetch_homepage(fetcher, site_url).await?;
    Ok(evaluate(&page))
}

/// Classifies language, image alt text and heading markers
///
/// Once the homepage answers 200 the status is always `passed`.
pub fn evaluate(page: &FetchedPage) -> CheckResult {
    if let Err(failed) = require_homepage(page) {
        return failed;
    }

    let html = &page.body;
    let mut findings = Findings::new();

    if has_html_lang(html) {
        findings.pass("HTML lang attribute found");
    } else {
        findings.warn("Missing HTML lang attribute");
    }

    let images = ImageAltSummary::scan(html);
    if images.missing_alt > 0 {
        findings.warn(format!(
            "Found {} image(s) without alt attribute",
            images.missing_alt
        ));
    } else if images.total > 0 {
        findings.pass(format!(
            "All {} image(s) have alt attributes",
            images.total
        ));
    }

    match count_h1_tags(html) {
        0 => findings.warn("No H1 heading found"),
        1 => findings.pass("Single H1 heading found"),
        count => findings.warn(format!(
            "Multiple H1 headings found ({}, recommended: 1)",
            count
        )),
    }

    findings.finish(CheckStatus::Passed)
}
