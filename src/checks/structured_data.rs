//! Structured data (JSON-LD) check

use crate::checks::{fetch_homepage, require_homepage, CheckResult, CheckStatus, Findings};
use crate::extract::{extract_structured_data, is_organization_type, schema_types};
use crate::fetch::{FetchError, FetchedPage, Fetcher};

pub(crate) async fn run(fetcher: &Fetcher, site_url: &str) -> Result<CheckResult, FetchError> {
    let page = fetch_homepage(fetcher, site_url).await?;
    Ok(evaluate(&page))
}

/// Classifies the homepage's JSON-LD blocks
///
/// Status is `warning` when no valid block exists and `passed` otherwise,
/// whether or not an Organization node is present.
pub fn evaluate(page: &FetchedPage) -> CheckResult {
    if let Err(failed) = require_homepage(page) {
        return failed;
    }

    let blocks = extract_structured_data(&page.body);
    let mut findings = Findings::new();

    if blocks.is_empty() {
        findings.warn("No structured data (JSON-LD) found");
        return findings.finish(CheckStatus::Warning);
    }

    findings.pass(format!(
        "Found {} structured data block(s)",
        blocks.len()
    ));

    let types = schema_types(&blocks);
    if !types.is_empty() {
        findings.pass(format!("Schema types found: {}", types.join(", ")));
    }

    if types.iter().any(|t| is_organization_type(t)) {
        findings.pass("Organization schema found");
    } else {
        findings.warn("Organization schema not found (recommended for SEO)");
    }

    findings.finish(CheckStatus::Passed)
}
