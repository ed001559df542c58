//! Performance and response header check

use crate::checks::{homepage_url, require_homepage, CheckResult, CheckStatus, Findings};
use crate::fetch::{FetchError, FetchedPage, Fetcher};

/// Pages above this many bytes get a size warning
const LARGE_PAGE_BYTES: u64 = 256 * 1024;

const SECURITY_HEADERS: [&str; 4] = [
    "x-content-type-options",
    "x-frame-options",
    "x-xss-protection",
    "strict-transport-security",
];

/// Fetches the homepage without transparent decompression
///
/// The headers must reflect what the server actually sent, so a decoding
/// client that strips `content-encoding` cannot be used here.
pub(crate) async fn run(fetcher: &Fetcher, site_url: &str) -> Result<CheckResult, FetchError> {
    let page = fetcher.fetch_raw(&homepage_url(site_url)).await?;
    Ok(evaluate(&page))
}

/// Classifies compression, size and security headers
///
/// Once the homepage answers 200 the status is always `passed`.
pub fn evaluate(page: &FetchedPage) -> CheckResult {
    if let Err(failed) = require_homepage(page) {
        return failed;
    }

    let mut findings = Findings::new();

    match page.header("content-encoding") {
        Some(encoding) => findings.pass(format!("Content compression enabled ({})", encoding)),
        None => findings.warn("Content compression not detected (gzip/brotli recommended)"),
    }

    let content_length = page
        .header("content-length")
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(0);
    if content_length > 0 {
        let size_kb = format!("{:.2}", content_length as f64 / 1024.0);
        findings.pass(format!("HTML size: {} KB", size_kb));
        if content_length > LARGE_PAGE_BYTES {
            findings.warn(format!(
                "HTML size is large ({} KB, recommended: <256 KB)",
                size_kb
            ));
        }
    }

    for header in SECURITY_HEADERS {
        if page.header(header).is_some() {
            findings.pass(format!("Security header found: {}", header));
        } else {
            findings.warn(format!("Security header missing: {}", header));
        }
    }

    findings.finish(CheckStatus::Passed)
}
