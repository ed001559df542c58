//! Meta tag check

use crate::checks::{fetch_homepage, require_homepage, CheckResult, CheckStatus, Findings};
use crate::extract::extract_meta_tags;
use crate::fetch::{FetchError, FetchedPage, Fetcher};
use std::ops::RangeInclusive;

/// Recommended title length in characters
const TITLE_LENGTH: RangeInclusive<usize> = 30..=60;

/// Recommended description length in characters
const DESCRIPTION_LENGTH: RangeInclusive<usize> = 120..=160;

pub(crate) async fn run(fetcher: &Fetcher, site_url: &str) -> Result<CheckResult, FetchError> {
    let page = fetch_homepage(fetcher, site_url).await?;
    Ok(evaluate(&page))
}

/// Classifies the homepage's head metadata
pub fn evaluate(page: &FetchedPage) -> CheckResult {
    if let Err(failed) = require_homepage(page) {
        return failed;
    }

    let meta = extract_meta_tags(&page.body);
    let mut findings = Findings::new();

    match &meta.title {
        None => findings.issue("Missing <title> tag"),
        Some(title) => {
            findings.pass("Title tag found");
            check_length(&mut findings, "Title", title, &TITLE_LENGTH);
        }
    }

    match &meta.description {
        None => findings.issue("Missing meta description"),
        Some(description) => {
            findings.pass("Meta description found");
            check_length(&mut findings, "Description", description, &DESCRIPTION_LENGTH);
        }
    }

    let recommended = [
        (&meta.og_title, "Open Graph title", "Missing Open Graph title (og:title)"),
        (
            &meta.og_description,
            "Open Graph description",
            "Missing Open Graph description (og:description)",
        ),
        (&meta.og_image, "Open Graph image", "Missing Open Graph image (og:image)"),
        (&meta.twitter_card, "Twitter Card", "Missing Twitter Card (twitter:card)"),
        (&meta.canonical, "Canonical URL", "Missing canonical URL"),
    ];
    for (value, label, missing) in recommended {
        if value.is_some() {
            findings.pass(format!("{} found", label));
        } else {
            findings.warn(missing);
        }
    }

    if meta.viewport.is_some() {
        findings.pass("Viewport meta tag found");
    } else {
        findings.issue("Missing viewport meta tag (mobile optimization)");
    }

    if meta.charset.is_some() {
        findings.pass("Charset declaration found");
    } else {
        findings.warn("Missing charset declaration");
    }

    let status = if findings.has_issues() {
        CheckStatus::Failed
    } else {
        CheckStatus::Passed
    };
    findings.finish(status)
}

/// Adds an advisory warning when `text` falls outside `range`
fn check_length(findings: &mut Findings, label: &str, text: &str, range: &RangeInclusive<usize>) {
    let length = text.chars().count();
    let advice = format!("recommended: {}-{}", range.start(), range.end());

    if length < *range.start() {
        findings.warn(format!(
            "{} is too short ({} chars, {})",
            label, length, advice
        ));
    } else if length > *range.end() {
        findings.warn(format!(
            "{} is too long ({} chars, {})",
            label, length, advice
        ));
    }
}
