//! The six audit checks
//!
//! Each check fetches what it needs, runs the extractors over the response
//! and classifies the findings. Checks never return errors: a transport
//! failure becomes an `error` status on that check alone.

mod accessibility;
mod meta_tags;
mod performance;
mod result;
mod robots;
mod sitemap;
mod structured_data;

pub use result::{CheckName, CheckResult, CheckStatus, Findings};

pub use accessibility::evaluate as evaluate_accessibility;
pub use meta_tags::evaluate as evaluate_meta_tags;
pub use performance::evaluate as evaluate_performance;
pub use robots::evaluate as evaluate_robots;
pub use sitemap::{evaluate as evaluate_sitemap, SITEMAP_CANDIDATES};
pub use structured_data::evaluate as evaluate_structured_data;

use crate::fetch::{FetchError, FetchedPage, Fetcher};

/// Runs one check against the site
///
/// # Arguments
///
/// * `name` - Which check to run
/// * `fetcher` - The shared HTTP fetcher
/// * `site_url` - Site origin without a trailing slash
///
/// # Returns
///
/// The settled result. Transport failures are recorded as an issue with
/// status `error`.
pub async fn run_check(name: CheckName, fetcher: &Fetcher, site_url: &str) -> CheckResult {
    tracing::debug!("Running {} check", name);

    let outcome = match name {
        CheckName::Robots => robots::run(fetcher, site_url).await,
        CheckName::Sitemap => Ok(sitemap::run(fetcher, site_url).await),
        CheckName::MetaTags => meta_tags::run(fetcher, site_url).await,
        CheckName::StructuredData => structured_data::run(fetcher, site_url).await,
        CheckName::Performance => performance::run(fetcher, site_url).await,
        CheckName::Accessibility => accessibility::run(fetcher, site_url).await,
    };

    match outcome {
        Ok(result) => {
            tracing::debug!(
                "{} check finished: {:?} ({} issues, {} warnings)",
                name,
                result.status,
                result.issues.len(),
                result.warnings.len()
            );
            result
        }
        Err(e) => {
            tracing::warn!("{} check could not complete: {}", name, e);
            Findings::new().error(format!("Error checking {}: {}", name.label(), e))
        }
    }
}

/// URL of the site's homepage
pub(crate) fn homepage_url(site_url: &str) -> String {
    format!("{}/", site_url)
}

/// Fetches the homepage with the decoded client
pub(crate) async fn fetch_homepage(
    fetcher: &Fetcher,
    site_url: &str,
) -> Result<FetchedPage, FetchError> {
    fetcher.fetch(&homepage_url(site_url)).await
}

/// Fails the check unless the homepage answered 200
pub(crate) fn require_homepage(page: &FetchedPage) -> Result<(), CheckResult> {
    if page.is_ok() {
        Ok(())
    } else {
        Err(Findings::new().fail(format!(
            "Homepage not accessible (Status: {})",
            page.status_code
        )))
    }
}
