//! Audit coordinator - concurrent check orchestration

use crate::checks::{run_check, CheckName};
use crate::config::AuditConfig;
use crate::fetch::Fetcher;
use crate::report::AuditReport;
use crate::AuditError;
use std::time::Instant;
use tokio::task::JoinSet;

/// Owns the fetcher and settings for one audit run
pub struct Coordinator {
    config: AuditConfig,
    fetcher: Fetcher,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The audit configuration; validated here
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(AuditError)` - Invalid configuration or HTTP client setup failure
    pub fn new(config: AuditConfig) -> Result<Self, AuditError> {
        let config = config.validated()?;
        let fetcher = Fetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }

    /// The validated configuration
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Runs every check and returns the finalized report
    ///
    /// Each check is spawned as its own task and writes only its own slot.
    /// The report is scored once all tasks have settled. A task that panics
    /// aborts the run with an orchestration error.
    pub async fn run(&self) -> Result<AuditReport, AuditError> {
        let site_url = self.config.site_url.clone();
        tracing::info!("Starting SEO audit of {}", site_url);

        let start_time = Instant::now();
        let mut report = AuditReport::new(site_url.clone());
        let mut tasks = JoinSet::new();

        for name in CheckName::ALL {
            let fetcher = self.fetcher.clone();
            let site_url = site_url.clone();
            tasks.spawn(async move { (name, run_check(name, &fetcher, &site_url).await) });
        }

        while let Some(joined) = tasks.join_next().await {
            let (name, result) = joined.map_err(|e| {
                AuditError::Orchestration(format!("check task did not complete: {}", e))
            })?;
            report.record(name, result);
        }

        let report = report.finalize();

        tracing::info!(
            "Audit completed in {:.2}s: score {}/100, {} issue(s), {} warning(s)",
            start_time.elapsed().as_secs_f64(),
            report.score,
            report.total_issues,
            report.total_warnings
        );

        Ok(report)
    }
}
