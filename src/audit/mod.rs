//! Audit orchestration
//!
//! Runs the six checks concurrently, waits for all of them to settle and
//! produces the scored report.

mod coordinator;

pub use coordinator::Coordinator;

use crate::config::AuditConfig;
use crate::report::AuditReport;
use crate::AuditError;

/// Runs a complete audit
///
/// This is the main entry point for auditing a site. It will:
/// 1. Validate the configuration
/// 2. Build the HTTP fetcher
/// 3. Run every check as its own task
/// 4. Merge the results and compute the score
///
/// # Arguments
///
/// * `config` - The audit configuration
///
/// # Returns
///
/// * `Ok(AuditReport)` - The finalized report, whatever the checks found
/// * `Err(AuditError)` - Invalid configuration or a failure outside the checks
pub async fn run_audit(config: &AuditConfig) -> Result<AuditReport, AuditError> {
    Coordinator::new(config.clone())?.run().await
}
