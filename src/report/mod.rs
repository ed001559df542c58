//! Audit report model and rendering
//!
//! This module handles:
//! - The report value with one slot per check
//! - Scoring and totals once every check has settled
//! - Rendering as console text or JSON

mod console;
mod json;
mod score;

pub use console::{format_console_report, write_console_report};
pub use json::{format_json_report, write_json_report};
pub use score::{compute_score, status_weight};

use crate::checks::{CheckName, CheckResult};
use crate::config::OutputFormat;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One result slot per check
///
/// Each check owns exactly one slot, so concurrent checks never touch
/// each other's findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSlots {
    pub robots: CheckResult,
    pub sitemap: CheckResult,
    pub meta_tags: CheckResult,
    pub structured_data: CheckResult,
    pub performance: CheckResult,
    pub accessibility: CheckResult,
}

impl CheckSlots {
    /// Returns the slot for a check
    pub fn get(&self, name: CheckName) -> &CheckResult {
        match name {
            CheckName::Robots => &self.robots,
            CheckName::Sitemap => &self.sitemap,
            CheckName::MetaTags => &self.meta_tags,
            CheckName::StructuredData => &self.structured_data,
            CheckName::Performance => &self.performance,
            CheckName::Accessibility => &self.accessibility,
        }
    }

    fn get_mut(&mut self, name: CheckName) -> &mut CheckResult {
        match name {
            CheckName::Robots => &mut self.robots,
            CheckName::Sitemap => &mut self.sitemap,
            CheckName::MetaTags => &mut self.meta_tags,
            CheckName::StructuredData => &mut self.structured_data,
            CheckName::Performance => &mut self.performance,
            CheckName::Accessibility => &mut self.accessibility,
        }
    }

    /// Iterates over all slots in report order
    pub fn iter(&self) -> impl Iterator<Item = (CheckName, &CheckResult)> + '_ {
        CheckName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }
}

/// The scored outcome of one audit run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Start of the run, RFC 3339 UTC
    pub timestamp: String,

    pub site_url: String,

    pub checks: CheckSlots,

    /// Overall score, 0-100
    pub score: u8,

    pub total_issues: usize,

    pub total_warnings: usize,
}

impl AuditReport {
    /// Creates a report with every check pending
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            site_url: site_url.into(),
            checks: CheckSlots::default(),
            score: 0,
            total_issues: 0,
            total_warnings: 0,
        }
    }

    /// Stores a check's settled result in its slot
    ///
    /// # Returns
    ///
    /// * `true` - The slot was pending and now holds `result`
    /// * `false` - The slot had already settled; `result` was discarded
    pub fn record(&mut self, name: CheckName, result: CheckResult) -> bool {
        let slot = self.checks.get_mut(name);
        if slot.status.is_settled() {
            tracing::warn!("Ignoring second result for {} check", name);
            return false;
        }
        *slot = result;
        true
    }

    /// Computes the score and totals from the settled slots
    pub fn finalize(mut self) -> Self {
        self.score = compute_score(self.checks.iter().map(|(_, result)| result.status));
        self.total_issues = self.checks.iter().map(|(_, r)| r.issues.len()).sum();
        self.total_warnings = self.checks.iter().map(|(_, r)| r.warnings.len()).sum();
        self
    }

    /// Returns true when no check recorded an issue
    pub fn is_clean(&self) -> bool {
        self.total_issues == 0
    }

    /// Process exit code for this report: 0 iff there are no issues
    pub fn exit_code(&self) -> u8 {
        if self.is_clean() {
            0
        } else {
            1
        }
    }
}

/// Writes the report in the requested format
pub fn write_report<W: Write>(
    report: &AuditReport,
    format: OutputFormat,
    writer: &mut W,
) -> crate::Result<()> {
    match format {
        OutputFormat::Console => write_console_report(report, writer)?,
        OutputFormat::Json => write_json_report(report, writer)?,
    }
    Ok(())
}
