//! Check outcome types
//!
//! A check accumulates its findings in a [`Findings`] value and turns it
//! into a [`CheckResult`] with exactly one final status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six audit categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CheckName {
    Robots,
    Sitemap,
    MetaTags,
    StructuredData,
    Performance,
    Accessibility,
}

impl CheckName {
    /// Every category, in report order
    pub const ALL: [CheckName; 6] = [
        CheckName::Robots,
        CheckName::Sitemap,
        CheckName::MetaTags,
        CheckName::StructuredData,
        CheckName::Performance,
        CheckName::Accessibility,
    ];

    /// Key used in the JSON report
    pub fn key(&self) -> &'static str {
        match self {
            Self::Robots => "robots",
            Self::Sitemap => "sitemap",
            Self::MetaTags => "metaTags",
            Self::StructuredData => "structuredData",
            Self::Performance => "performance",
            Self::Accessibility => "accessibility",
        }
    }

    /// Human-readable category used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Robots => "robots.txt",
            Self::Sitemap => "sitemap",
            Self::MetaTags => "meta tags",
            Self::StructuredData => "structured data",
            Self::Performance => "performance",
            Self::Accessibility => "accessibility",
        }
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Final (or not yet final) state of one check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The check has not reported yet
    #[default]
    Pending,
    Passed,
    Failed,
    Warning,
    /// A transport failure prevented the check from completing
    Error,
}

impl CheckStatus {
    /// Returns true once the check has reported
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Outcome of one check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub status: CheckStatus,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    pub passed: Vec<String>,
}

impl CheckResult {
    /// A result that has not been reported yet
    pub fn pending() -> Self {
        Self::default()
    }
}

/// Findings recorded while a check runs
#[derive(Debug, Default)]
pub struct Findings {
    issues: Vec<String>,
    warnings: Vec<String>,
    passed: Vec<String>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding that fails the check
    pub fn issue(&mut self, message: impl Into<String>) {
        self.issues.push(message.into());
    }

    /// Records a finding that lowers confidence without failing the check
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn pass(&mut self, message: impl Into<String>) {
        self.passed.push(message.into());
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Seals the findings with their final status
    pub fn finish(self, status: CheckStatus) -> CheckResult {
        debug_assert!(status.is_settled(), "a finished check cannot be pending");
        CheckResult {
            status,
            issues: self.issues,
            warnings: self.warnings,
            passed: self.passed,
        }
    }

    /// Records a single issue and fails the check
    pub fn fail(mut self, message: impl Into<String>) -> CheckResult {
        self.issue(message);
        self.finish(CheckStatus::Failed)
    }

    /// Records the error that stopped the check
    pub fn error(mut self, message: impl Into<String>) -> CheckResult {
        self.issue(message);
        self.finish(CheckStatus::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_name_keys() {
        let keys: Vec<&str> = CheckName::ALL.iter().map(CheckName::key).collect();
        assert_eq!(
            keys,
            vec![
                "robots",
                "sitemap",
                "metaTags",
                "structuredData",
                "performance",
                "accessibility"
            ]
        );
    }

    #[test]
    fn test_pending_result() {
        let result = CheckResult::pending();
        assert_eq!(result.status, CheckStatus::Pending);
        assert!(!result.status.is_settled());
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_findings_finish_keeps_order() {
        let mut findings = Findings::new();
        findings.pass("first");
        findings.warn("careful");
        findings.pass("second");
        let result = findings.finish(CheckStatus::Passed);

        assert_eq!(result.status, CheckStatus::Passed);
        assert_eq!(result.passed, vec!["first", "second"]);
        assert_eq!(result.warnings, vec!["careful"]);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_findings_fail() {
        let result = Findings::new().fail("broken");
        assert_eq!(result.status, CheckStatus::Failed);
        assert_eq!(result.issues, vec!["broken"]);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&CheckStatus::Passed).unwrap(), "\"passed\"");
        assert_eq!(serde_json::to_string(&CheckStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&CheckStatus::Error).unwrap(), "\"error\"");
    }
}
