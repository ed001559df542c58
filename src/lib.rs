//! seo-audit: an on-page SEO/AEO health auditor
//!
//! This crate probes a live website over HTTP and produces a scored report
//! covering robots.txt, sitemaps, meta tags, structured data, response
//! headers and basic accessibility markers.

pub mod audit;
pub mod checks;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod report;

use thiserror::Error;

/// Main error type for audit operations
///
/// Per-check failures never surface here; they are recorded in the
/// report. Anything returned as an `AuditError` is fatal for the run.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Audit task failed: {0}")]
    Orchestration(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use audit::run_audit;
pub use checks::{CheckName, CheckResult, CheckStatus};
pub use config::{AuditConfig, OutputFormat};
pub use fetch::{FetchedPage, Fetcher};
pub use report::AuditReport;
