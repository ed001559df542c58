//! Configuration module for seo-audit
//!
//! This module holds the audit settings assembled from the command line and
//! validates them before any network access happens.
//!
//! # Example
//!
//! ```
//! use seo_audit::config::AuditConfig;
//!
//! let config = AuditConfig::new("https://example.com/").validated().unwrap();
//! assert_eq!(config.site_url, "https://example.com");
//! ```

mod types;
mod validation;

// Re-export types
pub use types::{AuditConfig, OutputFormat, DEFAULT_SITE_URL, DEFAULT_TIMEOUT_SECS};

pub use validation::validate;
