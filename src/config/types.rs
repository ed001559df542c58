use crate::config::validation::validate;
use crate::ConfigError;
use std::fmt;
use std::time::Duration;

/// Site audited when no `--url` is given
pub const DEFAULT_SITE_URL: &str = "https://getplumber.io";

/// Per-request deadline in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Report rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sections on stdout
    #[default]
    Console,
    /// The full report as a JSON document
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Console => write!(f, "console"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Settings for a single audit run
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Origin of the audited site, without a trailing slash once validated
    pub site_url: String,

    /// How the report is rendered
    pub output: OutputFormat,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl AuditConfig {
    /// Creates a configuration for `site_url` with default settings
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            output: OutputFormat::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }

    /// Validates the configuration and normalizes the site URL
    ///
    /// # Returns
    ///
    /// * `Ok(AuditConfig)` - Configuration ready for an audit run
    /// * `Err(ConfigError)` - A setting is out of range or the URL is unusable
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.site_url = self.site_url.trim().trim_end_matches('/').to_string();
        validate(&self)?;
        Ok(self)
    }

    /// The request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_URL)
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
