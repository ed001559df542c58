//! seo-audit main entry point
//!
//! This is the command-line interface for the seo-audit site auditor.

use anyhow::Context;
use clap::Parser;
use seo_audit::config::{AuditConfig, OutputFormat, DEFAULT_SITE_URL, DEFAULT_TIMEOUT_SECS};
use seo_audit::report::write_report;
use seo_audit::run_audit;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// seo-audit: on-page SEO health check for a live site
///
/// Probes robots.txt, sitemaps, meta tags, structured data, response
/// headers and basic accessibility markers, then prints a scored report.
/// Exits with status 1 when any issue is found.
#[derive(Parser, Debug)]
#[command(name = "seo-audit")]
#[command(version)]
#[command(about = "On-page SEO health check for a live site", long_about = None)]
struct Cli {
    /// Origin of the site to audit
    #[arg(long, value_name = "SITE_URL", default_value = DEFAULT_SITE_URL)]
    url: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    output: OutputFormat,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// User-Agent header to send
    #[arg(long)]
    user_agent: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn audit_config(&self) -> AuditConfig {
        let mut config = AuditConfig::new(self.url.clone());
        config.output = self.output;
        config.timeout_secs = self.timeout;
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(&cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("Audit failed: {:#}", e);
            eprintln!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the audit and prints the report, returning the exit code
async fn run(cli: &Cli) -> anyhow::Result<u8> {
    let config = cli.audit_config();

    let report = run_audit(&config)
        .await
        .with_context(|| format!("could not audit {}", config.site_url))?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_report(&report, config.output, &mut handle).context("could not write report")?;

    Ok(report.exit_code())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the report.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seo_audit=info,warn"),
            1 => EnvFilter::new("seo_audit=debug,info"),
            2 => EnvFilter::new("seo_audit=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
