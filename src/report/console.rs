//! Console report rendering
//!
//! Produces the human-readable report: a header with the overall score,
//! one section per check, and a fixed recommendations block.

use crate::checks::{CheckResult, CheckStatus};
use crate::report::AuditReport;
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

const RECOMMENDATIONS: [&str; 7] = [
    "1. Fix all critical issues listed above",
    "2. Address warnings to improve SEO score",
    "3. Use external tools for deeper analysis:",
    "   - Google Search Console",
    "   - Screaming Frog SEO Spider",
    "   - Ahrefs Site Audit",
    "   - Google PageSpeed Insights",
];

/// Writes the console report to `writer`
///
/// # Arguments
///
/// * `report` - The finalized audit report
/// * `writer` - Destination, usually stdout
pub fn write_console_report<W: Write>(report: &AuditReport, writer: &mut W) -> io::Result<()> {
    writer.write_all(format_console_report(report).as_bytes())?;
    writer.flush()
}

/// Formats an audit report as console text
pub fn format_console_report(report: &AuditReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{}\n", rule));
    out.push_str("SEO AUDIT REPORT\n");
    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!("Site URL: {}\n", report.site_url));
    out.push_str(&format!("Timestamp: {}\n", report.timestamp));
    out.push_str(&format!("Overall Score: {}/100\n", report.score));
    out.push_str(&format!("Total Issues: {}\n", report.total_issues));
    out.push_str(&format!("Total Warnings: {}\n", report.total_warnings));
    out.push_str(&format!("{}\n\n", rule));

    for (name, result) in report.checks.iter() {
        out.push_str(&format!(
            "\n{} {}\n",
            status_icon(result.status),
            name.key().to_uppercase()
        ));
        out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));
        push_section(&mut out, result);
    }

    out.push_str(&format!("\n{}\n", rule));
    out.push_str("RECOMMENDATIONS\n");
    out.push_str(&format!("{}\n", rule));
    for line in RECOMMENDATIONS {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!("{}\n\n", rule));

    out
}

fn push_section(out: &mut String, result: &CheckResult) {
    let groups = [
        ("✓ Passed:", &result.passed),
        ("⚠ Warnings:", &result.warnings),
        ("✗ Issues:", &result.issues),
    ];

    for (heading, items) in groups {
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{}\n", heading));
        for item in items {
            out.push_str(&format!("  • {}\n", item));
        }
    }
}

fn status_icon(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Passed => "✅",
        CheckStatus::Failed | CheckStatus::Error => "❌",
        CheckStatus::Warning | CheckStatus::Pending => "⚠️",
    }
}
