//! JSON report rendering

use crate::report::AuditReport;
use std::io::Write;

/// Serializes the full report as pretty-printed JSON
pub fn format_json_report(report: &AuditReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Writes the JSON report to `writer`, followed by a newline
pub fn write_json_report<W: Write>(report: &AuditReport, writer: &mut W) -> crate::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
