//! CSV report.
//!
//! A two-column `key,value` table. Each missing block gets its own
//! `missing_block` row.

use std::io::Write;

use super::{Report, ReportFormatter};

/// Formats a report as `key,value` CSV.
#[derive(Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    /// Create a new CSV formatter.
    pub fn new() -> Self {
        Self
    }
}

/// Quote a field when it holds a separator, quote or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn row<W: Write>(writer: &mut W, key: &str, value: &str) -> std::io::Result<()> {
    writeln!(writer, "{},{}", escape(key), escape(value))
}

impl ReportFormatter for CsvFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let result = &report.result;
        let optional = |v: Option<u64>| v.map(|n| result.format_frame(n)).unwrap_or_default();

        row(writer, "key", "value")?;
        row(writer, "folder", &report.folder.display().to_string())?;
        row(writer, "sequence", &report.sequence_label())?;
        row(writer, "prefix", result.prefix().unwrap_or(""))?;
        row(writer, "extension", result.extension().unwrap_or(""))?;
        row(writer, "first_frame", &optional(result.min_frame()))?;
        row(writer, "last_frame", &optional(result.max_frame()))?;
        row(writer, "frames_found", &result.frame_count().to_string())?;
        row(writer, "frames_expected", &result.expected_count().to_string())?;
        row(
            writer,
            "completeness",
            &format!("{:.2}", result.completeness()),
        )?;
        row(
            writer,
            "missing_count",
            &result.missing_count().to_string(),
        )?;
        for block in result.missing_blocks() {
            row(writer, "missing_block", &block.format(result.padding()))?;
        }
        row(
            writer,
            "ignored_files",
            &result.unrecognized().len().to_string(),
        )?;
        row(writer, "checked_at", &report.checked_at_label())?;
        Ok(())
    }
}
