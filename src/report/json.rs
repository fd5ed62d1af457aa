//! JSON report.
//!
//! Machine-readable output for scripts and render-farm hooks.

use serde::Serialize;
use std::io::Write;

use super::{Report, ReportFormatter};
use crate::sequence::SequenceKey;

/// Formats a report as pretty-printed JSON.
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    folder: String,
    checked_at: String,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extension: Option<&'a str>,
    padding: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_frame: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_frame: Option<u64>,
    frames_found: usize,
    frames_expected: u64,
    completeness: f64,
    missing_count: u64,
    range_too_large: bool,
    missing: &'a [u64],
    missing_blocks: Vec<String>,
    unrecognized: &'a [String],
    ambiguous_with: &'a [SequenceKey],
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let result = &report.result;
        let output = JsonReport {
            folder: report.folder.display().to_string(),
            checked_at: report.checked_at.to_rfc3339(),
            found: !result.is_empty(),
            pattern: result.pattern(),
            prefix: result.prefix(),
            extension: result.extension(),
            padding: result.padding(),
            first_frame: result.min_frame(),
            last_frame: result.max_frame(),
            frames_found: result.frame_count(),
            frames_expected: result.expected_count(),
            completeness: (result.completeness() * 100.0).round() / 100.0,
            missing_count: result.missing_count(),
            range_too_large: result.is_range_too_large(),
            missing: result.missing_frames(),
            missing_blocks: result
                .missing_blocks()
                .iter()
                .map(|b| b.format(result.padding()))
                .collect(),
            unrecognized: result.unrecognized(),
            ambiguous_with: result.ambiguous_with(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
