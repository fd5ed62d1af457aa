//! Scan reports and export formats.
//!
//! A [`Report`] pairs a [`ScanResult`] with the folder it came from and the
//! time of the check. Formatters write it out as plain text, CSV, JSON or a
//! standalone HTML page.

pub mod coverage;
pub mod csv;
pub mod html;
pub mod json;
pub mod text;

use chrono::{DateTime, Local};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{FramecheckError, Result};
use crate::sequence::ScanResult;

pub use coverage::CoverageMap;
pub use csv::CsvFormatter;
pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Timestamp format used in every report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A scan result with the context it was produced in.
#[derive(Debug, Clone)]
pub struct Report {
    pub folder: PathBuf,
    pub result: ScanResult,
    pub checked_at: DateTime<Local>,
}

impl Report {
    /// Create a report stamped with the current time.
    pub fn new(folder: &Path, result: ScanResult) -> Self {
        Self {
            folder: folder.to_path_buf(),
            result,
            checked_at: Local::now(),
        }
    }

    /// Human label for the detected sequence.
    ///
    /// `shot_###.png` for a detected pattern, `*.png` for a loose scan and
    /// `-` when nothing was found.
    pub fn sequence_label(&self) -> String {
        match (self.result.pattern(), self.result.extension()) {
            (Some(pattern), _) => pattern,
            (None, Some(ext)) => format!("*{}", ext),
            (None, None) => "-".to_string(),
        }
    }

    /// `first - last` frame range, zero-padded.
    pub fn range_label(&self) -> String {
        match self.result.range() {
            Some((min, max)) => format!(
                "{} - {}",
                self.result.format_frame(min),
                self.result.format_frame(max)
            ),
            None => "-".to_string(),
        }
    }

    /// Missing frames joined with `, `, cut off after `limit` entries.
    pub fn missing_list(&self, limit: usize) -> String {
        if self.result.is_range_too_large() {
            return format!(
                "not listed, range too large ... total {}",
                self.result.missing_count()
            );
        }
        format_frame_list(self.result.missing_frames(), self.result.padding(), limit)
    }

    pub fn checked_at_label(&self) -> String {
        self.checked_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Join zero-padded frame numbers with `, `, cut off after `limit` entries.
///
/// ```
/// use framecheck::report::format_frame_list;
///
/// assert_eq!(format_frame_list(&[3, 5, 6], 3, 2), "003, 005 ... total 3");
/// ```
pub fn format_frame_list(frames: &[u64], padding: usize, limit: usize) -> String {
    let shown: Vec<String> = frames
        .iter()
        .take(limit)
        .map(|n| format!("{:0width$}", n, width = padding))
        .collect();
    let mut list = shown.join(", ");
    if frames.len() > limit {
        list.push_str(&format!(" ... total {}", frames.len()));
    }
    list
}

/// Settings shared by the formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Maximum missing frames listed one by one.
    pub missing_list_limit: usize,
    /// Cells per coverage map row.
    pub map_columns: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            missing_list_limit: 200,
            map_columns: 50,
        }
    }
}

/// Export format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Csv,
    Json,
    Html,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!(
                "unknown report format: {} (expected text, csv, json or html)",
                s
            )),
        }
    }
}

impl ReportFormat {
    /// Pick a format from a file extension; unknown extensions get text.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
            .unwrap_or(Self::Text)
    }

    /// Render a report in this format.
    pub fn write<W: Write>(
        &self,
        report: &Report,
        options: &ReportOptions,
        writer: &mut W,
    ) -> std::io::Result<()> {
        match self {
            Self::Text => TextFormatter::new(options.missing_list_limit).format(report, writer),
            Self::Csv => CsvFormatter::new().format(report, writer),
            Self::Json => JsonFormatter::new().format(report, writer),
            Self::Html => HtmlFormatter::new(*options).format(report, writer),
        }
    }

    /// Render a report to a string.
    pub fn render(&self, report: &Report, options: &ReportOptions) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        self.write(report, options, &mut buf).ok();
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Trait for formatting reports.
pub trait ReportFormatter {
    /// Format a report to the given writer.
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;
}

/// Write a report file.
///
/// # Errors
///
/// Returns `ExportFailed` if the file cannot be created or written.
pub fn export_report(
    path: &Path,
    report: &Report,
    format: ReportFormat,
    options: &ReportOptions,
) -> Result<()> {
    let failed = |e: std::io::Error| FramecheckError::ExportFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let file = File::create(path).map_err(failed)?;
    let mut writer = BufWriter::new(file);
    format.write(report, options, &mut writer).map_err(failed)?;
    writer.flush().map_err(failed)?;

    tracing::debug!("Exported {:?} report to {}", format, path.display());
    Ok(())
}
