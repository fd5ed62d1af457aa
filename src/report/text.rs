//! Plain-text report.
//!
//! This is the format written to `.txt` exports and printed for piping
//! into a clipboard tool.

use std::io::Write;

use super::{Report, ReportFormatter};

/// Formats a report as plain text.
pub struct TextFormatter {
    /// Maximum number of missing frames listed one by one.
    pub list_limit: usize,
}

impl TextFormatter {
    /// Create a new text formatter.
    pub fn new(list_limit: usize) -> Self {
        Self { list_limit }
    }
}

impl ReportFormatter for TextFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let result = &report.result;

        writeln!(writer, "Render Check Summary")?;
        writeln!(writer)?;
        writeln!(writer, "Folder:        {}", report.folder.display())?;

        if result.is_empty() {
            writeln!(writer, "No frame sequence found")?;
        } else {
            writeln!(writer, "Sequence:      {}", report.sequence_label())?;
            writeln!(writer, "Prefix:        {}", result.prefix().unwrap_or("-"))?;
            writeln!(writer, "Extension:     {}", result.extension().unwrap_or("-"))?;
            writeln!(writer, "Frame range:   {}", report.range_label())?;
            writeln!(
                writer,
                "Frames found:  {} / {} ({:.2}%)",
                result.frame_count(),
                result.expected_count(),
                result.completeness()
            )?;
            writeln!(writer, "Missing:       {}", result.missing_count())?;

            if result.is_complete() {
                writeln!(writer)?;
                writeln!(writer, "All frames complete")?;
            } else {
                writeln!(writer)?;
                writeln!(writer, "Missing blocks:")?;
                for block in result.missing_blocks() {
                    writeln!(writer, "  {}", block.format(result.padding()))?;
                }
                writeln!(writer)?;
                writeln!(writer, "Missing list:  {}", report.missing_list(self.list_limit))?;
            }
        }

        if result.is_ambiguous() {
            let others: Vec<String> = result.ambiguous_with().iter().map(|k| k.to_string()).collect();
            writeln!(writer, "Also matched:  {} (same frame count)", others.join(", "))?;
        }
        if !result.unrecognized().is_empty() {
            writeln!(writer, "Ignored files: {}", result.unrecognized().len())?;
        }

        writeln!(writer, "Checked:       {}", report.checked_at_label())?;
        Ok(())
    }
}
