//! HTML report.
//!
//! A standalone page with the text report and a coloured coverage strip.

use std::io::Write;

use super::coverage::CoverageMap;
use super::text::TextFormatter;
use super::{Report, ReportFormatter, ReportOptions};

const STYLE: &str = "body{background:#111;color:#eee;font-family:Segoe UI,Arial,sans-serif}\
pre{white-space:pre-wrap}\
.map{display:grid;gap:1px;margin-top:8px}\
.map span{height:10px}\
.p{background:#2ecc71}.m{background:#e74c3c}";

/// Formats a report as a standalone HTML page.
pub struct HtmlFormatter {
    options: ReportOptions,
}

impl HtmlFormatter {
    /// Create a new HTML formatter.
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }
}

/// Escape text for use inside HTML elements and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl ReportFormatter for HtmlFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let mut text = Vec::new();
        TextFormatter::new(self.options.missing_list_limit).format(report, &mut text)?;
        let text = String::from_utf8_lossy(&text);

        writeln!(writer, "<!doctype html>")?;
        writeln!(writer, "<html><head><meta charset=\"utf-8\">")?;
        writeln!(writer, "<title>Frame Check Report</title>")?;
        writeln!(writer, "<style>{}</style></head>", STYLE)?;
        writeln!(writer, "<body><h2>Frame Check Report</h2>")?;
        writeln!(writer, "<h4>{}</h4>", report.checked_at.to_rfc3339())?;
        writeln!(writer, "<pre>{}</pre>", escape_html(&text))?;

        if let Some(map) = CoverageMap::build(&report.result, self.options.map_columns) {
            writeln!(writer, "<h3>Coverage</h3>")?;
            writeln!(writer, "<p>{}</p>", escape_html(&map.legend()))?;
            writeln!(
                writer,
                "<div class=\"map\" style=\"grid-template-columns:repeat({},1fr)\">",
                map.columns()
            )?;
            for (i, &present) in map.cells().iter().enumerate() {
                let frames = map.cell_frames(i);
                writeln!(
                    writer,
                    "<span class=\"{}\" title=\"{}-{}\"></span>",
                    if present { "p" } else { "m" },
                    frames.start(),
                    frames.end()
                )?;
            }
            writeln!(writer, "</div>")?;
        }

        writeln!(writer, "</body></html>")
    }
}
