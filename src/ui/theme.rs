//! Visual theme and styling.

use console::Style;

/// Colours used for terminal output.
#[derive(Debug, Clone)]
pub struct FramecheckTheme {
    /// Success messages and present cells (green).
    pub success: Style,
    /// Warning messages (orange).
    pub warning: Style,
    /// Error messages and missing cells (red bold).
    pub error: Style,
    /// Dim/secondary text.
    pub dim: Style,
    /// Bold text for important values.
    pub highlight: Style,
    /// Headers (cyan bold).
    pub header: Style,
    /// Key labels in key/value displays.
    pub key: Style,
    /// Contextual hints.
    pub hint: Style,
    /// Present cells in a coverage map.
    pub present: Style,
    /// Missing cells in a coverage map.
    pub missing: Style,
}

impl Default for FramecheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl FramecheckTheme {
    /// Create the coloured theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            key: Style::new().bold(),
            hint: Style::new().cyan().dim(),
            present: Style::new().green(),
            missing: Style::new().red(),
        }
    }

    /// Create a theme without colours (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            key: Style::new(),
            hint: Style::new(),
            present: Style::new(),
            missing: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner with an underline.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{}\n{}",
            self.header.apply_to(title),
            self.dim.apply_to("─".repeat(title.chars().count()))
        )
    }

    /// Format a `key: value` line.
    pub fn format_field(&self, key: &str, value: &str) -> String {
        let label = format!("{}:", key);
        format!(
            "{}{} {}",
            self.key.apply_to(&label),
            " ".repeat(super::FIELD_WIDTH.saturating_sub(label.chars().count())),
            value
        )
    }

    /// Colour one row of coverage glyphs.
    pub fn format_coverage_row(&self, row: &[bool]) -> String {
        row.iter()
            .map(|&present| {
                if present {
                    self.present.apply_to(crate::report::coverage::PRESENT).to_string()
                } else {
                    self.missing.apply_to(crate::report::coverage::MISSING).to_string()
                }
            })
            .collect()
    }
}

/// Check if colours should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_status_icons() {
        let theme = FramecheckTheme::plain();
        assert_eq!(theme.format_success("done"), "✓ done");
        assert_eq!(theme.format_warning("careful"), "⚠ careful");
        assert_eq!(theme.format_error("broken"), "✗ broken");
    }

    #[test]
    fn plain_header_is_underlined() {
        let theme = FramecheckTheme::plain();
        assert_eq!(theme.format_header("Check"), "Check\n─────");
    }

    #[test]
    fn plain_field_matches_unstyled_layout() {
        let theme = FramecheckTheme::plain();
        assert_eq!(
            theme.format_field("Missing", "3"),
            super::super::format_field("Missing", "3")
        );
    }

    #[test]
    fn plain_coverage_row() {
        let theme = FramecheckTheme::plain();
        assert_eq!(theme.format_coverage_row(&[true, false, true]), "█░█");
    }

    #[test]
    fn styled_theme_keeps_text() {
        let theme = FramecheckTheme::new();
        assert!(theme.format_success("ok").contains("ok"));
        assert!(theme.format_error("bad").contains("bad"));
    }
}
