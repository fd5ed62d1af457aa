//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use framecheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_field("Missing", "3");
//! ui.success("Done");
//!
//! assert_eq!(ui.field("Missing"), Some("3"));
//! assert!(ui.has_success("Done"));
//! ```

use crate::report::CoverageMap;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Everything is captured regardless of the output mode so that tests can
/// check what a command asked to show; commands that skip output in quiet
/// mode do so themselves.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    raw: Vec<String>,
    headers: Vec<String>,
    fields: Vec<(String, String)>,
    hints: Vec<String>,
    coverage: Vec<Vec<String>>,
    spinners: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Machine-readable output, one entry per `raw` call.
    pub fn raw_output(&self) -> &[String] {
        &self.raw
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Rendered coverage maps, one list of lines per map.
    pub fn coverage_maps(&self) -> &[Vec<String>] {
        &self.coverage
    }

    /// Messages each spinner was started with.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Value of the last field shown with this key.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    /// Clear everything captured so far.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.raw.clear();
        self.headers.clear();
        self.fields.clear();
        self.hints.clear();
        self.coverage.clear();
        self.spinners.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn raw(&mut self, text: &str) {
        self.raw.push(text.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_field(&mut self, key: &str, value: &str) {
        self.fields.push((key.to_string(), value.to_string()));
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_coverage(&mut self, map: &CoverageMap) {
        self.coverage.push(map.render_lines());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Mock spinner that captures its messages.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
}

/// How a mock spinner ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
    Cleared,
}

impl MockSpinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Error);
    }

    fn clear(&mut self) {
        self.status = Some(SpinnerStatus::Cleared);
    }
}
