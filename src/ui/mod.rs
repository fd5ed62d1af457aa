//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for pipes, CI and other headless use
//! - [`MockUI`] for tests
//! - Spinners, tables and the colour theme
//!
//! # Example
//!
//! ```
//! use framecheck::ui::{create_ui, OutputMode, UserInterface};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Render Check");
//! ui.success("All frames complete");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, SpinnerStatus};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use table::{Align, Table};
pub use terminal::{create_ui, is_ci, TerminalUI};
pub use theme::{should_use_colors, FramecheckTheme};

use crate::report::CoverageMap;

/// Width of the key column in key/value displays.
pub const FIELD_WIDTH: usize = 14;

/// Format a `key: value` line with an aligned value column.
pub fn format_field(key: &str, value: &str) -> String {
    format!("{:<width$} {}", format!("{}:", key), value, width = FIELD_WIDTH)
}

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode (e.g. from configuration).
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Errors are shown in every mode.
    fn error(&mut self, msg: &str);

    /// Write machine-readable output (JSON, exported text) unconditionally.
    fn raw(&mut self, text: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a `key: value` line.
    fn show_field(&mut self, key: &str, value: &str);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Show a present/missing coverage map.
    fn show_coverage(&mut self, map: &CoverageMap);

    /// Start a spinner for a wait or long operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Remove the spinner without leaving a line behind.
    fn clear(&mut self);
}
