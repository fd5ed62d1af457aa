//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::report::CoverageMap;

use super::{
    should_use_colors, FramecheckTheme, NonInteractiveUI, OutputMode, ProgressSpinner,
    SpinnerHandle, UserInterface,
};

/// Terminal UI with colours and spinners.
pub struct TerminalUI {
    term: Term,
    theme: FramecheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            FramecheckTheme::new()
        } else {
            FramecheckTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        Term::stderr().write_line(&line).ok();
    }

    fn raw(&mut self, text: &str) {
        write!(self.term, "{}", text).ok();
        if !text.ends_with('\n') {
            writeln!(self.term).ok();
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_report() {
            writeln!(self.term, "\n{}", self.theme.format_header(title)).ok();
        }
    }

    fn show_field(&mut self, key: &str, value: &str) {
        if self.mode.shows_report() {
            writeln!(self.term, "{}", self.theme.format_field(key, value)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_report() {
            writeln!(self.term, "  {}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn show_coverage(&mut self, map: &CoverageMap) {
        if !self.mode.shows_report() {
            return;
        }
        writeln!(self.term).ok();
        for row in map.rows() {
            writeln!(self.term, "  {}", self.theme.format_coverage_row(row)).ok();
        }
        writeln!(self.term, "  {}", self.theme.dim.apply_to(map.legend())).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Environment variables set by common CI services.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running under a CI service.
pub fn is_ci() -> bool {
    ci_detected(|name| std::env::var_os(name).is_some())
}

fn ci_detected(is_set: impl Fn(&str) -> bool) -> bool {
    CI_VARS.iter().any(|name| is_set(name))
}

/// Create the UI for the current environment.
///
/// A terminal UI when stdout is a TTY and `interactive` is requested,
/// plain line output otherwise.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
