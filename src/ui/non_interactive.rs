//! Line-oriented UI for pipes, CI logs and `--no-color`.

use crate::report::CoverageMap;

use super::{format_field, OutputMode, SpinnerHandle, UserInterface};

/// UI that writes plain lines without colours or spinners.
///
/// Reports go to stdout. Warnings and errors go to stderr so that piped
/// output only holds the report.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn raw(&mut self, text: &str) {
        if text.ends_with('\n') {
            print!("{}", text);
        } else {
            println!("{}", text);
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_report() {
            println!();
            println!("{}", title);
            println!("{}", "─".repeat(title.chars().count()));
        }
    }

    fn show_field(&mut self, key: &str, value: &str) {
        if self.mode.shows_report() {
            println!("{}", format_field(key, value));
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_report() {
            println!("  {}", hint);
        }
    }

    fn show_coverage(&mut self, map: &CoverageMap) {
        if !self.mode.shows_report() {
            return;
        }
        println!();
        for line in map.render_lines() {
            println!("  {}", line);
        }
        println!("  {}", map.legend());
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(LineSpinner { mode: self.mode })
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that prints only the final outcome.
struct LineSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn clear(&mut self) {}
}
