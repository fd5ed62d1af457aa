//! Configuration validation rules.

use crate::config::schema::FramecheckConfig;
use crate::error::{FramecheckError, Result};
use crate::report::coverage::MAX_COLUMNS;

/// Longest accepted watch interval, one day.
pub const MAX_WATCH_INTERVAL: u64 = 86_400;

/// Collect every problem with a configuration.
///
/// All problems are reported at once so they can be fixed together.
pub fn validate_config(config: &FramecheckConfig) -> Vec<String> {
    let mut problems = Vec::new();

    if config.watch_interval == 0 {
        problems.push("watch_interval must be at least 1 second".to_string());
    } else if config.watch_interval > MAX_WATCH_INTERVAL {
        problems.push(format!(
            "watch_interval must be at most {} seconds",
            MAX_WATCH_INTERVAL
        ));
    }

    if config.map_columns == 0 {
        problems.push("map_columns must be at least 1".to_string());
    } else if config.map_columns > MAX_COLUMNS {
        problems.push(format!("map_columns must be at most {}", MAX_COLUMNS));
    }

    for format in &config.formats {
        if format.trim().is_empty() {
            problems.push("formats must not contain empty entries".to_string());
        } else if format.contains(char::is_whitespace) || format.contains('.') {
            problems.push(format!(
                "format '{}' should be a bare extension such as 'exr'",
                format
            ));
        }
    }

    problems
}

/// Validate a configuration, failing on the first report of problems.
pub fn validate(config: &FramecheckConfig) -> Result<()> {
    let problems = validate_config(config);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(FramecheckError::ConfigValidationError {
            message: problems.join("; "),
        })
    }
}
