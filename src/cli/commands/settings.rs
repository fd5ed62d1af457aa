//! Settings loading shared by the commands.

use std::path::Path;

use crate::config::{load_merged_config, FramecheckConfig};
use crate::error::{FramecheckError, Result};
use crate::ui::{OutputMode, UserInterface};

/// Exit code for unusable settings.
pub const CONFIG_ERROR_EXIT: i32 = 2;

/// Load the layered settings for `folder`.
///
/// Returns `Ok(None)` after reporting the problem when a settings file is
/// missing, malformed or invalid; the caller exits with
/// [`CONFIG_ERROR_EXIT`]. The configured output mode is applied unless a
/// CLI flag already changed it.
pub fn load_settings(
    folder: &Path,
    explicit: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> Result<Option<FramecheckConfig>> {
    match load_merged_config(folder, explicit) {
        Ok(config) => {
            if ui.output_mode() == OutputMode::Normal {
                ui.set_output_mode(config.output.into());
            }
            Ok(Some(config))
        }
        Err(
            e @ (FramecheckError::ConfigNotFound { .. }
            | FramecheckError::ConfigParseError { .. }
            | FramecheckError::ConfigValidationError { .. }),
        ) => {
            ui.error(&e.to_string());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
