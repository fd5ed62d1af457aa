//! Configuration file discovery and loading.
//!
//! Settings are layered, later layers overriding earlier ones:
//! 1. Built-in defaults
//! 2. User global config (`~/.framecheck/config.yml`)
//! 3. Folder config (`<scanned folder>/.framecheck.yml`)
//! 4. An explicit `--config` file

use crate::config::merger::merge_layers;
use crate::config::schema::FramecheckConfig;
use crate::config::validator::validate;
use crate::error::{FramecheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-folder settings file.
pub const FOLDER_CONFIG_NAME: &str = ".framecheck.yml";

/// Paths to configuration files in merge order.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.framecheck/config.yml
    pub user_global: Option<PathBuf>,

    /// Settings stored next to the frames: <folder>/.framecheck.yml
    pub folder: Option<PathBuf>,

    /// File given with --config. Must exist.
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for a scanned folder.
    pub fn discover(folder: &Path, explicit: Option<&Path>) -> Self {
        Self::discover_with_home(folder, dirs::home_dir().as_deref(), explicit)
    }

    /// Discover config files using a specific home directory.
    pub fn discover_with_home(folder: &Path, home: Option<&Path>, explicit: Option<&Path>) -> Self {
        Self {
            user_global: home
                .map(|h| h.join(".framecheck").join("config.yml"))
                .filter(|p| p.is_file()),
            folder: Some(folder.join(FOLDER_CONFIG_NAME)).filter(|p| p.is_file()),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    /// All config paths that take part in the merge, in order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.folder, &self.explicit]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Load a config file as a raw YAML value (for merging).
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` if the YAML is invalid.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FramecheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FramecheckError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| FramecheckError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load, merge and validate the configuration for the given paths.
///
/// With no files at all, the defaults are returned.
pub fn load_config(paths: &ConfigPaths) -> Result<FramecheckConfig> {
    let mut layers = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config layer {}", path.display());
        layers.push(load_config_value(path)?);
    }

    let merged = merge_layers(layers);
    let config: FramecheckConfig = serde_yaml::from_value(merged).map_err(|e| {
        FramecheckError::ConfigParseError {
            path: paths
                .all_existing()
                .last()
                .map(|p| p.to_path_buf())
                .unwrap_or_default(),
            message: format!("Failed to parse merged config: {}", e),
        }
    })?;

    validate(&config)?;
    Ok(config)
}

/// Discover and load the configuration for a scanned folder.
pub fn load_merged_config(folder: &Path, explicit: Option<&Path>) -> Result<FramecheckConfig> {
    load_config(&ConfigPaths::discover(folder, explicit))
}
