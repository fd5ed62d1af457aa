//! Configuration loading, parsing, and validation for framecheck.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layer merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use framecheck::config::{load_config, ConfigPaths};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let folder = TempDir::new().unwrap();
//! fs::write(folder.path().join(".framecheck.yml"), "formats: [exr]").unwrap();
//!
//! let paths = ConfigPaths::discover_with_home(folder.path(), None, None);
//! let config = load_config(&paths).unwrap();
//! assert_eq!(config.formats, vec!["exr".to_string()]);
//! ```

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    load_config, load_config_value, load_merged_config, ConfigPaths, FOLDER_CONFIG_NAME,
};
pub use merger::{merge_into, merge_layers};
pub use schema::{FramecheckConfig, OutputMode};
pub use validator::{validate, validate_config};
