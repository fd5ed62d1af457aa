//! Error types for framecheck operations.
//!
//! This module defines [`FramecheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FramecheckError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `FramecheckError::Other`) for unexpected errors
//! - "No frames found" and ambiguous sequences are results, not errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for framecheck operations.
#[derive(Debug, Error)]
pub enum FramecheckError {
    /// The scanned folder does not exist or cannot be listed.
    #[error("Cannot read directory {path}: {message}")]
    DirectoryUnreadable { path: PathBuf, message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Writing a report file failed.
    #[error("Failed to export report to {path}: {message}")]
    ExportFailed { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for framecheck operations.
pub type Result<T> = std::result::Result<T, FramecheckError>;
