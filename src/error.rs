//! Error types for macsnap operations.
//!
//! This module defines [`MacsnapError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MacsnapError` for failures that need distinct handling
//! - Package manager calls never return errors; they return a
//!   [`BrewOutcome`](crate::brew::BrewOutcome) instead

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for macsnap operations.
#[derive(Debug, Error)]
pub enum MacsnapError {
    /// The report given to `--restore` is not a regular file.
    #[error("File not found at '{}'", path.display())]
    ReportNotFound { path: PathBuf },

    /// The report exists but could not be read.
    #[error("Failed to read report {}: {source}", path.display())]
    ReportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be written.
    #[error("Failed to write report {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An explicitly requested config file does not exist.
    #[error("Configuration not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the config file.
    #[error("Failed to parse config at {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// A program could not be started at all.
    #[error("Failed to start '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The interactive checklist failed or was aborted.
    #[error("Selection prompt failed: {message}")]
    Prompt { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MacsnapError {
    /// Whether a spawn failure means the program is not installed.
    pub fn is_program_missing(&self) -> bool {
        matches!(
            self,
            Self::CommandSpawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Result type alias for macsnap operations.
pub type Result<T> = std::result::Result<T, MacsnapError>;
