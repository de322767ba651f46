//! Error types for the banner tool.
//!
//! Per-file banner failures never show up here: they are collected into the
//! batch summary. These errors abort a whole run.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// ROM folder does not exist or is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Report directory does not exist or is not a directory
    #[error("Report directory not found: {}", .0.display())]
    ReportDirMissing(PathBuf),
}

/// Report serialization errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing the XML document failed
    #[error("Report I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the report file failed
    #[error("Failed to write report {}: {source}", path.display())]
    WriteFailed {
        /// Report path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Report error
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Listing the ROM folder failed
    #[error("Failed to scan {}: {source}", path.display())]
    Scan {
        /// Folder being scanned
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Regex compilation failed
    #[error("Invalid filename pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Terminal prompt or output failed
    #[error("Terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),
}
