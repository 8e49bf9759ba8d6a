//! Error types for the CLI.

use std::path::PathBuf;

use tafqit_engine::TafqitError;
use thiserror::Error;

/// Main error type for the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The engine rejected a number or option.
    #[error(transparent)]
    Tafqit(#[from] TafqitError),

    /// Failed to read an options file.
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Options file is not valid YAML or has unknown keys.
    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] serde_yaml_ng::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Some batch lines could not be spelled out.
    #[error("{failed} of {total} lines could not be spelled out")]
    BatchFailed { failed: usize, total: usize },
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
