//! Error types for the Tafqit engine

use thiserror::Error;

/// Main error type for engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TafqitError {
    /// Input is not a non-negative integer digit string
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Number needs a scale word beyond the largest supported tier
    #[error("Unsupported magnitude: digit group {position} exceeds the largest supported scale (group {max})")]
    UnsupportedMagnitude { position: usize, max: usize },

    /// Option value outside its enumeration
    #[error("Invalid option {option}: '{value}'")]
    InvalidOption { option: String, value: String },
}

impl TafqitError {
    /// Build an `InvalidOption` error for the named option
    pub fn invalid_option(option: &str, value: &str) -> Self {
        TafqitError::InvalidOption {
            option: option.to_string(),
            value: value.to_string(),
        }
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, TafqitError>;
