//! Custom error types for the salary ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A salary, amount or goal that is negative or not a number
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A persisted amount that could not be read back
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TrackerError {
    /// Create an invalid input error for a field that must not be negative
    pub fn negative(field: &str) -> Self {
        Self::InvalidInput(format!("{} cannot be negative", field))
    }

    /// Create an invalid input error for an amount that overflows arithmetic
    pub fn too_large(field: &str) -> Self {
        Self::InvalidInput(format!("{} is too large", field))
    }

    /// Check if this is an invalid input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type TrackerResult<T> = Result<T, TrackerError>;
