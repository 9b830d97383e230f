//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Raw amount failed decimal parsing, contained a comma, or was negative
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Transaction rejected by the stricter validation options
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Audit log errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// A ledger lock was poisoned by a panicking writer
    #[error("Lock error: {0}")]
    Lock(String),

    /// Session command could not be parsed
    #[error("Command error: {0}")]
    Command(String),
}

impl TrackerError {
    /// Create an invalid amount error for a raw input string
    pub fn invalid_amount(raw: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAmount(format!("'{}' ({})", raw, reason.into()))
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this is a validation error of either kind
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAmount(_) | Self::InvalidTransaction(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = TrackerError::invalid_amount("12,50", "comma is not a decimal separator");
        assert_eq!(
            err.to_string(),
            "Invalid amount: '12,50' (comma is not a decimal separator)"
        );
        assert!(err.is_invalid_amount());
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_transaction_is_validation() {
        let err = TrackerError::InvalidTransaction("name is empty".into());
        assert!(err.is_validation());
        assert!(!err.is_invalid_amount());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
    }
}
