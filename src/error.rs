//! Custom error types for MoneyFix
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::export::ExportError;
use crate::models::MoneyParseError;

/// The main error type for MoneyFix operations
#[derive(Error, Debug)]
pub enum MoneyFixError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// The terminal stopped working under the TUI
    #[error("TUI error: {0}")]
    Tui(String),
}

impl MoneyFixError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for MoneyFixError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<MoneyParseError> for MoneyFixError {
    fn from(err: MoneyParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for MoneyFix operations
pub type MoneyFixResult<T> = Result<T, MoneyFixError>;
