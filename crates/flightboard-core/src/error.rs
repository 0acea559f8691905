//! Error types for the flight board library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for all board operations.
#[derive(Error, Debug)]
pub enum BoardError {
    /// A flight record or configuration value failed validation
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration could not be assembled
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BoardError {
        BoardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BoardError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error from any displayable message.
    pub fn configuration(message: impl fmt::Display) -> Self {
        Self::Configuration {
            message: message.to_string(),
        }
    }
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = BoardError::invalid_input("time").with_reason("expected HH:MM");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'time': expected HH:MM"
        );
    }
}
