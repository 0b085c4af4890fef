//! Error types for loading projects and configuration.
//!
//! The planning computations themselves never fail; only the edges that touch
//! the file system or parse external JSON return these errors.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for all fallible planwise operations.
#[derive(Error, Debug)]
pub enum PlanwiseError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
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
    pub fn with_reason(self, reason: impl Into<String>) -> PlanwiseError {
        PlanwiseError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanwiseError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps an I/O error with the path it happened at.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlanwiseError::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to PlanwiseError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| PlanwiseError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for planwise operations
pub type Result<T> = std::result::Result<T, PlanwiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = PlanwiseError::invalid_input("parentType").with_reason("unknown value");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'parentType': unknown value"
        );
    }

    #[test]
    fn test_with_context_wraps_as_configuration() {
        let raw: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = raw.with_context("reading config").unwrap_err();
        assert!(matches!(err, PlanwiseError::Configuration { .. }));
        assert!(err.to_string().contains("reading config: missing"));
    }
}
