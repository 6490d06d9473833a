//! Error types for rust-sepacheck

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while validating a SEPA file
///
/// Every variant renders to the message carried by
/// [`ValidationResult::Invalid`](crate::ValidationResult::Invalid).
#[derive(Error, Debug)]
pub enum SepaError {
    #[error("Please provide XML content to validate")]
    EmptyInput,

    #[error("XML format error: {message}")]
    Parse { message: String },

    #[error("{message}")]
    NotSepa { message: String },

    #[error("{}", .errors.join("\n"))]
    Structural { errors: Vec<String> },

    #[error("XSD validation error: unable to load XSD schema from {url}: {message}")]
    SchemaLoad { url: String, message: String },

    #[error("XSD validation error: {message}")]
    SchemaEngine { message: String },

    #[error("XSD validation errors:\n{}", .errors.join("\n"))]
    SchemaViolations { errors: Vec<String> },

    #[error("Failed to read SEPA file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SepaError {
    /// True for failures raised by the optional schema stage.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            SepaError::SchemaLoad { .. }
                | SepaError::SchemaEngine { .. }
                | SepaError::SchemaViolations { .. }
        )
    }
}

impl From<roxmltree::Error> for SepaError {
    fn from(err: roxmltree::Error) -> Self {
        SepaError::Parse {
            message: err.to_string(),
        }
    }
}
