//! Error types for SQL to code conversion

use thiserror::Error;

use crate::import::ImportError;
use crate::models::TargetLanguage;
use crate::validation::ValidationError;

/// Errors that can occur during a conversion request.
///
/// Every variant renders a human-readable message; there are no structured
/// error codes beyond the variant itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Input rejected before parsing (empty script, unknown SQL dialect)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The SQL parser reported one or more diagnostics
    #[error("SQL parsing failed: {}", .0.join("; "))]
    Parse(Vec<String>),

    /// The script parsed but contains no CREATE TABLE statements
    #[error("No CREATE TABLE statements found in the SQL script")]
    NoTablesFound,

    /// The requested target language is not one of the supported ones
    #[error("Unsupported language: '{0}'. Supported languages: {supported}", supported = TargetLanguage::supported_names())]
    UnsupportedLanguage(String),

    /// Unexpected failure; details are only logged
    #[error("An internal error occurred while converting the SQL script")]
    Internal,
}

impl From<ValidationError> for ConversionError {
    fn from(e: ValidationError) -> Self {
        ConversionError::Validation(e.to_string())
    }
}

impl From<ImportError> for ConversionError {
    fn from(e: ImportError) -> Self {
        match e {
            ImportError::ParseError(message) => ConversionError::Parse(vec![message]),
            ImportError::UnsupportedDialect(_) => ConversionError::Validation(e.to_string()),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
