//! Import functionality
//!
//! Provides parsing of SQL DDL into [`TableSchema`](crate::models::TableSchema)
//! values.

pub mod sql;

/// Error during import
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Unsupported SQL dialect: {0}")]
    UnsupportedDialect(String),
}

// Re-export for convenience
pub use sql::{SQLImporter, extract_tables};
