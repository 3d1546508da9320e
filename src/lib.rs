//! DDL Codegen - turn SQL `CREATE TABLE` definitions into data objects
//!
//! Provides:
//! - SQL import (parsing via `sqlparser`, table extraction)
//! - Type mapping from SQL types to C#, Java, TypeScript and Python types
//! - Code export (one exporter per target language)
//! - Conversion orchestration with a transport-friendly request/response contract

pub mod convert;
pub mod export;
pub mod import;
pub mod mapping;
pub mod models;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use convert::{
    ConversionConfig, ConversionError, ConversionRequest, ConversionResponse, ConversionResult,
    SchemaConverter, convert,
};
pub use export::{CSharpExporter, CodeExporter, JavaExporter, PythonExporter, TypeScriptExporter};
pub use import::{ImportError, SQLImporter, extract_tables};
pub use mapping::map_type;
pub use models::{ColumnSchema, TableSchema, TargetLanguage};
pub use validation::{ValidationError, ValidationResult};
