//! Models module
//!
//! Defines the table model produced by SQL import and consumed by the
//! code exporters, plus the enumeration of supported target languages.

pub mod enums;
pub mod table;

pub use enums::TargetLanguage;
pub use table::{ColumnSchema, TableSchema};
