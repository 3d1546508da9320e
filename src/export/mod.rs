//! Export functionality
//!
//! Provides one exporter per target language, each turning a
//! [`TableSchema`] into the source text of a data object:
//! - C# (class with auto-properties)
//! - Java (class with private fields and accessors)
//! - TypeScript (exported interface)
//! - Python (dataclass)
//!
//! Exporters are stateless between calls and emit columns in table order.

pub mod csharp;
pub mod java;
pub mod python;
pub mod typescript;

use std::collections::BTreeSet;

use crate::mapping;
use crate::models::{TableSchema, TargetLanguage};
use crate::validation::input::sanitize_identifier;

/// Code generation for one target language
pub trait CodeExporter {
    /// Language this exporter writes
    fn language(&self) -> TargetLanguage;

    /// Generate the data object source for a table
    fn export_table(&self, table: &TableSchema) -> String;

    /// Name of the generated class/interface (also used as the file stem)
    fn type_name(&self, table: &TableSchema) -> String {
        sanitize_identifier(&table.name, self.language())
    }
}

/// Imports required by the mapped column types of `table`, sorted and deduplicated
pub(crate) fn collect_imports(table: &TableSchema, language: TargetLanguage) -> BTreeSet<&'static str> {
    table
        .columns
        .iter()
        .filter_map(|column| mapping::resolve(&column.sql_type, language).import)
        .collect()
}

// Re-export for convenience
pub use csharp::CSharpExporter;
pub use java::JavaExporter;
pub use python::PythonExporter;
pub use typescript::TypeScriptExporter;
