//! TypeScript exporter for generating interfaces from table schemas.
//!
//! Nullable columns become optional properties (`name?: type`); the mapped
//! type name itself never changes.

use super::CodeExporter;
use crate::mapping;
use crate::models::{TableSchema, TargetLanguage};
use crate::validation::input::is_plain_identifier;

/// Exporter for TypeScript interfaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptExporter;

impl TypeScriptExporter {
    pub fn new() -> Self {
        Self
    }

    /// Property key: bare when it is a plain identifier, quoted otherwise
    fn property_key(name: &str) -> String {
        if is_plain_identifier(name) {
            name.to_string()
        } else {
            format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
        }
    }
}

impl CodeExporter for TypeScriptExporter {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::TypeScript
    }

    fn export_table(&self, table: &TableSchema) -> String {
        let mut code = format!("export interface {} {{\n", self.type_name(table));

        for column in &table.columns {
            let marker = if column.nullable { "?" } else { "" };
            code.push_str(&format!(
                "  {}{}: {};\n",
                Self::property_key(&column.name),
                marker,
                mapping::map_type(&column.sql_type, column.nullable, TargetLanguage::TypeScript)
            ));
        }

        code.push_str("}\n");
        code
    }
}
