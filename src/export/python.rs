//! Python exporter for generating dataclasses from table schemas.

use std::collections::{BTreeMap, BTreeSet};

use super::{CodeExporter, collect_imports};
use crate::mapping;
use crate::models::{TableSchema, TargetLanguage};
use crate::validation::input::sanitize_identifier;

/// Exporter for Python `@dataclass` classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonExporter;

impl PythonExporter {
    pub fn new() -> Self {
        Self
    }

    /// `from module import a, b` lines, grouped by module and sorted
    fn import_lines(table: &TableSchema) -> Vec<String> {
        let mut imports = collect_imports(table, TargetLanguage::Python);
        imports.insert("dataclasses.dataclass");
        if table.has_nullable_columns() {
            imports.insert("typing.Optional");
        }

        let mut by_module: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for import in imports {
            if let Some((module, name)) = import.rsplit_once('.') {
                by_module.entry(module).or_default().insert(name);
            }
        }

        by_module
            .into_iter()
            .map(|(module, names)| {
                let names: Vec<&str> = names.into_iter().collect();
                format!("from {} import {}", module, names.join(", "))
            })
            .collect()
    }
}

impl CodeExporter for PythonExporter {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Python
    }

    fn export_table(&self, table: &TableSchema) -> String {
        let mut code = String::new();

        for line in Self::import_lines(table) {
            code.push_str(&line);
            code.push('\n');
        }

        code.push_str("\n\n@dataclass\n");
        code.push_str(&format!("class {}:\n", self.type_name(table)));

        if table.columns.is_empty() {
            code.push_str("    pass\n");
        }

        for column in &table.columns {
            code.push_str(&format!(
                "    {}: {}\n",
                sanitize_identifier(&column.name, TargetLanguage::Python),
                mapping::map_type(&column.sql_type, column.nullable, TargetLanguage::Python)
            ));
        }

        code
    }
}
