//! Java exporter for generating bean-style classes from table schemas.

use super::{CodeExporter, collect_imports};
use crate::mapping;
use crate::models::{TableSchema, TargetLanguage};
use crate::validation::input::sanitize_identifier;

/// Exporter for Java classes with private fields and getters/setters.
#[derive(Debug, Clone, Default)]
pub struct JavaExporter {
    /// Package to declare, if any
    pub package: Option<String>,
}

impl JavaExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the package the class is declared in
    pub fn with_package(mut self, package: Option<String>) -> Self {
        self.package = package.filter(|p| !p.trim().is_empty());
        self
    }
}

/// `Name` for `getName`/`setName`; the field keeps its own spelling
fn accessor_suffix(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl CodeExporter for JavaExporter {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Java
    }

    fn export_table(&self, table: &TableSchema) -> String {
        let mut code = String::new();

        if let Some(package) = &self.package {
            code.push_str(&format!("package {};\n\n", package));
        }

        let imports = collect_imports(table, TargetLanguage::Java);
        for import in &imports {
            code.push_str(&format!("import {};\n", import));
        }
        if !imports.is_empty() {
            code.push('\n');
        }

        code.push_str(&format!("public class {} {{\n", self.type_name(table)));

        let fields: Vec<(String, String)> = table
            .columns
            .iter()
            .map(|column| {
                (
                    sanitize_identifier(&column.name, TargetLanguage::Java),
                    mapping::map_type(&column.sql_type, column.nullable, TargetLanguage::Java),
                )
            })
            .collect();

        for (field, type_name) in &fields {
            code.push_str(&format!("    private {} {};\n", type_name, field));
        }

        for (field, type_name) in &fields {
            let suffix = accessor_suffix(field);
            code.push('\n');
            code.push_str(&format!("    public {} get{}() {{\n", type_name, suffix));
            code.push_str(&format!("        return {};\n", field));
            code.push_str("    }\n\n");
            code.push_str(&format!(
                "    public void set{}({} {}) {{\n",
                suffix, type_name, field
            ));
            code.push_str(&format!("        this.{} = {};\n", field, field));
            code.push_str("    }\n");
        }

        code.push_str("}\n");
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnSchema;

    #[test]
    fn test_export_class_with_accessors() {
        let table = TableSchema::new(
            "Invoice".to_string(),
            vec![
                ColumnSchema::new("id".to_string(), "BIGINT".to_string(), false),
                ColumnSchema::new("amount".to_string(), "MONEY".to_string(), true),
            ],
        );

        let code = JavaExporter::new().export_table(&table);

        assert_eq!(
            code,
            "import java.math.BigDecimal;\n\n\
             public class Invoice {\n\
             \x20   private long id;\n\
             \x20   private BigDecimal amount;\n\
             \n\
             \x20   public long getId() {\n\
             \x20       return id;\n\
             \x20   }\n\
             \n\
             \x20   public void setId(long id) {\n\
             \x20       this.id = id;\n\
             \x20   }\n\
             \n\
             \x20   public BigDecimal getAmount() {\n\
             \x20       return amount;\n\
             \x20   }\n\
             \n\
             \x20   public void setAmount(BigDecimal amount) {\n\
             \x20       this.amount = amount;\n\
             \x20   }\n\
             }\n"
        );
    }

    #[test]
    fn test_nullable_primitives_are_boxed() {
        let table = TableSchema::new(
            "Flags".to_string(),
            vec![
                ColumnSchema::new("Active".to_string(), "BIT".to_string(), true),
                ColumnSchema::new("Count".to_string(), "INT".to_string(), true),
            ],
        );
        let code = JavaExporter::new().export_table(&table);
        assert!(code.contains("private Boolean Active;"));
        assert!(code.contains("private Integer Count;"));
        assert!(code.contains("public Integer getCount()"));
    }

    #[test]
    fn test_package_comes_first() {
        let table = TableSchema::new(
            "Day".to_string(),
            vec![ColumnSchema::new("On".to_string(), "DATE".to_string(), false)],
        );
        let code = JavaExporter::new()
            .with_package(Some("com.example.model".to_string()))
            .export_table(&table);
        assert!(code.starts_with("package com.example.model;\n\nimport java.time.LocalDate;\n"));
    }

    #[test]
    fn test_empty_table() {
        let table = TableSchema::new("Empty".to_string(), Vec::new());
        assert_eq!(JavaExporter::new().export_table(&table), "public class Empty {\n}\n");
    }

    #[test]
    fn test_accessor_suffix() {
        assert_eq!(accessor_suffix("name"), "Name");
        assert_eq!(accessor_suffix("Name"), "Name");
        assert_eq!(accessor_suffix("_2fa"), "_2fa");
        assert_eq!(accessor_suffix(""), "");
    }
}
