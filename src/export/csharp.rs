//! C# exporter for generating POCO classes from table schemas.

use super::{CodeExporter, collect_imports};
use crate::mapping;
use crate::models::{TableSchema, TargetLanguage};
use crate::validation::input::sanitize_identifier;

/// Exporter for C# classes with auto-implemented properties.
#[derive(Debug, Clone, Default)]
pub struct CSharpExporter {
    /// File-scoped namespace to declare, if any
    pub namespace: Option<String>,
}

impl CSharpExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Property name for a column. A member may not share its enclosing
    /// type's name, so such columns get a `Value` suffix.
    fn member_name(column: &str, class_name: &str) -> String {
        let member = sanitize_identifier(column, TargetLanguage::CSharp);
        if member.trim_start_matches('@') == class_name.trim_start_matches('@') {
            format!("{}Value", member.trim_start_matches('@'))
        } else {
            member
        }
    }

    /// Set the namespace the class is declared in
    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace.filter(|ns| !ns.trim().is_empty());
        self
    }
}

impl CodeExporter for CSharpExporter {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::CSharp
    }

    /// Export a table as a C# class.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ddl_codegen::export::{CSharpExporter, CodeExporter};
    /// use ddl_codegen::models::{ColumnSchema, TableSchema};
    ///
    /// let table = TableSchema::new(
    ///     "Users".to_string(),
    ///     vec![ColumnSchema::new("Id".to_string(), "INT".to_string(), false)],
    /// );
    ///
    /// let code = CSharpExporter::new().export_table(&table);
    /// assert!(code.contains("public int Id { get; set; }"));
    /// ```
    fn export_table(&self, table: &TableSchema) -> String {
        let mut code = String::new();

        let imports = collect_imports(table, TargetLanguage::CSharp);
        for namespace in &imports {
            code.push_str(&format!("using {};\n", namespace));
        }
        if !imports.is_empty() {
            code.push('\n');
        }

        if let Some(namespace) = &self.namespace {
            code.push_str(&format!("namespace {};\n\n", namespace));
        }

        let class_name = self.type_name(table);
        code.push_str(&format!("public class {}\n{{\n", class_name));

        for column in &table.columns {
            let type_name = mapping::map_type(&column.sql_type, column.nullable, TargetLanguage::CSharp);
            code.push_str(&format!(
                "    public {} {} {{ get; set; }}\n",
                type_name,
                Self::member_name(&column.name, &class_name)
            ));
        }

        code.push_str("}\n");
        code
    }
}
