//! Table model extracted from CREATE TABLE statements

use serde::{Deserialize, Serialize};

/// A table extracted from a single `CREATE TABLE` statement.
///
/// Column order is the order the columns appear in the DDL and is preserved
/// through code generation.
///
/// # Example
///
/// ```rust
/// use ddl_codegen::models::{ColumnSchema, TableSchema};
///
/// let table = TableSchema::new(
///     "Users".to_string(),
///     vec![ColumnSchema::new("Id".to_string(), "INT".to_string(), false)],
/// );
/// assert_eq!(table.columns.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSchema {
    /// Unqualified table name (schema/database qualifiers discarded)
    pub name: String,
    /// Columns in declaration order
    #[serde(default)]
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    pub fn new(name: String, columns: Vec<ColumnSchema>) -> Self {
        Self { name, columns }
    }

    /// Whether any column allows NULL
    pub fn has_nullable_columns(&self) -> bool {
        self.columns.iter().any(|c| c.nullable)
    }
}

/// A column definition within a [`TableSchema`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnSchema {
    /// Column name as written in the DDL (without quoting)
    pub name: String,
    /// Canonical upper-cased SQL type token (e.g. "NVARCHAR", "INT").
    /// Not validated: unknown tokens map to each language's fallback type.
    pub sql_type: String,
    /// Whether the column allows NULL (default: true)
    #[serde(default = "default_true")]
    pub nullable: bool,
}

fn default_true() -> bool {
    true
}

impl ColumnSchema {
    /// Create a new column. The SQL type token is upper-cased.
    pub fn new(name: String, sql_type: String, nullable: bool) -> Self {
        Self {
            name,
            sql_type: sql_type.trim().to_uppercase(),
            nullable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_is_uppercased() {
        let col = ColumnSchema::new("name".to_string(), " nvarchar ".to_string(), true);
        assert_eq!(col.sql_type, "NVARCHAR");
    }

    #[test]
    fn test_nullable_defaults_to_true_on_deserialize() {
        let col: ColumnSchema =
            serde_json::from_str(r#"{"name": "id", "sql_type": "INT"}"#).unwrap();
        assert!(col.nullable);
    }

    #[test]
    fn test_empty_table_is_valid() {
        let table = TableSchema::new("Empty".to_string(), Vec::new());
        assert!(table.columns.is_empty());
        assert!(!table.has_nullable_columns());
    }
}
