//! SQL Import functionality
//!
//! Parses SQL scripts with `sqlparser` and extracts one [`TableSchema`] per
//! `CREATE TABLE` statement. Every other statement kind is skipped.
//!
//! # Nullability
//!
//! A column is non-nullable when the rendered text of any of its column
//! options contains `NOT NULL` (case-insensitive). This is a substring scan,
//! not constraint analysis: a `CHECK (x IS NOT NULL)` option also marks the
//! column non-nullable, while table-level constraints are never consulted.
//!
//! # Type tokens
//!
//! Built-in synonyms collapse onto one keyword (`INTEGER` and `INT4` become
//! `INT`, `DOUBLE PRECISION` becomes `FLOAT`, `BOOLEAN` becomes `BIT`, ...),
//! so a column maps the same way whichever spelling the script uses.
//!
//! # Batch separators
//!
//! With the `mssql` dialect, lines holding only `GO` (optionally with a
//! repeat count) are treated as statement separators, so scripts exported
//! from SQL Server Management Studio parse as-is.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use sqlparser::ast::{ColumnDef, DataType, ObjectName, ObjectNamePart, Statement};
use sqlparser::dialect::dialect_from_str;
use sqlparser::parser::Parser;
use tracing::debug;

use super::ImportError;
use crate::models::{ColumnSchema, TableSchema};

static BATCH_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*GO(?:[ \t]+\d+)?[ \t]*;?[ \t\r]*$").unwrap());

/// SQL Importer - parses CREATE TABLE statements
#[derive(Debug, Clone)]
pub struct SQLImporter {
    /// SQL dialect to use for parsing (any name `sqlparser` recognises)
    pub dialect: String,
}

impl Default for SQLImporter {
    fn default() -> Self {
        Self {
            dialect: "mssql".to_string(),
        }
    }
}

impl SQLImporter {
    /// Create a new SQL importer with the specified dialect
    pub fn new(dialect: &str) -> Self {
        Self {
            dialect: dialect.to_string(),
        }
    }

    /// Parse a SQL script into statements.
    ///
    /// The parser stops at the first syntax error, so a failed parse carries
    /// a single diagnostic.
    pub fn parse_statements(&self, sql: &str) -> Result<Vec<Statement>, ImportError> {
        let dialect = dialect_from_str(&self.dialect)
            .ok_or_else(|| ImportError::UnsupportedDialect(self.dialect.clone()))?;

        let sql = if self.dialect.eq_ignore_ascii_case("mssql") {
            BATCH_SEPARATOR.replace_all(sql, ";")
        } else {
            Cow::Borrowed(sql)
        };

        Parser::parse_sql(dialect.as_ref(), &sql).map_err(|e| ImportError::ParseError(e.to_string()))
    }

    /// Parse SQL and extract table definitions
    pub fn parse(&self, sql: &str) -> Result<Vec<TableSchema>, ImportError> {
        let statements = self.parse_statements(sql)?;
        Ok(extract_tables(&statements).collect())
    }
}

/// Lazily extract one [`TableSchema`] per `CREATE TABLE` statement, in
/// document order.
pub fn extract_tables(statements: &[Statement]) -> impl Iterator<Item = TableSchema> + '_ {
    statements.iter().filter_map(table_from_statement)
}

fn table_from_statement(statement: &Statement) -> Option<TableSchema> {
    match statement {
        Statement::CreateTable(create) => {
            let name = base_name(&create.name);
            if name.is_empty() {
                debug!("Skipping CREATE TABLE without a usable name: {}", create.name);
                return None;
            }
            let columns: Vec<ColumnSchema> = create.columns.iter().map(column_from_def).collect();
            debug!("Extracted table '{}' with {} column(s)", name, columns.len());
            Some(TableSchema::new(name, columns))
        }
        _ => None,
    }
}

fn column_from_def(column: &ColumnDef) -> ColumnSchema {
    let nullable = !column
        .options
        .iter()
        .any(|option| option.to_string().to_uppercase().contains("NOT NULL"));

    ColumnSchema::new(column.name.value.clone(), type_token(&column.data_type), nullable)
}

/// Canonical type keyword: built-in types drop their `(...)` arguments and
/// synonyms collapse onto one spelling, custom and alias types use their own
/// (unqualified) name.
fn type_token(data_type: &DataType) -> String {
    match data_type {
        DataType::Custom(name, _) => base_name(name).to_uppercase(),
        DataType::Int(..) | DataType::Integer(..) | DataType::Int4(..) => "INT".to_string(),
        DataType::Int8(..) => "BIGINT".to_string(),
        DataType::Int2(..) => "SMALLINT".to_string(),
        DataType::Dec(..) => "DECIMAL".to_string(),
        DataType::CharVarying(..) | DataType::CharacterVarying(..) => "VARCHAR".to_string(),
        other => {
            let rendered = other.to_string();
            let keyword = rendered
                .split('(')
                .next()
                .unwrap_or_default()
                .trim()
                .to_uppercase();
            canonical_keyword(&keyword)
                .map(str::to_string)
                .unwrap_or(keyword)
        }
    }
}

/// Spelling-only synonyms of the mapped keywords
fn canonical_keyword(keyword: &str) -> Option<&'static str> {
    match keyword {
        "DOUBLE" | "DOUBLE PRECISION" | "FLOAT8" | "FLOAT64" => Some("FLOAT"),
        "FLOAT4" | "FLOAT32" => Some("REAL"),
        "BOOLEAN" | "BOOL" => Some("BIT"),
        "CHARACTER" => Some("CHAR"),
        "NATIONAL CHARACTER VARYING" | "NATIONAL CHAR VARYING" | "NCHAR VARYING" => {
            Some("NVARCHAR")
        }
        _ => None,
    }
}

/// Last part of a possibly qualified name, without quoting
fn base_name(name: &ObjectName) -> String {
    name.0
        .last()
        .map(|part| match part {
            ObjectNamePart::Identifier(ident) => ident.value.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default()
}
