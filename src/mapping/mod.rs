//! SQL type to target language type mapping
//!
//! A single table keyed by SQL type token, with one column per language,
//! drives all four languages. Each entry carries the type name, how that
//! type expresses nullability, and the import it needs (if any).
//!
//! Lookup is case-insensitive. Unknown SQL types never fail: they resolve to
//! the language's fallback type (`object`, `Object`, `any`, `Any`).

mod table;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::TargetLanguage;

pub use table::SQL_TYPES;

/// How a mapped type expresses "may be NULL"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nullability {
    /// Already nullable (reference types); the name is left as is
    Unchanged,
    /// Value type; a `?` is appended (`int?`)
    Suffix,
    /// Primitive replaced by its boxed form (`int` -> `Integer`)
    Boxed(&'static str),
    /// Name unchanged; the field declaration carries the marker (`name?: T`)
    FieldMarker,
    /// Wrapped in `Optional[T]`
    OptionalGeneric,
}

/// A type in one target language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageType {
    pub name: &'static str,
    pub nullability: Nullability,
    /// Fully qualified import path, e.g. `java.time.LocalDate` or `decimal.Decimal`
    pub import: Option<&'static str>,
}

impl LanguageType {
    /// Type name to declare, with the nullable transform applied when needed
    pub fn render(&self, nullable: bool) -> String {
        if !nullable {
            return self.name.to_string();
        }
        match self.nullability {
            Nullability::Unchanged | Nullability::FieldMarker => self.name.to_string(),
            Nullability::Suffix => format!("{}?", self.name),
            Nullability::Boxed(boxed) => boxed.to_string(),
            Nullability::OptionalGeneric => format!("Optional[{}]", self.name),
        }
    }
}

static TYPE_TABLE: Lazy<HashMap<&'static str, &'static [LanguageType; 4]>> = Lazy::new(|| {
    table::TYPE_ROWS
        .iter()
        .map(|(sql_type, types)| (*sql_type, types))
        .collect()
});

/// Column of a language within a table row
fn column(language: TargetLanguage) -> usize {
    match language {
        TargetLanguage::CSharp => 0,
        TargetLanguage::Java => 1,
        TargetLanguage::TypeScript => 2,
        TargetLanguage::Python => 3,
    }
}

/// Look up the mapping for a SQL type token, `None` if the token is unknown
pub fn lookup(sql_type: &str, language: TargetLanguage) -> Option<&'static LanguageType> {
    let key = sql_type.trim().to_uppercase();
    TYPE_TABLE
        .get(key.as_str())
        .map(|types| &types[column(language)])
}

/// Fallback type used for SQL types missing from the table
pub fn fallback(language: TargetLanguage) -> &'static LanguageType {
    match language {
        TargetLanguage::CSharp => &table::CSHARP_FALLBACK,
        TargetLanguage::Java => &table::JAVA_FALLBACK,
        TargetLanguage::TypeScript => &table::TYPESCRIPT_FALLBACK,
        TargetLanguage::Python => &table::PYTHON_FALLBACK,
    }
}

/// Mapping for a SQL type token, falling back for unknown tokens
pub fn resolve(sql_type: &str, language: TargetLanguage) -> &'static LanguageType {
    lookup(sql_type, language).unwrap_or_else(|| fallback(language))
}

/// Map a SQL type token to the type name declared in `language`.
///
/// # Example
///
/// ```rust
/// use ddl_codegen::mapping::map_type;
/// use ddl_codegen::models::TargetLanguage;
///
/// assert_eq!(map_type("int", true, TargetLanguage::CSharp), "int?");
/// assert_eq!(map_type("INT", true, TargetLanguage::Java), "Integer");
/// assert_eq!(map_type("NVARCHAR", true, TargetLanguage::Python), "Optional[str]");
/// assert_eq!(map_type("GEOGRAPHY", false, TargetLanguage::TypeScript), "any");
/// ```
pub fn map_type(sql_type: &str, nullable: bool, language: TargetLanguage) -> String {
    resolve(sql_type, language).render(nullable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            lookup("bigint", TargetLanguage::CSharp),
            lookup("BIGINT", TargetLanguage::CSharp)
        );
        assert!(lookup("Uniqueidentifier", TargetLanguage::Java).is_some());
    }

    #[test]
    fn test_unknown_type_falls_back() {
        assert!(lookup("HIERARCHYID", TargetLanguage::CSharp).is_none());
        assert_eq!(map_type("HIERARCHYID", false, TargetLanguage::CSharp), "object");
        assert_eq!(map_type("HIERARCHYID", true, TargetLanguage::CSharp), "object");
        assert_eq!(map_type("HIERARCHYID", true, TargetLanguage::Java), "Object");
        assert_eq!(map_type("HIERARCHYID", true, TargetLanguage::TypeScript), "any");
        assert_eq!(
            map_type("HIERARCHYID", true, TargetLanguage::Python),
            "Optional[Any]"
        );
    }

    #[test]
    fn test_csharp_reference_types_are_not_wrapped() {
        assert_eq!(map_type("NVARCHAR", true, TargetLanguage::CSharp), "string");
        assert_eq!(map_type("VARBINARY", true, TargetLanguage::CSharp), "byte[]");
        assert_eq!(map_type("DATETIME2", true, TargetLanguage::CSharp), "DateTime?");
        assert_eq!(map_type("UNIQUEIDENTIFIER", true, TargetLanguage::CSharp), "Guid?");
    }

    #[test]
    fn test_java_boxes_primitives_only() {
        assert_eq!(map_type("BIT", false, TargetLanguage::Java), "boolean");
        assert_eq!(map_type("BIT", true, TargetLanguage::Java), "Boolean");
        assert_eq!(map_type("DECIMAL", true, TargetLanguage::Java), "BigDecimal");
        assert_eq!(map_type("VARBINARY", true, TargetLanguage::Java), "byte[]");
    }

    #[test]
    fn test_typescript_name_ignores_nullability() {
        assert_eq!(map_type("INT", true, TargetLanguage::TypeScript), "number");
        assert_eq!(map_type("INT", false, TargetLanguage::TypeScript), "number");
        assert_eq!(
            resolve("INT", TargetLanguage::TypeScript).nullability,
            Nullability::FieldMarker
        );
    }

    #[test]
    fn test_python_wraps_every_nullable_type() {
        assert_eq!(map_type("INT", false, TargetLanguage::Python), "int");
        assert_eq!(map_type("INT", true, TargetLanguage::Python), "Optional[int]");
        assert_eq!(map_type("TEXT", true, TargetLanguage::Python), "Optional[str]");
    }

    #[test]
    fn test_imports_are_recorded() {
        assert_eq!(
            resolve("DATE", TargetLanguage::Java).import,
            Some("java.time.LocalDate")
        );
        assert_eq!(resolve("DATETIME", TargetLanguage::CSharp).import, Some("System"));
        assert_eq!(
            resolve("MONEY", TargetLanguage::Python).import,
            Some("decimal.Decimal")
        );
        assert_eq!(resolve("INT", TargetLanguage::Python).import, None);
    }
}
