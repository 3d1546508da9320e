//! Input validation and sanitization utilities.
//!
//! Validates SQL scripts before they reach the parser, and turns table and
//! column names into identifiers that are legal in each target language.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::TargetLanguage;

/// Errors that can occur during input validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input is empty (or whitespace only) when a value is required
    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a SQL script before parsing.
///
/// # Examples
///
/// ```
/// use ddl_codegen::validation::input::validate_sql_script;
///
/// assert!(validate_sql_script("CREATE TABLE t (id INT);").is_ok());
/// assert!(validate_sql_script("").is_err());
/// assert!(validate_sql_script("  \n\t ").is_err());
/// ```
pub fn validate_sql_script(sql: &str) -> ValidationResult<()> {
    if sql.trim().is_empty() {
        return Err(ValidationError::Empty("SQL script"));
    }
    Ok(())
}

static INVALID_IDENTIFIER_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());

/// Turn a SQL name into a legal identifier for `language`.
///
/// Characters outside `[A-Za-z0-9_]` become `_`, a leading digit gets a `_`
/// prefix and reserved words are escaped (`@word` in C#, `word_` in Java,
/// TypeScript and Python). TypeScript property names are handled by the
/// exporter, which quotes them instead.
///
/// # Examples
///
/// ```
/// use ddl_codegen::models::TargetLanguage;
/// use ddl_codegen::validation::input::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("Order Id", TargetLanguage::CSharp), "Order_Id");
/// assert_eq!(sanitize_identifier("class", TargetLanguage::CSharp), "@class");
/// assert_eq!(sanitize_identifier("from", TargetLanguage::Python), "from_");
/// assert_eq!(sanitize_identifier("2fa", TargetLanguage::Java), "_2fa");
/// assert_eq!(sanitize_identifier("default", TargetLanguage::TypeScript), "default_");
/// ```
pub fn sanitize_identifier(name: &str, language: TargetLanguage) -> String {
    let mut sanitized = INVALID_IDENTIFIER_CHARS.replace_all(name, "_").into_owned();

    if sanitized.is_empty() {
        return "_".to_string();
    }
    if sanitized.starts_with(|c: char| c.is_ascii_digit()) {
        sanitized.insert(0, '_');
    }

    if is_reserved_word(&sanitized, language) {
        match language {
            TargetLanguage::CSharp => sanitized.insert(0, '@'),
            TargetLanguage::Java | TargetLanguage::TypeScript | TargetLanguage::Python => {
                sanitized.push('_')
            }
        }
    }

    sanitized
}

/// Whether `name` is a valid plain identifier (no sanitizing needed)
pub fn is_plain_identifier(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && !INVALID_IDENTIFIER_CHARS.is_match(name)
}

/// Check if a word is reserved in the target language
pub fn is_reserved_word(word: &str, language: TargetLanguage) -> bool {
    const CSHARP: &[&str] = &[
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
        "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
        "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
        "void", "volatile", "while",
    ];
    const JAVA: &[&str] = &[
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
        "const", "continue", "default", "do", "double", "else", "enum", "extends", "false",
        "final", "finally", "float", "for", "goto", "if", "implements", "import", "instanceof",
        "int", "interface", "long", "native", "new", "null", "package", "private", "protected",
        "public", "return", "short", "static", "strictfp", "super", "switch", "synchronized",
        "this", "throw", "throws", "transient", "true", "try", "void", "volatile", "while",
    ];
    // Reserved words plus the predefined type names an interface may not take
    const TYPESCRIPT: &[&str] = &[
        "any", "boolean", "break", "case", "catch", "class", "const", "continue", "debugger",
        "default", "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for",
        "function", "if", "implements", "import", "in", "instanceof", "interface", "let", "never",
        "new", "null", "number", "object", "package", "private", "protected", "public", "return",
        "static", "string", "super", "switch", "symbol", "this", "throw", "true", "try", "typeof",
        "undefined", "unknown", "var", "void", "while", "with", "yield",
    ];
    const PYTHON: &[&str] = &[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield",
    ];

    // All three languages are case-sensitive
    match language {
        TargetLanguage::CSharp => CSHARP.contains(&word),
        TargetLanguage::Java => JAVA.contains(&word),
        TargetLanguage::Python => PYTHON.contains(&word),
        TargetLanguage::TypeScript => TYPESCRIPT.contains(&word),
    }
}
