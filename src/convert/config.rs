//! Configuration for SQL to code conversion

use serde::{Deserialize, Serialize};

/// Configuration for a [`SchemaConverter`](super::SchemaConverter)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// SQL dialect handed to the parser (e.g. "mssql", "postgres", "generic")
    pub dialect: String,
    /// Namespace for generated C# classes
    pub csharp_namespace: Option<String>,
    /// Package for generated Java classes
    pub java_package: Option<String>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            dialect: "mssql".to_string(),
            csharp_namespace: None,
            java_package: None,
        }
    }
}

impl ConversionConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SQL dialect
    pub fn with_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = dialect.into();
        self
    }

    /// Set the C# namespace
    pub fn with_csharp_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.csharp_namespace = Some(namespace.into());
        self
    }

    /// Set the Java package
    pub fn with_java_package(mut self, package: impl Into<String>) -> Self {
        self.java_package = Some(package.into());
        self
    }
}
