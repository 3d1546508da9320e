//! SQL to code conversion
//!
//! Ties the pipeline together: validate the script, parse it, extract the
//! tables and run the exporter for the requested language over each one.
//!
//! ## Example
//!
//! ```rust
//! use ddl_codegen::convert::SchemaConverter;
//!
//! let converter = SchemaConverter::new();
//! let code = converter
//!     .convert("CREATE TABLE Foo (Id INT NOT NULL);", "typescript")
//!     .unwrap();
//! assert_eq!(code["Foo"], "export interface Foo {\n  Id: number;\n}\n");
//! ```
//!
//! ## Duplicate table names
//!
//! Results are keyed by table name. When a script defines the same name
//! twice, the later definition replaces the earlier one and a warning is
//! logged.

mod config;
mod error;
mod types;

use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error, info, warn};

use crate::export::{CSharpExporter, CodeExporter, JavaExporter, PythonExporter, TypeScriptExporter};
use crate::import::{SQLImporter, extract_tables};
use crate::models::TargetLanguage;
use crate::validation::input::validate_sql_script;

pub use config::ConversionConfig;
pub use error::{ConversionError, ConversionResult};
pub use types::{ConversionRequest, ConversionResponse};

/// Converts SQL DDL scripts into data object source code
#[derive(Debug, Clone, Default)]
pub struct SchemaConverter {
    config: ConversionConfig,
}

impl SchemaConverter {
    /// Create a converter with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with a custom configuration
    pub fn with_config(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Exporter for `language`, configured from this converter's settings
    pub fn exporter(&self, language: TargetLanguage) -> Box<dyn CodeExporter> {
        match language {
            TargetLanguage::CSharp => Box::new(
                CSharpExporter::new().with_namespace(self.config.csharp_namespace.clone()),
            ),
            TargetLanguage::Java => {
                Box::new(JavaExporter::new().with_package(self.config.java_package.clone()))
            }
            TargetLanguage::TypeScript => Box::new(TypeScriptExporter::new()),
            TargetLanguage::Python => Box::new(PythonExporter::new()),
        }
    }

    /// Convert a SQL script into generated code keyed by table name.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::Validation`] for an empty script or unknown dialect
    /// - [`ConversionError::Parse`] when the parser reports any diagnostic
    /// - [`ConversionError::NoTablesFound`] when no CREATE TABLE is present
    /// - [`ConversionError::UnsupportedLanguage`] for an unknown `language`
    pub fn convert(
        &self,
        sql_script: &str,
        language: &str,
    ) -> ConversionResult<BTreeMap<String, String>> {
        validate_sql_script(sql_script)?;

        let importer = SQLImporter::new(&self.config.dialect);
        let statements = importer.parse_statements(sql_script)?;
        debug!("Parsed {} statement(s)", statements.len());

        let mut tables = extract_tables(&statements).peekable();
        if tables.peek().is_none() {
            return Err(ConversionError::NoTablesFound);
        }

        let target: TargetLanguage = language
            .parse()
            .map_err(|_| ConversionError::UnsupportedLanguage(language.to_string()))?;
        let exporter = self.exporter(target);

        let mut generated = BTreeMap::new();
        for table in tables {
            let code = exporter.export_table(&table);
            if generated.insert(table.name.clone(), code).is_some() {
                warn!(
                    "Table '{}' is defined more than once; keeping the last definition",
                    table.name
                );
            }
        }

        info!("Converted {} table(s) to {}", generated.len(), target);
        Ok(generated)
    }

    /// Handle a transport-level request.
    ///
    /// Never panics: failures, including unexpected ones, come back as an
    /// unsuccessful [`ConversionResponse`]. Unexpected failures only carry a
    /// generic message; the detail is logged.
    pub fn convert_request(&self, request: &ConversionRequest) -> ConversionResponse {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.convert(&request.sql_script, &request.language)
        }));

        match outcome {
            Ok(Ok(generated_code)) => ConversionResponse::ok(generated_code),
            Ok(Err(e)) => {
                debug!("Conversion failed: {}", e);
                ConversionResponse::failed(&e)
            }
            Err(payload) => {
                error!("Conversion panicked: {}", panic_message(payload.as_ref()));
                ConversionResponse::failed(&ConversionError::Internal)
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic payload"
    }
}

/// Convert a SQL script with the default configuration
pub fn convert(sql_script: &str, language: &str) -> ConversionResult<BTreeMap<String, String>> {
    SchemaConverter::new().convert(sql_script, language)
}
