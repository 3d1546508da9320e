//! Request and response types for the conversion contract
//!
//! These are the shapes a transport layer (HTTP handler, CLI, WASM binding)
//! exchanges with the converter. Field names are camelCase on the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::ConversionError;

fn default_language() -> String {
    "csharp".to_string()
}

/// A conversion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    /// SQL script containing CREATE TABLE statements
    pub sql_script: String,
    /// Target language identifier (case-insensitive, default "csharp")
    #[serde(default = "default_language")]
    pub language: String,
}

impl ConversionRequest {
    pub fn new(sql_script: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            sql_script: sql_script.into(),
            language: language.into(),
        }
    }
}

/// A conversion response: generated code keyed by table name on success,
/// an error message on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    pub generated_code: BTreeMap<String, String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionResponse {
    pub fn ok(generated_code: BTreeMap<String, String>) -> Self {
        Self {
            generated_code,
            success: true,
            error: None,
        }
    }

    pub fn failed(error: &ConversionError) -> Self {
        Self {
            generated_code: BTreeMap::new(),
            success: false,
            error: Some(error.to_string()),
        }
    }
}
