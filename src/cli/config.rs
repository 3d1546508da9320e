//! Configuration file loading
//!
//! The config file is TOML with the same keys as [`ConversionConfig`]:
//!
//! ```toml
//! dialect = "postgres"
//! csharp_namespace = "Acme.Models"
//! java_package = "com.acme.models"
//! ```

use std::path::Path;

use crate::cli::error::CliError;
use crate::convert::ConversionConfig;

/// Load a [`ConversionConfig`] from a TOML file
pub fn load_config(path: &Path) -> Result<ConversionConfig, CliError> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::FileReadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parse_config(&content)
}

/// Parse a [`ConversionConfig`] from TOML text. Missing keys take defaults.
pub fn parse_config(content: &str) -> Result<ConversionConfig, CliError> {
    toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config = parse_config("dialect = \"postgres\"\njava_package = \"org.example\"\n").unwrap();
        assert_eq!(config.dialect, "postgres");
        assert_eq!(config.java_package.as_deref(), Some("org.example"));
        assert!(config.csharp_namespace.is_none());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), ConversionConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            parse_config("dialect = ["),
            Err(CliError::ConfigError(_))
        ));
    }
}
