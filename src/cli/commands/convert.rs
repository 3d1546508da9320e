//! Convert command implementation

use std::io::Read;
use std::path::PathBuf;

use tracing::info;

use crate::cli::config::load_config;
use crate::cli::error::CliError;
use crate::cli::output::{OutputFormat, format_generated, write_files};
use crate::convert::{ConversionConfig, ConversionError, SchemaConverter};
use crate::models::TargetLanguage;

/// Arguments for the `convert` command
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    /// SQL file path, or "-" for stdin
    pub input: String,
    /// Target language identifier
    pub language: String,
    /// SQL dialect (overrides the config file)
    pub dialect: Option<String>,
    /// TOML config file
    pub config: Option<PathBuf>,
    /// C# namespace (overrides the config file)
    pub namespace: Option<String>,
    /// Java package (overrides the config file)
    pub package: Option<String>,
    /// Directory to write one file per table into (prints to stdout if not provided)
    pub output: Option<PathBuf>,
    /// Stdout format
    pub format: OutputFormat,
}

/// Load input content from file or stdin
fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError {
            path,
            message: e.to_string(),
        })
    }
}

/// Config file (if any) with command-line overrides applied
fn resolve_config(args: &ConvertArgs) -> Result<ConversionConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ConversionConfig::default(),
    };

    if let Some(dialect) = &args.dialect {
        config = config.with_dialect(dialect.clone());
    }
    if let Some(namespace) = &args.namespace {
        config = config.with_csharp_namespace(namespace.clone());
    }
    if let Some(package) = &args.package {
        config = config.with_java_package(package.clone());
    }

    Ok(config)
}

/// Handle the convert command
pub fn handle_convert(args: &ConvertArgs) -> Result<(), CliError> {
    let sql = load_input(&args.input)?;
    let config = resolve_config(args)?;
    let converter = SchemaConverter::with_config(config);

    let generated = converter.convert(&sql, &args.language)?;
    // convert() already rejected unknown languages
    let language: TargetLanguage = args
        .language
        .parse()
        .map_err(|_| ConversionError::UnsupportedLanguage(args.language.clone()))?;

    match &args.output {
        Some(dir) => {
            let written = write_files(dir, &generated, language)?;
            for path in &written {
                eprintln!("Wrote {}", path.display());
            }
            info!("Wrote {} file(s) to {}", written.len(), dir.display());
        }
        None => {
            println!("{}", format_generated(&generated, language, args.format)?);
        }
    }

    Ok(())
}
