//! Output formatting for CLI

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::cli::error::CliError;
use crate::convert::ConversionResponse;
use crate::mapping::{self, SQL_TYPES};
use crate::models::TargetLanguage;
use crate::validation::input::sanitize_identifier;

/// How `convert` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Generated sources, one block per table
    #[default]
    Text,
    /// The conversion response as JSON
    Json,
    /// The conversion response as YAML
    Yaml,
}

fn comment_prefix(language: TargetLanguage) -> &'static str {
    match language {
        TargetLanguage::Python => "#",
        _ => "//",
    }
}

/// Format generated code for the terminal
pub fn format_generated(
    generated: &BTreeMap<String, String>,
    language: TargetLanguage,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => {
            let prefix = comment_prefix(language);
            let blocks: Vec<String> = generated
                .iter()
                .map(|(table, code)| format!("{} ---- {} ----\n{}", prefix, table, code))
                .collect();
            Ok(blocks.join("\n"))
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(&ConversionResponse::ok(generated.clone()))
                .map_err(|e| CliError::OutputError(e.to_string()))
        }
        OutputFormat::Yaml => serde_yaml::to_string(&ConversionResponse::ok(generated.clone()))
            .map_err(|e| CliError::OutputError(e.to_string())),
    }
}

/// File name for a table's generated source, e.g. `Orders.java`
pub fn file_name(table: &str, language: TargetLanguage) -> String {
    let stem = sanitize_identifier(table, language);
    format!("{}.{}", stem.trim_start_matches('@'), language.file_extension())
}

/// Write one file per table into `dir`, returning the written paths.
///
/// Fails before writing anything when two tables map to the same file name.
pub fn write_files(
    dir: &Path,
    generated: &BTreeMap<String, String>,
    language: TargetLanguage,
) -> Result<Vec<PathBuf>, CliError> {
    let mut targets: BTreeMap<String, &str> = BTreeMap::new();
    for table in generated.keys() {
        let name = file_name(table, language);
        if let Some(previous) = targets.insert(name.clone(), table.as_str()) {
            return Err(CliError::OutputError(format!(
                "Tables '{}' and '{}' would both be written to {}",
                previous, table, name
            )));
        }
    }

    std::fs::create_dir_all(dir).map_err(|e| CliError::FileWriteError {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut written = Vec::with_capacity(generated.len());
    for (table, code) in generated {
        let path = dir.join(file_name(table, language));
        std::fs::write(&path, code).map_err(|e| CliError::FileWriteError {
            path: path.clone(),
            message: e.to_string(),
        })?;
        written.push(path);
    }
    Ok(written)
}

/// Render the SQL type mapping table, for one language or all of them
pub fn format_type_table(language: Option<TargetLanguage>) -> String {
    let languages: Vec<TargetLanguage> = match language {
        Some(lang) => vec![lang],
        None => TargetLanguage::ALL.to_vec(),
    };

    let mut output = format!("{:<18}", "SQL type");
    for lang in &languages {
        output.push_str(&format!(" {:<32}", lang.as_str()));
    }
    output = output.trim_end().to_string();
    output.push('\n');

    for sql_type in SQL_TYPES {
        let mut line = format!("{:<18}", sql_type);
        for lang in &languages {
            let cell = format!(
                "{} / {}",
                mapping::map_type(sql_type, false, *lang),
                mapping::map_type(sql_type, true, *lang)
            );
            line.push_str(&format!(" {:<32}", cell));
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}
