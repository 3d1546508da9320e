//! Types command implementation

use crate::cli::error::CliError;
use crate::cli::output::format_type_table;
use crate::models::TargetLanguage;

/// Handle the types command: print the SQL type mapping table
pub fn handle_types(language: Option<&str>) -> Result<(), CliError> {
    let language = language
        .map(|name| name.parse::<TargetLanguage>())
        .transpose()
        .map_err(CliError::InvalidArgument)?;

    print!("{}", format_type_table(language));
    Ok(())
}
