//! ddl-codegen command line tool

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ddl_codegen::cli::commands::convert::{ConvertArgs, handle_convert};
use ddl_codegen::cli::commands::types::handle_types;
use ddl_codegen::cli::output::OutputFormat;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ddl-codegen", version, about = "Generate data objects from SQL CREATE TABLE statements")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a SQL script into data objects
    Convert {
        /// SQL file to read ("-" for stdin)
        input: String,
        /// Target language: csharp, java, typescript or python
        #[arg(short, long, default_value = "csharp")]
        language: String,
        /// SQL dialect (mssql, postgres, mysql, generic, ...)
        #[arg(long)]
        dialect: Option<String>,
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// C# namespace for generated classes
        #[arg(long)]
        namespace: Option<String>,
        /// Java package for generated classes
        #[arg(long)]
        package: Option<String>,
        /// Write one file per table into this directory
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format when printing to stdout
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the SQL type mapping table
    Types {
        /// Only show this language
        #[arg(short, long)]
        language: Option<String>,
    },
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            language,
            dialect,
            config,
            namespace,
            package,
            output,
            format,
        } => handle_convert(&ConvertArgs {
            input,
            language,
            dialect,
            config,
            namespace,
            package,
            output,
            format,
        })?,
        Commands::Types { language } => handle_types(language.as_deref())?,
    }

    Ok(())
}
