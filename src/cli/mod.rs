//! CLI module for the ddl-codegen binary

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::CliError;
