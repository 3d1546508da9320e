//! Validation functionality
//!
//! Provides validation logic for:
//! - SQL script input (empty/whitespace rejection)
//! - Identifier sanitization for generated code

pub mod input;

pub use input::{ValidationError, ValidationResult};
