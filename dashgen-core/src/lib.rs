//! Core utilities and types for the dashgen generator.
//!
//! This crate provides fundamental types and utilities used across
//! the dashgen workspace.

mod file;
mod kind;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, PersistenceError, WriteResult};
// Fundamental types
pub use kind::FieldKind;
// String utilities
pub use utils::{
    is_js_identifier, to_camel_case, to_kebab_case, to_pascal_case, to_screaming_snake_case,
    to_title_case,
};
