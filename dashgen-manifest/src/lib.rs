//! Parsing and validation of dashgen inputs.
//!
//! Two documents feed the generator:
//!
//! - the interface description (`interface.json`): an entity [`Schema`] plus
//!   its [`NamingConvention`]
//! - the optional project configuration (`dashgen.toml`): [`ProjectConfig`]
//!
//! Errors implement [`miette::Diagnostic`] so the CLI can point at the
//! offending line of the input.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod interface;

pub use config::{ApiConfig, OutputConfig, ProjectConfig};
pub use error::{Error, Result, SourceContext, ValidationError};
pub use interface::{
    DEFAULT_RESOURCE, FieldType, Interface, Naming, NamingConvention, OutputRoot, Schema,
    pluralize,
};
