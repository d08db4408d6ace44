//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints and collects diagnostics
//! - [`ResolvePhase`] - builds the [`ResolvedInterface`](crate::schema::ResolvedInterface)

mod resolve;
mod validate;

pub use resolve::ResolvePhase;
pub use validate::{
    EmptySchemaLint, FieldNameLint, FieldTypeLint, Lint, MissingNamingLint, NamingIdentifierLint,
    ResourcePathLint, ValidatePhase,
};
