//! Shared code generation machinery for the dashgen dashboard generator.
//!
//! This crate provides the framework-agnostic pieces used by target
//! generators (e.g. `dashgen-codegen-next`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`schema`] - Schema traversal (SchemaVisitor, FieldPath, ResolvedInterface)
//! - [`pipeline`] - Validation and resolution of an interface before generation
//! - [`generation`] - Output management (FileRegistry, WriteStats)
//! - [`language`] - Target abstractions (LanguageCodegen, TypeMapper, PreviewFile)

pub mod builder;
pub mod generation;
pub mod language;
pub mod pipeline;
pub mod schema;
