//! Validation pipeline run before code generation.
//!
//! A [`Pipeline`] takes a parsed [`Interface`](dashgen_manifest::Interface)
//! through explicit phases:
//!
//! - `validate` - runs lints and collects diagnostics; any error aborts
//! - `resolve` - validates naming and flattens the schema into a
//!   [`ResolvedInterface`](crate::schema::ResolvedInterface)
//! - user phases added with [`Pipeline::phase`]
//!
//! # Example
//!
//! ```ignore
//! let mut ctx = Pipeline::new().run(interface)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//!
//! let generator = Generator::new(ctx.take_resolved()?);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
