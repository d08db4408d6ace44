//! Target-specific abstractions.
//!
//! - [`LanguageCodegen`] - Trait implemented by target generators
//! - [`TypeMapper`] - Mapping of schema field kinds to target type strings
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
