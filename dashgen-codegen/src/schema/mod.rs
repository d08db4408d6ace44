//! Schema traversal.
//!
//! - [`SchemaVisitor`] / [`SchemaExt::walk`] - Depth-first visitor over nested schemas
//! - [`FieldPath`] - Dotted path of a field from the schema root
//! - [`LeafField`] - A primitive field with its path and kind
//! - [`ResolvedInterface`] - Validated input handed to generators
//! - [`SchemaTreeDisplay`] - Indented tree rendering for reports

mod display;
mod resolved;
mod walker;

pub use display::SchemaTreeDisplay;
pub use resolved::ResolvedInterface;
pub use walker::{FieldPath, LeafField, SchemaExt, SchemaVisitor};
