//! Code generation building blocks.
//!
//! - [`CodeFragment`] / [`Renderable`] - what AST nodes produce
//! - [`CodeBuilder`] - lays fragments out as indented text
//! - [`Indent`] - the indentation unit

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
