//! TypeScript and JSX builders.
//!
//! Every builder implements [`Renderable`](dashgen_codegen::builder::Renderable)
//! and can be composed into a [`CodeFile`](crate::CodeFile).

mod exports;
mod fns;
mod imports;
mod interface;
mod jsx;
mod objects;
mod syntax;

pub use exports::Export;
pub use fns::{Fn, Param};
pub use imports::Import;
pub use interface::{Interface, TypeExpr, TypeField};
pub use jsx::{Attr, JsxChild, JsxElement};
pub use objects::{JsObject, Property, PropertyValue};
pub use syntax::{member, optional_member, property_key, string_literal};
