//! Built-in lints for interface validation.

mod empty_schema;
mod field_name;
mod field_type;
mod missing_naming;
mod naming_identifier;
mod resource_path;

pub use empty_schema::EmptySchemaLint;
pub use field_name::FieldNameLint;
pub use field_type::FieldTypeLint;
pub use missing_naming::MissingNamingLint;
pub use naming_identifier::NamingIdentifierLint;
pub use resource_path::ResourcePathLint;
