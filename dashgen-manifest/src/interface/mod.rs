//! Interface description: the generator's JSON input.

mod naming;
mod parse;
mod schema;

pub use naming::{DEFAULT_RESOURCE, Naming, NamingConvention, OutputRoot, pluralize};
pub use schema::{FieldType, Schema};
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Root document of an interface description.
///
/// ```json
/// {
///   "schema": { "title": "string" },
///   "namingConvention": {
///     "Users_1_000___": "Books",
///     "users_2_000___": "books",
///     "User_3_000___": "Book",
///     "user_4_000___": "book"
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interface {
    /// Entity fields
    #[serde(default)]
    pub schema: Schema,

    /// Entity name casings
    #[serde(default)]
    pub naming_convention: NamingConvention,
}

impl Interface {
    pub fn new(schema: Schema, naming_convention: NamingConvention) -> Self {
        Self {
            schema,
            naming_convention,
        }
    }

    /// Resolved resource name (see [`NamingConvention::resource`]).
    pub fn resource(&self) -> &str {
        self.naming_convention.resource()
    }

    /// Validate the naming convention for code generation.
    pub fn naming(&self) -> std::result::Result<Naming, ValidationError> {
        Naming::try_from(&self.naming_convention)
    }

    /// Serialize as pretty-printed JSON with a trailing newline.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self).map(|mut json| {
            json.push('\n');
            json
        })
    }
}
