//! Naming convention: the four casing variants of an entity name.

use std::fmt;

use dashgen_core::{to_camel_case, to_pascal_case};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Resource name used when the lowercase-plural field is absent.
pub const DEFAULT_RESOURCE: &str = "example";

/// Naming convention as found in the interface JSON.
///
/// Every field is optional at parse time. Use [`Naming::try_from`] to get
/// a validated form suitable for code generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConvention {
    /// PascalCase plural, e.g. `Books`
    #[serde(rename = "Users_1_000___", default, skip_serializing_if = "Option::is_none")]
    pub plural_pascal: Option<String>,
    /// lowercase plural, e.g. `books`
    #[serde(rename = "users_2_000___", default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    /// PascalCase singular, e.g. `Book`
    #[serde(rename = "User_3_000___", default, skip_serializing_if = "Option::is_none")]
    pub singular_pascal: Option<String>,
    /// lowercase singular, e.g. `book`
    #[serde(rename = "user_4_000___", default, skip_serializing_if = "Option::is_none")]
    pub singular: Option<String>,
    /// Write under `src/app/generate` instead of `src/app/dashboard`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_generate_folder: Option<bool>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl NamingConvention {
    /// JSON keys of the casing fields, in declaration order.
    pub const PLURAL_PASCAL_KEY: &'static str = "Users_1_000___";
    pub const PLURAL_KEY: &'static str = "users_2_000___";
    pub const SINGULAR_PASCAL_KEY: &'static str = "User_3_000___";
    pub const SINGULAR_KEY: &'static str = "user_4_000___";

    /// Resolve the resource name used for folders and routes.
    ///
    /// Returns the lowercase-plural field verbatim, or [`DEFAULT_RESOURCE`]
    /// when it is absent or blank.
    pub fn resource(&self) -> &str {
        present(&self.plural).unwrap_or(DEFAULT_RESOURCE)
    }

    /// Whether the resource name had to fall back to [`DEFAULT_RESOURCE`].
    pub fn uses_default_resource(&self) -> bool {
        present(&self.plural).is_none()
    }

    /// Output directory strategy selected by `use_generate_folder`.
    pub fn output_root(&self) -> OutputRoot {
        if self.use_generate_folder.unwrap_or(false) {
            OutputRoot::Generate
        } else {
            OutputRoot::Dashboard
        }
    }

    /// Input paths of the required casing fields that are absent or blank.
    ///
    /// The lowercase plural is not listed; it falls back to [`DEFAULT_RESOURCE`].
    pub fn missing_fields(&self) -> Vec<String> {
        [
            (Self::PLURAL_PASCAL_KEY, &self.plural_pascal),
            (Self::SINGULAR_PASCAL_KEY, &self.singular_pascal),
            (Self::SINGULAR_KEY, &self.singular),
        ]
        .into_iter()
        .filter(|(_, value)| present(value).is_none())
        .map(|(key, _)| format!("namingConvention.{}", key))
        .collect()
    }

    /// Derive all four casing variants from a singular entity name.
    ///
    /// `plural` overrides the derived plural (e.g. `person` / `people`).
    pub fn from_singular(singular: &str, plural: Option<&str>) -> Self {
        let singular = to_camel_case(singular);
        let plural = match plural {
            Some(p) => to_camel_case(p),
            None => pluralize(&singular),
        };
        Self {
            plural_pascal: Some(to_pascal_case(&plural)),
            plural: Some(plural),
            singular_pascal: Some(to_pascal_case(&singular)),
            singular: Some(singular),
            use_generate_folder: None,
        }
    }
}

/// Naive English pluralisation of the last word of `word`.
pub fn pluralize(word: &str) -> String {
    let lower = word.to_lowercase();
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) {
        return format!("{}es", word);
    }
    if let Some(stem) = word.strip_suffix('y') {
        let before_vowel = stem
            .chars()
            .last()
            .is_some_and(|c| "aeiou".contains(c.to_ascii_lowercase()));
        if !stem.is_empty() && !before_vowel {
            return format!("{}ies", stem);
        }
    }
    format!("{}s", word)
}

/// Root directory for generated dashboard files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputRoot {
    #[default]
    Dashboard,
    Generate,
}

impl OutputRoot {
    /// Directory relative to the project root.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputRoot::Dashboard => "src/app/dashboard",
            OutputRoot::Generate => "src/app/generate",
        }
    }
}

impl fmt::Display for OutputRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated naming: every casing variant is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    pub plural_pascal: String,
    pub plural: String,
    pub singular_pascal: String,
    pub singular: String,
    pub output_root: OutputRoot,
}

impl Naming {
    /// The resource name (lowercase plural).
    pub fn resource(&self) -> &str {
        &self.plural
    }

    /// Directory of this resource's dashboard files, e.g. `src/app/dashboard/books`.
    pub fn resource_dir(&self) -> String {
        format!("{}/{}", self.output_root.as_str(), self.plural)
    }
}

impl TryFrom<&NamingConvention> for Naming {
    type Error = ValidationError;

    fn try_from(convention: &NamingConvention) -> Result<Self, Self::Error> {
        let missing = convention.missing_fields();
        let (Some(plural_pascal), Some(singular_pascal), Some(singular)) = (
            present(&convention.plural_pascal),
            present(&convention.singular_pascal),
            present(&convention.singular),
        ) else {
            return Err(ValidationError { missing });
        };

        if convention.uses_default_resource() {
            warn!(
                "namingConvention.{} is missing, using '{}'",
                NamingConvention::PLURAL_KEY,
                DEFAULT_RESOURCE
            );
        }

        Ok(Naming {
            plural_pascal: plural_pascal.to_string(),
            plural: convention.resource().to_string(),
            singular_pascal: singular_pascal.to_string(),
            singular: singular.to_string(),
            output_root: convention.output_root(),
        })
    }
}
