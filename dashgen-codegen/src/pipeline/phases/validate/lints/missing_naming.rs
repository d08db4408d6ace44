//! Lint for missing naming convention fields.

use dashgen_manifest::{DEFAULT_RESOURCE, Interface, NamingConvention};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that reports absent or blank casing fields.
///
/// Missing PascalCase plural, PascalCase singular or lowercase singular is
/// an error, one per field. A missing lowercase plural only warns, since
/// the resource name falls back to `example`.
pub struct MissingNamingLint;

impl Lint for MissingNamingLint {
    fn name(&self) -> &'static str {
        "missing-naming"
    }

    fn description(&self) -> &'static str {
        "Check that every naming convention casing is present"
    }

    fn check(&self, interface: &Interface, diagnostics: &mut Vec<Diagnostic>) {
        let convention = &interface.naming_convention;

        for path in convention.missing_fields() {
            diagnostics.push(
                Diagnostic::error("validate", format!("missing naming field '{}'", path)).at(path),
            );
        }

        if convention.uses_default_resource() {
            let path = format!("namingConvention.{}", NamingConvention::PLURAL_KEY);
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!(
                        "missing resource name '{}', files are generated for '{}'",
                        path, DEFAULT_RESOURCE
                    ),
                )
                .at(path),
            );
        }
    }
}
