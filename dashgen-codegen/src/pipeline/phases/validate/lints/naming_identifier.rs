//! Lint for casing variants that end up as TypeScript identifiers.

use dashgen_core::is_js_identifier;
use dashgen_manifest::{Interface, NamingConvention};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that requires the PascalCase variants and the lowercase singular
/// to be valid identifiers.
///
/// These names become component, interface, model and variable names in
/// the generated code.
pub struct NamingIdentifierLint;

impl Lint for NamingIdentifierLint {
    fn name(&self) -> &'static str {
        "naming-identifier"
    }

    fn description(&self) -> &'static str {
        "Check that names used as identifiers are valid TypeScript identifiers"
    }

    fn check(&self, interface: &Interface, diagnostics: &mut Vec<Diagnostic>) {
        let convention = &interface.naming_convention;
        let identifiers = [
            (
                NamingConvention::PLURAL_PASCAL_KEY,
                convention.plural_pascal.as_deref(),
            ),
            (
                NamingConvention::SINGULAR_PASCAL_KEY,
                convention.singular_pascal.as_deref(),
            ),
            (NamingConvention::SINGULAR_KEY, convention.singular.as_deref()),
        ];

        for (key, value) in identifiers {
            let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
                continue;
            };
            if !is_js_identifier(value) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("'{}' is not a valid TypeScript identifier", value),
                    )
                    .at(format!("namingConvention.{}", key)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dashgen_manifest::Schema;

    use super::*;

    fn check(convention: NamingConvention) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        NamingIdentifierLint.check(&Interface::new(Schema::new(), convention), &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_derived_names_are_identifiers() {
        assert!(check(NamingConvention::from_singular("blog post", None)).is_empty());
    }

    #[test]
    fn test_invalid_identifier() {
        let diagnostics = check(NamingConvention {
            singular_pascal: Some("Blog Post".to_string()),
            ..NamingConvention::from_singular("blog post", None)
        });
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("namingConvention.User_3_000___")
        );
    }

    #[test]
    fn test_lowercase_plural_is_not_an_identifier_check() {
        let diagnostics = check(NamingConvention {
            plural: Some("blog-posts".to_string()),
            ..NamingConvention::from_singular("blog post", None)
        });
        assert!(diagnostics.is_empty());
    }
}
