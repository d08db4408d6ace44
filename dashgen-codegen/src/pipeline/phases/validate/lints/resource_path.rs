//! Lint for resource names that are unsafe as path segments.

use dashgen_manifest::{Interface, NamingConvention};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that rejects resource names that would escape or break the
/// generated directory layout.
///
/// The resource name is used verbatim as a folder and route segment, so
/// separators, `..`, whitespace and characters reserved on common file
/// systems are errors. The name itself is never rewritten.
pub struct ResourcePathLint;

const RESERVED: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*', '[', ']'];

fn path_problem(segment: &str) -> Option<&'static str> {
    if segment.contains("..") {
        Some("contains '..'")
    } else if segment.starts_with('.') {
        Some("starts with '.'")
    } else if segment.chars().any(char::is_whitespace) {
        Some("contains whitespace")
    } else if segment.chars().any(|c| RESERVED.contains(&c)) {
        Some("contains a path separator or reserved character")
    } else if segment.chars().any(char::is_control) {
        Some("contains a control character")
    } else {
        None
    }
}

impl Lint for ResourcePathLint {
    fn name(&self) -> &'static str {
        "resource-path"
    }

    fn description(&self) -> &'static str {
        "Check that names used in file paths are safe path segments"
    }

    fn check(&self, interface: &Interface, diagnostics: &mut Vec<Diagnostic>) {
        let convention = &interface.naming_convention;
        let segments = [
            (NamingConvention::PLURAL_KEY, convention.plural.as_deref()),
            (
                NamingConvention::SINGULAR_PASCAL_KEY,
                convention.singular_pascal.as_deref(),
            ),
        ];

        for (key, value) in segments {
            let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
                continue;
            };
            if let Some(problem) = path_problem(value) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("'{}' cannot be used in a file path: {}", value, problem),
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

    fn check_plural(plural: &str) -> Vec<Diagnostic> {
        let convention = NamingConvention {
            plural: Some(plural.to_string()),
            ..NamingConvention::from_singular("book", None)
        };
        let mut diagnostics = Vec::new();
        ResourcePathLint.check(&Interface::new(Schema::new(), convention), &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_safe_names() {
        assert!(check_plural("books").is_empty());
        assert!(check_plural("blog-posts").is_empty());
        assert!(check_plural("blogPosts").is_empty());
    }

    #[test]
    fn test_traversal_rejected() {
        let diagnostics = check_plural("../secrets");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert!(diagnostics[0].message.contains("'..'"));
    }

    #[test]
    fn test_separators_and_whitespace_rejected() {
        assert_eq!(check_plural("books/all").len(), 1);
        assert_eq!(check_plural("book shelf").len(), 1);
        assert_eq!(check_plural("[id]").len(), 1);
        assert_eq!(check_plural(".hidden").len(), 1);
    }

    #[test]
    fn test_missing_plural_is_not_checked() {
        let convention = NamingConvention {
            plural: None,
            ..NamingConvention::from_singular("book", None)
        };
        let mut diagnostics = Vec::new();
        ResourcePathLint.check(&Interface::new(Schema::new(), convention), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }
}
