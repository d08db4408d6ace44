//! Lint for unrecognised type tags.

use dashgen_core::FieldKind;
use dashgen_manifest::Interface;

use super::super::Lint;
use crate::{
    pipeline::Diagnostic,
    schema::{FieldPath, SchemaExt, SchemaVisitor},
};

/// Lint that warns about type tags other than `string`, `number`,
/// `boolean`, `date` and their `[]` arrays.
///
/// Such fields are still generated, loosely typed.
pub struct FieldTypeLint;

impl Lint for FieldTypeLint {
    fn name(&self) -> &'static str {
        "field-type"
    }

    fn description(&self) -> &'static str {
        "Warn about unrecognised field type tags"
    }

    fn check(&self, interface: &Interface, diagnostics: &mut Vec<Diagnostic>) {
        interface.schema.walk(&mut UnknownTags { diagnostics });
    }
}

struct UnknownTags<'a> {
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl SchemaVisitor for UnknownTags<'_> {
    fn visit_field(&mut self, path: &FieldPath, kind: &FieldKind) {
        if !kind.is_known() {
            self.diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!("unknown type '{}' for field '{}'", kind, path),
                )
                .at(format!("schema.{}", path)),
            );
        }
    }
}
