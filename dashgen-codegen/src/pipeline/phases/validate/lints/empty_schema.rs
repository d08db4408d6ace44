//! Lint for schemas and nested objects without fields.

use dashgen_core::FieldKind;
use dashgen_manifest::Interface;

use super::super::Lint;
use crate::{
    pipeline::Diagnostic,
    schema::{FieldPath, SchemaExt, SchemaVisitor},
};

/// Lint that warns when the schema, or a nested object in it, is empty.
///
/// Generation still succeeds; the artifacts just have no entity fields.
pub struct EmptySchemaLint;

impl Lint for EmptySchemaLint {
    fn name(&self) -> &'static str {
        "empty-schema"
    }

    fn description(&self) -> &'static str {
        "Warn about schemas and nested objects without fields"
    }

    fn check(&self, interface: &Interface, diagnostics: &mut Vec<Diagnostic>) {
        if interface.schema.is_empty() {
            diagnostics.push(
                Diagnostic::warning("validate", "schema has no fields").at("schema"),
            );
            return;
        }

        let mut visitor = EmptyObjects {
            counts: Vec::new(),
            diagnostics,
        };
        interface.schema.walk(&mut visitor);
    }
}

struct EmptyObjects<'a> {
    /// Field count of each object currently entered.
    counts: Vec<usize>,
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl EmptyObjects<'_> {
    fn count_child(&mut self) {
        if let Some(count) = self.counts.last_mut() {
            *count += 1;
        }
    }
}

impl SchemaVisitor for EmptyObjects<'_> {
    fn enter_object(&mut self, _path: &FieldPath) {
        self.count_child();
        self.counts.push(0);
    }

    fn visit_field(&mut self, _path: &FieldPath, _kind: &FieldKind) {
        self.count_child();
    }

    fn leave_object(&mut self, path: &FieldPath) {
        if self.counts.pop() == Some(0) {
            self.diagnostics.push(
                Diagnostic::warning("validate", format!("object '{}' has no fields", path))
                    .at(format!("schema.{}", path)),
            );
        }
    }
}
