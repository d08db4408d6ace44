//! Lint for field names the generated code cannot address.

use dashgen_core::FieldKind;
use dashgen_manifest::Interface;

use super::super::Lint;
use crate::{
    pipeline::Diagnostic,
    schema::{FieldPath, SchemaExt, SchemaVisitor},
};

/// Lint that rejects empty field names, names containing `.` (which
/// collide with dotted field paths) and names starting with `$` (MongoDB
/// operators).
pub struct FieldNameLint;

impl Lint for FieldNameLint {
    fn name(&self) -> &'static str {
        "field-name"
    }

    fn description(&self) -> &'static str {
        "Check that field names are addressable by dotted paths"
    }

    fn check(&self, interface: &Interface, diagnostics: &mut Vec<Diagnostic>) {
        interface.schema.walk(&mut FieldNames { diagnostics });
    }
}

struct FieldNames<'a> {
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl FieldNames<'_> {
    fn check_name(&mut self, path: &FieldPath) {
        let name = path.name();
        let problem = if name.trim().is_empty() {
            "field name is empty".to_string()
        } else if name.contains('.') {
            format!("field name '{}' contains '.'", name)
        } else if name.starts_with('$') {
            format!("field name '{}' starts with '$'", name)
        } else {
            return;
        };
        self.diagnostics
            .push(Diagnostic::error("validate", problem).at(format!("schema.{}", path)));
    }
}

impl SchemaVisitor for FieldNames<'_> {
    fn enter_object(&mut self, path: &FieldPath) {
        self.check_name(path);
    }

    fn visit_field(&mut self, path: &FieldPath, _kind: &FieldKind) {
        self.check_name(path);
    }
}
