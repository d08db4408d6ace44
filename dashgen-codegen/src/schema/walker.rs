//! Depth-first schema walker.
//!
//! Every consumer of nested schemas (form fields, TypeScript types, the
//! Mongoose model, search paths) goes through [`SchemaVisitor`] instead of
//! recursing on its own.

use std::fmt;

use dashgen_core::FieldKind;
use dashgen_manifest::{FieldType, Schema};

/// Path of a field from the schema root, e.g. `address.city`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// The empty path of the schema root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of the named field below this one.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment, or `""` for the root.
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// Number of enclosing objects (0 for top-level fields).
    pub fn depth(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments joined with `.`.
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

/// A primitive (non-object) field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafField {
    pub path: FieldPath,
    pub kind: FieldKind,
}

/// Callbacks for [`SchemaExt::walk`].
///
/// Fields are visited in input order. For a nested object the walker calls
/// `enter_object`, visits its fields, then calls `leave_object`; the schema
/// root itself is neither entered nor left.
pub trait SchemaVisitor {
    fn enter_object(&mut self, _path: &FieldPath) {}

    fn visit_field(&mut self, path: &FieldPath, kind: &FieldKind);

    fn leave_object(&mut self, _path: &FieldPath) {}
}

/// Traversal helpers on [`Schema`].
pub trait SchemaExt {
    /// Walk every field depth-first in input order.
    fn walk(&self, visitor: &mut dyn SchemaVisitor);

    /// All primitive fields with their full paths.
    fn leaf_fields(&self) -> Vec<LeafField>;

    /// Paths of all primitive fields.
    fn field_paths(&self) -> Vec<FieldPath> {
        self.leaf_fields().into_iter().map(|f| f.path).collect()
    }

    /// Paths of the fields free-text search applies to.
    fn search_paths(&self) -> Vec<FieldPath> {
        self.leaf_fields()
            .into_iter()
            .filter(|f| f.kind.is_searchable())
            .map(|f| f.path)
            .collect()
    }
}

impl SchemaExt for Schema {
    fn walk(&self, visitor: &mut dyn SchemaVisitor) {
        walk_level(self, &FieldPath::root(), visitor);
    }

    fn leaf_fields(&self) -> Vec<LeafField> {
        let mut collector = LeafCollector::default();
        self.walk(&mut collector);
        collector.fields
    }
}

fn walk_level(schema: &Schema, parent: &FieldPath, visitor: &mut dyn SchemaVisitor) {
    for (name, ty) in schema.iter() {
        let path = parent.child(name);
        match ty {
            FieldType::Tag(tag) => visitor.visit_field(&path, &FieldKind::parse(tag)),
            FieldType::Nested(nested) => {
                visitor.enter_object(&path);
                walk_level(nested, &path, visitor);
                visitor.leave_object(&path);
            }
        }
    }
}

#[derive(Default)]
struct LeafCollector {
    fields: Vec<LeafField>,
}

impl SchemaVisitor for LeafCollector {
    fn visit_field(&mut self, path: &FieldPath, kind: &FieldKind) {
        self.fields.push(LeafField {
            path: path.clone(),
            kind: kind.clone(),
        });
    }
}
