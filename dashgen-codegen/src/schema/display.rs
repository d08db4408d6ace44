//! Schema tree display formatting.
//!
//! ```text
//! title: string
//! address
//!   city: string
//! published: boolean
//! ```

use std::fmt;

use dashgen_core::FieldKind;
use dashgen_manifest::Schema;

use super::{FieldPath, SchemaExt, SchemaVisitor};

/// Indented tree view of a schema.
#[derive(Debug, Clone)]
pub struct SchemaTreeDisplay<'a> {
    schema: &'a Schema,
    indent_str: &'a str,
    prefix: &'a str,
}

impl<'a> SchemaTreeDisplay<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            indent_str: "  ",
            prefix: "",
        }
    }

    /// Set the per-level indentation (default: two spaces).
    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent_str = indent;
        self
    }

    /// Prepend `prefix` to every line.
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn render(&self) -> String {
        let mut lines = TreeLines {
            display: self,
            output: String::new(),
        };
        self.schema.walk(&mut lines);
        lines.output
    }
}

impl fmt::Display for SchemaTreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

struct TreeLines<'d, 'a> {
    display: &'d SchemaTreeDisplay<'a>,
    output: String,
}

impl TreeLines<'_, '_> {
    fn push(&mut self, path: &FieldPath, text: &str) {
        self.output.push_str(self.display.prefix);
        self.output
            .push_str(&self.display.indent_str.repeat(path.depth()));
        self.output.push_str(text);
        self.output.push('\n');
    }
}

impl SchemaVisitor for TreeLines<'_, '_> {
    fn enter_object(&mut self, path: &FieldPath) {
        self.push(path, path.name());
    }

    fn visit_field(&mut self, path: &FieldPath, kind: &FieldKind) {
        self.push(path, &format!("{}: {}", path.name(), kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let schema = Schema::new()
            .with_tag("title", "string")
            .with_nested("address", Schema::new().with_tag("city", "string"))
            .with_tag("tags", "string[]");

        assert_eq!(
            SchemaTreeDisplay::new(&schema).render(),
            "title: string\naddress\n  city: string\ntags: string[]\n"
        );
    }

    #[test]
    fn test_prefix_and_indent() {
        let schema =
            Schema::new().with_nested("meta", Schema::new().with_tag("views", "number"));
        let text = SchemaTreeDisplay::new(&schema)
            .indent("    ")
            .prefix("| ")
            .to_string();
        assert_eq!(text, "| meta\n|     views: number\n");
    }

    #[test]
    fn test_empty_schema_renders_nothing() {
        assert_eq!(SchemaTreeDisplay::new(&Schema::new()).render(), "");
    }
}
