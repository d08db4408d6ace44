//! Resolved interface: the validated input every emitter consumes.

use dashgen_manifest::{Interface, Naming, OutputRoot, Schema, ValidationError};

use super::{FieldPath, LeafField, SchemaExt};

/// An interface whose naming has been validated and whose schema has
/// been flattened once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInterface {
    pub naming: Naming,
    pub schema: Schema,
    /// Primitive fields in input order.
    pub fields: Vec<LeafField>,
}

impl ResolvedInterface {
    pub fn new(naming: Naming, schema: Schema) -> Self {
        let fields = schema.leaf_fields();
        Self {
            naming,
            schema,
            fields,
        }
    }

    /// Validate an interface's naming and flatten its schema.
    pub fn resolve(interface: &Interface) -> Result<Self, ValidationError> {
        Ok(Self::new(interface.naming()?, interface.schema.clone()))
    }

    pub fn resource(&self) -> &str {
        self.naming.resource()
    }

    pub fn output_root(&self) -> OutputRoot {
        self.naming.output_root
    }

    pub fn field_paths(&self) -> impl Iterator<Item = &FieldPath> {
        self.fields.iter().map(|f| &f.path)
    }

    /// Paths of the fields list endpoints search in.
    pub fn search_paths(&self) -> impl Iterator<Item = &FieldPath> {
        self.fields
            .iter()
            .filter(|f| f.kind.is_searchable())
            .map(|f| &f.path)
    }
}

#[cfg(test)]
mod tests {
    use dashgen_manifest::NamingConvention;

    use super::*;

    #[test]
    fn test_resolve_flattens_fields() {
        let interface = Interface::new(
            Schema::new()
                .with_tag("title", "string")
                .with_nested("stats", Schema::new().with_tag("pages", "number")),
            NamingConvention::from_singular("book", None),
        );
        let resolved = ResolvedInterface::resolve(&interface).unwrap();

        assert_eq!(resolved.resource(), "books");
        let paths: Vec<_> = resolved.field_paths().map(FieldPath::dotted).collect();
        assert_eq!(paths, vec!["title", "stats.pages"]);
        let search: Vec<_> = resolved.search_paths().map(FieldPath::dotted).collect();
        assert_eq!(search, vec!["title"]);
    }

    #[test]
    fn test_resolve_rejects_missing_naming() {
        let interface = Interface::new(Schema::new(), NamingConvention::default());
        let err = ResolvedInterface::resolve(&interface).unwrap_err();
        assert_eq!(err.missing.len(), 3);
    }
}
