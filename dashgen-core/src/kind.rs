//! Primitive field kinds recognised in interface schemas.

use std::fmt;

/// The kind of a leaf field in a schema.
///
/// This is a framework-agnostic representation of the type tags found in
/// interface descriptions. Type mappers convert it to TypeScript types,
/// Mongoose schema types and form input types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Date,
    /// A homogeneous list, written as `<tag>[]`.
    Array(Box<FieldKind>),
    /// A tag the generator does not know. Kept verbatim.
    Other(String),
}

impl FieldKind {
    /// Parse a type tag. Matching is case-insensitive and never fails.
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        if let Some(inner) = tag.strip_suffix("[]") {
            return FieldKind::Array(Box::new(FieldKind::parse(inner)));
        }
        match tag.to_lowercase().as_str() {
            "string" | "text" => FieldKind::String,
            "number" | "int" | "float" => FieldKind::Number,
            "boolean" | "bool" => FieldKind::Boolean,
            "date" => FieldKind::Date,
            _ => FieldKind::Other(tag.to_string()),
        }
    }

    /// Whether this kind (or any element kind) is an unknown tag.
    pub fn is_known(&self) -> bool {
        match self {
            FieldKind::Array(inner) => inner.is_known(),
            FieldKind::Other(_) => false,
            _ => true,
        }
    }

    /// Whether free-text search applies to fields of this kind.
    pub fn is_searchable(&self) -> bool {
        matches!(self, FieldKind::String)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => write!(f, "string"),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Boolean => write!(f, "boolean"),
            FieldKind::Date => write!(f, "date"),
            FieldKind::Array(inner) => write!(f, "{}[]", inner),
            FieldKind::Other(tag) => write!(f, "{}", tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primitives() {
        assert_eq!(FieldKind::parse("string"), FieldKind::String);
        assert_eq!(FieldKind::parse("String"), FieldKind::String);
        assert_eq!(FieldKind::parse("number"), FieldKind::Number);
        assert_eq!(FieldKind::parse("bool"), FieldKind::Boolean);
        assert_eq!(FieldKind::parse("Date"), FieldKind::Date);
    }

    #[test]
    fn test_parse_arrays() {
        assert_eq!(
            FieldKind::parse("string[]"),
            FieldKind::Array(Box::new(FieldKind::String))
        );
        assert_eq!(FieldKind::parse("number[]").to_string(), "number[]");
    }

    #[test]
    fn test_unknown_tags_are_kept() {
        let kind = FieldKind::parse("ObjectId");
        assert_eq!(kind, FieldKind::Other("ObjectId".to_string()));
        assert!(!kind.is_known());
        assert!(!FieldKind::parse("ObjectId[]").is_known());
        assert_eq!(kind.to_string(), "ObjectId");
    }

    #[test]
    fn test_searchable() {
        assert!(FieldKind::String.is_searchable());
        assert!(!FieldKind::Number.is_searchable());
        assert!(!FieldKind::parse("string[]").is_searchable());
    }
}
