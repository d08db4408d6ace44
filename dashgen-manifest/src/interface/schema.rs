//! Entity schema: field name to type tag, possibly nested.

use std::fmt;

use dashgen_core::FieldKind;
use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, MapAccess, Visitor},
};

/// Mapping from field name to [`FieldType`], in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schema {
    fields: IndexMap<String, FieldType>,
}

/// The type of a schema field: a primitive type tag or a nested schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldType {
    Tag(String),
    Nested(Schema),
}

impl FieldType {
    /// The primitive kind of a tag, or `None` for nested objects.
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            FieldType::Tag(tag) => Some(FieldKind::parse(tag)),
            FieldType::Nested(_) => None,
        }
    }
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any previous field of the same name.
    pub fn with_field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    /// Add a primitive field by type tag.
    pub fn with_tag(self, name: impl Into<String>, tag: impl Into<String>) -> Self {
        self.with_field(name, FieldType::Tag(tag.into()))
    }

    /// Add a nested object field.
    pub fn with_nested(self, name: impl Into<String>, nested: Schema) -> Self {
        self.with_field(name, FieldType::Nested(nested))
    }

    pub fn get(&self, name: &str) -> Option<&FieldType> {
        self.fields.get(name)
    }

    /// Iterate over the fields of this level in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldType)> {
        self.fields.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SchemaMapVisitor)
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldTypeVisitor)
    }
}

struct SchemaMapVisitor;

impl<'de> Visitor<'de> for SchemaMapVisitor {
    type Value = Schema;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping field names to type tags or nested objects")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Schema, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut fields = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, ty)) = map.next_entry::<String, FieldType>()? {
            if fields.contains_key(&name) {
                return Err(de::Error::custom(format!("duplicate field '{}'", name)));
            }
            fields.insert(name, ty);
        }
        Ok(Schema { fields })
    }
}

struct FieldTypeVisitor;

impl<'de> Visitor<'de> for FieldTypeVisitor {
    type Value = FieldType;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a type tag string or a nested object")
    }

    fn visit_str<E>(self, value: &str) -> Result<FieldType, E>
    where
        E: de::Error,
    {
        Ok(FieldType::Tag(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<FieldType, E>
    where
        E: de::Error,
    {
        Ok(FieldType::Tag(value))
    }

    fn visit_map<A>(self, map: A) -> Result<FieldType, A::Error>
    where
        A: MapAccess<'de>,
    {
        SchemaMapVisitor.visit_map(map).map(FieldType::Nested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_input_order() {
        let schema: Schema =
            serde_json::from_str(r#"{"title":"string","author":"string","pages":"number"}"#)
                .unwrap();
        let names: Vec<_> = schema.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["title", "author", "pages"]);
    }

    #[test]
    fn test_nested_schema() {
        let schema: Schema =
            serde_json::from_str(r#"{"address":{"city":"string","zip":"number"}}"#).unwrap();
        let Some(FieldType::Nested(address)) = schema.get("address") else {
            panic!("expected nested address");
        };
        assert_eq!(address.len(), 2);
        assert_eq!(address.get("zip").and_then(FieldType::kind), Some(FieldKind::Number));
    }

    #[test]
    fn test_rejects_non_string_tags() {
        let result = serde_json::from_str::<Schema>(r#"{"pages": 12}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_duplicate_fields() {
        let err = serde_json::from_str::<Schema>(r#"{"title":"string","title":"number"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate field 'title'"));
    }

    #[test]
    fn test_serializes_back_to_json() {
        let schema = Schema::new()
            .with_tag("title", "string")
            .with_nested("meta", Schema::new().with_tag("views", "number"));
        let json = serde_json::to_string(&schema).unwrap();
        assert_eq!(json, r#"{"title":"string","meta":{"views":"number"}}"#);
    }
}
