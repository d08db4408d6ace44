//! JavaScript object literal builder.

use dashgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::syntax::{property_key, string_literal};

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

impl Property {
    pub fn raw(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Raw(value.into()),
        }
    }

    pub fn object(key: impl Into<String>, value: JsObject) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Object(value),
        }
    }
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A literal string value (will be quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    /// A nested object.
    Object(JsObject),
    /// Shorthand `key` where the key names a variable in scope.
    Shorthand,
}

/// Builder for JavaScript/TypeScript object literals.
///
/// Keys are quoted automatically when they are not valid identifiers.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_properties(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a string property (value is quoted).
    pub fn string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::String(value.into()),
        });
        self
    }

    /// Add a raw expression property.
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::Raw(value.into()),
        });
        self
    }

    /// Add a nested object property.
    pub fn object(mut self, key: impl Into<String>, value: JsObject) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::Object(value),
        });
        self
    }

    /// Add a shorthand property.
    pub fn shorthand(mut self, name: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: name.into(),
            value: PropertyValue::Shorthand,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Wrap the object in a block: `{prefix}{` ... `}{suffix}`.
    ///
    /// An empty object renders as a single `{prefix}{}{suffix}` line.
    pub fn block(&self, prefix: &str, suffix: &str) -> CodeFragment {
        if self.properties.is_empty() {
            return CodeFragment::Line(format!("{}{{}}{}", prefix, suffix));
        }
        CodeFragment::Block {
            header: format!("{}{{", prefix),
            body: self.to_fragments(),
            close: Some(format!("}}{}", suffix)),
        }
    }

    /// Build the object literal as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(&self.block("", "")).build()
    }
}

impl Renderable for JsObject {
    /// The property lines, without surrounding braces.
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .map(|prop| {
                let key = property_key(&prop.key);
                match &prop.value {
                    PropertyValue::String(s) => {
                        CodeFragment::Line(format!("{}: {},", key, string_literal(s)))
                    }
                    PropertyValue::Raw(expr) => CodeFragment::Line(format!("{}: {},", key, expr)),
                    PropertyValue::Object(obj) => obj.block(&format!("{}: ", key), ","),
                    PropertyValue::Shorthand => CodeFragment::Line(format!("{},", prop.key)),
                }
            })
            .collect()
    }
}
