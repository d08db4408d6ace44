//! TypeScript interface builder.

use dashgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::syntax::property_key;

/// The type of an interface field.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// A type written out verbatim, e.g. `string[]`.
    Named(String),
    /// An inline object type.
    Object(Vec<TypeField>),
}

impl TypeExpr {
    pub fn named(ty: impl Into<String>) -> Self {
        Self::Named(ty.into())
    }
}

/// A field in an interface or inline object type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeField {
    pub name: String,
    pub ty: TypeExpr,
    pub optional: bool,
}

impl TypeField {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn to_fragment(&self) -> CodeFragment {
        let optional = if self.optional { "?" } else { "" };
        let key = property_key(&self.name);
        match &self.ty {
            TypeExpr::Named(ty) => CodeFragment::Line(format!("{}{}: {};", key, optional, ty)),
            TypeExpr::Object(fields) if fields.is_empty() => {
                CodeFragment::Line(format!("{}{}: {{}};", key, optional))
            }
            TypeExpr::Object(fields) => CodeFragment::Block {
                header: format!("{}{}: {{", key, optional),
                body: fields.iter().map(TypeField::to_fragment).collect(),
                close: Some("};".to_string()),
            },
        }
    }
}

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: Option<String>,
    exported: bool,
    fields: Vec<TypeField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            exported: true,
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Add a field with a verbatim type.
    pub fn field(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.typed_field(TypeField::new(name, TypeExpr::Named(ty.into())))
    }

    /// Add an optional field with a verbatim type.
    pub fn optional_field(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.typed_field(TypeField::new(name, TypeExpr::Named(ty.into())).optional())
    }

    pub fn typed_field(mut self, field: TypeField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = TypeField>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(self).build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }
        fragments.push(CodeFragment::Block {
            header: format!("{}interface {} {{", export, self.name),
            body: self.fields.iter().map(TypeField::to_fragment).collect(),
            close: Some("}".to_string()),
        });
        fragments
    }
}
