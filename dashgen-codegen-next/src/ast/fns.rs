//! TypeScript function builder.

use dashgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a TypeScript function.
///
/// `name` may be a destructuring pattern such as `{ params }`.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: Option<String>,
    pub optional: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
            optional: false,
        }
    }

    /// A parameter without a type annotation.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn render(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        match &self.ty {
            Some(ty) => format!("{}{}: {}", self.name, optional, ty),
            None => self.name.clone(),
        }
    }
}

/// Builder for TypeScript function declarations.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    exported: bool,
    default_export: bool,
    is_async: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            exported: true,
            default_export: false,
            is_async: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
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

    /// Declare as `export default function`.
    pub fn default_export(mut self) -> Self {
        self.exported = true;
        self.default_export = true;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body. An empty line adds a blank line.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        let line = line.into();
        if line.is_empty() {
            self.body.push(CodeFragment::Blank);
        } else {
            self.body.push(CodeFragment::Line(line));
        }
        self
    }

    /// Add raw body content (can contain multiple lines).
    ///
    /// Leading indentation of each line is kept relative to the body.
    pub fn body(mut self, content: impl AsRef<str>) -> Self {
        for line in content.as_ref().lines() {
            if line.trim().is_empty() {
                self.body.push(CodeFragment::Blank);
            } else {
                self.body.push(CodeFragment::Line(line.to_string()));
            }
        }
        self
    }

    /// Append any renderable node to the body.
    pub fn body_node(mut self, node: &(impl Renderable + ?Sized)) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    fn signature(&self) -> String {
        let export = match (self.exported, self.default_export) {
            (true, true) => "export default ",
            (true, false) => "export ",
            (false, _) => "",
        };
        let async_kw = if self.is_async { "async " } else { "" };
        let params = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!(
                "{}{}function {}({}): {} {{",
                export, async_kw, self.name, params, ret
            ),
            None => format!("{}{}function {}({}) {{", export, async_kw, self.name, params),
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(self).build()
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }
        fragments.push(CodeFragment::Block {
            header: self.signature(),
            body: self.body.clone(),
            close: Some("}".to_string()),
        });
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_function() {
        let code = Fn::new("escapeRegex")
            .private()
            .param(Param::new("value", "string"))
            .returns("string")
            .body_line("return value;")
            .build();
        assert_eq!(
            code,
            "function escapeRegex(value: string): string {\n  return value;\n}\n"
        );
    }

    #[test]
    fn test_async_default_export_with_doc() {
        let code = Fn::new("BooksPage")
            .doc("Paginated list of books.")
            .default_export()
            .async_()
            .param(Param::new("{ searchParams }", "PageProps"))
            .body_line("return null;")
            .build();
        assert!(code.starts_with("/** Paginated list of books. */\n"));
        assert!(code.contains(
            "export default async function BooksPage({ searchParams }: PageProps) {\n"
        ));
    }

    #[test]
    fn test_multiline_body_keeps_relative_indent() {
        let code = Fn::new("run")
            .body("if (ok) {\n  go();\n}\n\nstop();")
            .build();
        assert_eq!(
            code,
            "export function run() {\n  if (ok) {\n    go();\n  }\n\n  stop();\n}\n"
        );
    }

    #[test]
    fn test_optional_and_untyped_params() {
        let code = Fn::new("f")
            .param(Param::new("page", "number").optional())
            .param(Param::untyped("rest"))
            .build();
        assert!(code.starts_with("export function f(page?: number, rest) {"));
    }
}
