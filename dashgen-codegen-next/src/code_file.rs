//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with a
//! header comment, an optional directive, organized imports, body
//! content, and exports sections.

use dashgen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::{Export, Import};

/// First line of every generated file that is regenerated on each run.
pub const GENERATED_HEADER: &str =
    "// Generated by dashgen. Changes are overwritten on the next run.";

/// A structured representation of a TypeScript file.
///
/// Sections are rendered in order, separated by blank lines:
/// header, directive, imports, body, exports.
///
/// # Example
///
/// ```
/// use dashgen_codegen_next::{CodeFile, RawCode, ast::Import};
///
/// let code = CodeFile::new()
///     .import(Import::new("next/link").default("Link"))
///     .add(RawCode::new("const x = 1;"))
///     .render();
///
/// assert_eq!(code, "import Link from \"next/link\";\n\nconst x = 1;\n");
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Option<String>,
    directive: Option<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// A file starting with [`GENERATED_HEADER`].
    pub fn generated() -> Self {
        Self::new().header(GENERATED_HEADER)
    }

    /// Set the leading comment line.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add the `"use client"` directive.
    pub fn use_client(mut self) -> Self {
        self.directive = Some("\"use client\";".to_string());
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, node: impl Renderable) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add an export statement.
    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut sections = 0;

        let mut separate = |builder: &mut CodeBuilder| {
            if sections > 0 {
                builder.push_blank();
            }
            sections += 1;
        };

        if let Some(header) = &self.header {
            separate(&mut builder);
            builder.push_line(header);
        }

        if let Some(directive) = &self.directive {
            separate(&mut builder);
            builder.push_line(directive);
        }

        if !self.imports.is_empty() {
            separate(&mut builder);
            for import in &self.imports {
                builder.emit(import);
            }
        }

        for fragments in &self.body {
            separate(&mut builder);
            builder.emit(fragments);
        }

        if !self.exports.is_empty() {
            separate(&mut builder);
            for export in &self.exports {
                builder.emit(export);
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none()
            && self.directive.is_none()
            && self.imports.is_empty()
            && self.body.is_empty()
            && self.exports.is_empty()
    }
}

/// A raw code fragment that implements Renderable.
///
/// Lines keep their leading whitespace relative to the current indent;
/// empty lines become blank lines.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Create a raw code fragment from multiple lines.
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| {
                if line.trim().is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::Line(line.to_string())
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_header_and_directive_come_first() {
        let code = CodeFile::generated()
            .use_client()
            .import(Import::new("react").named("useState"))
            .render();
        assert_eq!(
            code,
            format!(
                "{}\n\n\"use client\";\n\nimport {{ useState }} from \"react\";\n",
                GENERATED_HEADER
            )
        );
    }

    #[test]
    fn test_blank_lines_between_body() {
        let code = CodeFile::new()
            .add(RawCode::new("const a = 1;"))
            .add(RawCode::new("const b = 2;"))
            .render();
        assert_eq!(code, "const a = 1;\n\nconst b = 2;\n");
    }

    #[test]
    fn test_exports_last() {
        let code = CodeFile::new()
            .add(RawCode::new("const Book = 1;"))
            .export(Export::new().default("Book"))
            .render();
        assert_eq!(code, "const Book = 1;\n\nexport default Book;\n");
    }

    #[test]
    fn test_raw_code_lines_and_blanks() {
        let fragments = RawCode::lines(["a();", "", "  b();"]).to_fragments();
        assert_eq!(
            fragments,
            vec![
                CodeFragment::line("a();"),
                CodeFragment::Blank,
                CodeFragment::line("  b();"),
            ]
        );
    }
}
