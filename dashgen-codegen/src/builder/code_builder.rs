//! Indentation-aware text buffer.

use super::{CodeFragment, Indent, Renderable};

/// Builds indented source text line by line.
///
/// Chaining methods consume the builder; the `push_*` methods and
/// [`emit`](Self::emit) work through `&mut self` for use in loops.
///
/// ```
/// use dashgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("export default function Page() {")
///     .indent()
///     .line("return null;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "export default function Page() {\n  return null;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    unit: Indent,
    level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(unit: Indent) -> Self {
        Self {
            unit,
            level: 0,
            buffer: String::new(),
        }
    }

    /// Builder with two-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.unit.write(&mut self.buffer, self.level);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Lay out every fragment of `node` at the current level.
    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply(fragment);
        }
        self
    }

    fn apply(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.nested(body);
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Indent(body) => self.nested(body),
            CodeFragment::JsDoc(text) => self.push_jsdoc(&text),
        }
    }

    fn nested(&mut self, body: Vec<CodeFragment>) {
        self.push_indent();
        for fragment in body {
            self.apply(fragment);
        }
        self.push_dedent();
    }

    fn push_jsdoc(&mut self, text: &str) {
        let lines: Vec<&str> = text.lines().collect();
        if let [single] = lines.as_slice() {
            self.push_line(&format!("/** {} */", single));
            return;
        }
        self.push_line("/**");
        for line in lines {
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", line));
            }
        }
        self.push_line(" */");
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    pub fn node(mut self, node: &(impl Renderable + ?Sized)) -> Self {
        self.emit(node);
        self
    }

    /// Consume the builder and return the text.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}
