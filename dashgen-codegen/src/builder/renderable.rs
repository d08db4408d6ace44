//! Code fragments: the intermediate form between AST nodes and text.
//!
//! AST nodes produce fragments; [`CodeBuilder`](super::CodeBuilder) lays
//! them out. A node never knows the indentation it ends up at.

/// A piece of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// One line; the builder adds indentation and the newline.
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// `header`, the body one level deeper, then `close` if any.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// The contained fragments, one level deeper.
    Indent(Vec<CodeFragment>),
    /// A JSDoc comment. Multi-line text becomes a `/** ... */` block.
    JsDoc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    pub fn jsdoc(s: impl Into<String>) -> Self {
        Self::JsDoc(s.into())
    }
}

/// Anything that can be laid out by a [`CodeBuilder`](super::CodeBuilder).
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}

impl<T: Renderable> Renderable for Vec<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_slice().to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_without_close() {
        let block = CodeFragment::block("case 1:", vec![CodeFragment::line("break;")], None);
        let CodeFragment::Block { header, body, close } = block else {
            panic!("expected block");
        };
        assert_eq!(header, "case 1:");
        assert_eq!(body, vec![CodeFragment::line("break;")]);
        assert!(close.is_none());
    }

    #[test]
    fn test_slices_flatten() {
        let nodes = vec![
            vec![CodeFragment::line("a"), CodeFragment::blank()],
            vec![CodeFragment::line("b")],
        ];
        let fragments = nodes.to_fragments();
        assert_eq!(
            fragments,
            vec![
                CodeFragment::line("a"),
                CodeFragment::Blank,
                CodeFragment::line("b")
            ]
        );
    }
}
