//! JSX element builder for generated React components.

use dashgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::syntax::string_literal;

/// Attributes beyond this count are written one per line.
const INLINE_ATTR_LIMIT: usize = 2;

/// A JSX attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Attr {
    /// `name="value"`
    Str(String),
    /// `name={expr}`
    Expr(String),
}

/// A child of a JSX element.
#[derive(Debug, Clone, PartialEq)]
pub enum JsxChild {
    Element(JsxElement),
    /// Literal text; characters JSX treats specially are wrapped in an expression.
    Text(String),
    /// `{expr}`
    Expr(String),
    /// Pre-rendered fragments, e.g. a `.map(...)` callback spanning lines.
    Fragments(Vec<CodeFragment>),
}

impl JsxChild {
    fn inline(&self) -> Option<String> {
        match self {
            JsxChild::Text(text) => Some(jsx_text(text)),
            JsxChild::Expr(expr) => Some(format!("{{{}}}", expr)),
            JsxChild::Element(_) | JsxChild::Fragments(_) => None,
        }
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            JsxChild::Element(el) => el.to_fragments(),
            JsxChild::Fragments(fragments) => fragments.clone(),
            other => other
                .inline()
                .map(CodeFragment::Line)
                .into_iter()
                .collect(),
        }
    }
}

fn jsx_text(text: &str) -> String {
    if text.contains(['{', '}', '<', '>']) {
        format!("{{{}}}", string_literal(text))
    } else {
        text.to_string()
    }
}

/// JSX attribute strings have no escapes, so values a plain `"..."` cannot
/// hold are written as a string expression.
fn jsx_attr_value(value: &str) -> String {
    if value.contains(['"', '\\', '\n']) {
        format!("{{{}}}", string_literal(value))
    } else {
        format!("\"{}\"", value)
    }
}

/// A JSX element.
#[derive(Debug, Clone, PartialEq)]
pub struct JsxElement {
    tag: String,
    attrs: Vec<(String, Attr)>,
    children: Vec<JsxChild>,
}

impl JsxElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a string attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), Attr::Str(value.into())));
        self
    }

    /// Add an expression attribute.
    pub fn attr_expr(mut self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.attrs.push((name.into(), Attr::Expr(expr.into())));
        self
    }

    pub fn child(mut self, child: JsxElement) -> Self {
        self.children.push(JsxChild::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = JsxElement>) -> Self {
        self.children
            .extend(children.into_iter().map(JsxChild::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(JsxChild::Text(text.into()));
        self
    }

    pub fn expr(mut self, expr: impl Into<String>) -> Self {
        self.children.push(JsxChild::Expr(expr.into()));
        self
    }

    pub fn fragments(mut self, fragments: Vec<CodeFragment>) -> Self {
        self.children.push(JsxChild::Fragments(fragments));
        self
    }

    fn attr_strings(&self) -> Vec<String> {
        self.attrs
            .iter()
            .map(|(name, value)| match value {
                Attr::Str(s) => format!("{}={}", name, jsx_attr_value(s)),
                Attr::Expr(e) => format!("{}={{{}}}", name, e),
            })
            .collect()
    }

    fn inline_open(&self) -> String {
        let mut open = format!("<{}", self.tag);
        for attr in self.attr_strings() {
            open.push(' ');
            open.push_str(&attr);
        }
        open
    }

    /// Wrap the element in `return ( ... );`.
    pub fn returned(&self) -> CodeFragment {
        CodeFragment::Block {
            header: "return (".to_string(),
            body: self.to_fragments(),
            close: Some(");".to_string()),
        }
    }

    /// Build the element as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(self).build()
    }
}

impl Renderable for JsxElement {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let close_tag = format!("</{}>", self.tag);
        let body: Vec<CodeFragment> = self
            .children
            .iter()
            .flat_map(JsxChild::to_fragments)
            .collect();

        if self.attrs.len() > INLINE_ATTR_LIMIT {
            let attrs = self
                .attr_strings()
                .into_iter()
                .map(CodeFragment::Line)
                .collect();
            let mut fragments = vec![
                CodeFragment::Line(format!("<{}", self.tag)),
                CodeFragment::Indent(attrs),
            ];
            if self.children.is_empty() {
                fragments.push(CodeFragment::line("/>"));
            } else {
                fragments.push(CodeFragment::line(">"));
                fragments.push(CodeFragment::Indent(body));
                fragments.push(CodeFragment::Line(close_tag));
            }
            return fragments;
        }

        let open = self.inline_open();
        match self.children.as_slice() {
            [] => vec![CodeFragment::Line(format!("{} />", open))],
            [only] => match only.inline() {
                Some(inline) => vec![CodeFragment::Line(format!(
                    "{}>{}{}",
                    open, inline, close_tag
                ))],
                None => vec![CodeFragment::Block {
                    header: format!("{}>", open),
                    body,
                    close: Some(close_tag),
                }],
            },
            _ => vec![CodeFragment::Block {
                header: format!("{}>", open),
                body,
                close: Some(close_tag),
            }],
        }
    }
}
