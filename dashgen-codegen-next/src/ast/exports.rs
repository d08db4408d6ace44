//! TypeScript export builder.

use dashgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for standalone export statements.
#[derive(Debug, Clone)]
pub struct Export {
    default: Option<String>,
    named: Vec<String>,
}

impl Export {
    pub fn new() -> Self {
        Self {
            default: None,
            named: Vec::new(),
        }
    }

    /// `export default name;`
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Add to `export { ... };`
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }
}

impl Default for Export {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !self.named.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "export {{ {} }};",
                self.named.join(", ")
            )));
        }
        if let Some(def) = &self.default {
            fragments.push(CodeFragment::Line(format!("export default {};", def)));
        }
        fragments
    }
}
