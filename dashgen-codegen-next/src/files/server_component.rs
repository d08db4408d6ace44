//! `components/ServerComponent.tsx`: renders rich text on the server.

use std::path::{Path, PathBuf};

use dashgen_core::GeneratedFile;
use dashgen_manifest::Naming;

use crate::{
    CodeFile,
    ast::{Fn, Import, Interface, JsxElement, Param},
};

/// Module the host project provides the viewer from.
const RICH_TEXT_VIEWER: &str = "@/components/RichTextViewer";

pub struct ServerComponent<'a> {
    naming: &'a Naming,
}

impl<'a> ServerComponent<'a> {
    pub fn new(naming: &'a Naming) -> Self {
        Self { naming }
    }
}

impl GeneratedFile for ServerComponent<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!(
            "{}/components/ServerComponent.tsx",
            self.naming.resource_dir()
        ))
    }

    fn render(&self) -> String {
        let viewer = JsxElement::new("RichTextViewer").attr_expr("content", "content");

        CodeFile::generated()
            .import(Import::new(RICH_TEXT_VIEWER).default("RichTextViewer"))
            .add(Interface::new("ServerComponentProps").field("content", "string"))
            .add(
                Fn::new("ServerComponent")
                    .default_export()
                    .param(Param::new("{ content }", "ServerComponentProps"))
                    .body_node(&viewer.returned()),
            )
            .render()
    }
}
