//! `components/CustomLink.tsx`: a link component with `name`/`url` props.
//!
//! The output does not depend on the interface.

use std::path::{Path, PathBuf};

use dashgen_core::GeneratedFile;
use dashgen_manifest::Naming;

use crate::{
    CodeFile,
    ast::{Fn, Import, Interface, JsxElement, Param},
};

pub struct CustomLink<'a> {
    naming: &'a Naming,
}

impl<'a> CustomLink<'a> {
    /// `naming` only decides where the file is written.
    pub fn new(naming: &'a Naming) -> Self {
        Self { naming }
    }
}

impl GeneratedFile for CustomLink<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!(
            "{}/components/CustomLink.tsx",
            self.naming.resource_dir()
        ))
    }

    fn render(&self) -> String {
        let props = Interface::new("CustomLinkProps")
            .field("name", "string")
            .field("url", "string");
        let link = JsxElement::new("Link")
            .attr_expr("href", "url")
            .attr("className", "custom-link")
            .expr("name");

        CodeFile::generated()
            .import(Import::new("next/link").default("Link"))
            .add(props)
            .add(
                Fn::new("CustomLink")
                    .default_export()
                    .param(Param::new("{ name, url }", "CustomLinkProps"))
                    .body_node(&link.returned()),
            )
            .render()
    }
}
