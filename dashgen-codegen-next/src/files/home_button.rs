//! `components/HomeButton.tsx`: link back to the resource's list page.

use std::path::{Path, PathBuf};

use dashgen_core::GeneratedFile;
use dashgen_manifest::Naming;

use crate::{
    CodeFile,
    ast::{Fn, Import, JsxElement},
};

pub struct HomeButton<'a> {
    naming: &'a Naming,
}

impl<'a> HomeButton<'a> {
    pub fn new(naming: &'a Naming) -> Self {
        Self { naming }
    }

    /// Always the dashboard route, whichever output root the files use.
    pub fn href(&self) -> String {
        format!("/dashboard/{}/all", self.naming.resource())
    }
}

impl GeneratedFile for HomeButton<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!(
            "{}/components/HomeButton.tsx",
            self.naming.resource_dir()
        ))
    }

    fn render(&self) -> String {
        let link = JsxElement::new("Link")
            .attr("href", self.href())
            .attr("className", "home-button")
            .text(format!("All {}", self.naming.plural_pascal));

        CodeFile::generated()
            .import(Import::new("next/link").default("Link"))
            .add(
                Fn::new("HomeButton")
                    .default_export()
                    .body_node(&link.returned()),
            )
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::fixtures;

    #[test]
    fn test_links_to_list_page() {
        let books = fixtures::books();
        let code = HomeButton::new(&books.naming).render();
        assert!(code.contains(
            "<Link href=\"/dashboard/books/all\" className=\"home-button\">All Books</Link>"
        ));
        assert!(code.contains("export default function HomeButton() {"));
    }

    #[test]
    fn test_path_under_resource_components() {
        let books = fixtures::books();
        let path = HomeButton::new(&books.naming).path(Path::new("out"));
        assert_eq!(
            path,
            Path::new("out/src/app/dashboard/books/components/HomeButton.tsx")
        );
    }
}
