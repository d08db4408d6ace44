//! Next.js dashboard generator.

use dashgen_codegen::{
    generation::{FileEntry, FileRegistry},
    language::LanguageCodegen,
    schema::ResolvedInterface,
};
use log::debug;

use crate::{
    Artifact, GeneratorOptions,
    files::{
        Controller, CustomLink, Db, Fields, HomeButton, ItemRoute, ListPage, Model, Route,
        ServerComponent, Store, Types,
    },
};

/// Generator producing a CRUD feature (model, API, state, UI) for one resource.
pub struct Generator<'a> {
    resolved: &'a ResolvedInterface,
    options: GeneratorOptions,
    only: Option<Vec<Artifact>>,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn registry(&self) -> FileRegistry {
        let mut registry = FileRegistry::new();
        for artifact in self.artifacts() {
            registry.register(self.render(artifact));
        }
        registry
    }
}

impl<'a> Generator<'a> {
    pub fn new(resolved: &'a ResolvedInterface) -> Self {
        Self {
            resolved,
            options: GeneratorOptions::default(),
            only: None,
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Restrict generation to `artifacts`. An empty list means all.
    pub fn only(mut self, artifacts: Vec<Artifact>) -> Self {
        self.only = if artifacts.is_empty() {
            None
        } else {
            Some(artifacts)
        };
        self
    }

    /// Selected artifacts in [`Artifact::ALL`] order, without duplicates.
    pub fn artifacts(&self) -> Vec<Artifact> {
        Artifact::ALL
            .into_iter()
            .filter(|artifact| {
                self.only
                    .as_ref()
                    .is_none_or(|only| only.contains(artifact))
            })
            .collect()
    }

    /// Render one artifact as a registry entry.
    pub fn render(&self, artifact: Artifact) -> FileEntry {
        let resolved = self.resolved;
        let naming = &resolved.naming;
        let options = &self.options;
        let category = artifact.category();

        debug!("rendering {} for '{}'", artifact, resolved.resource());
        match artifact {
            Artifact::HomeButton => FileEntry::from_generated(&HomeButton::new(naming), category),
            Artifact::CustomLink => FileEntry::from_generated(&CustomLink::new(naming), category),
            Artifact::ServerComponent => {
                FileEntry::from_generated(&ServerComponent::new(naming), category)
            }
            Artifact::Fields => FileEntry::from_generated(&Fields::new(resolved), category),
            Artifact::ListPage => {
                FileEntry::from_generated(&ListPage::new(resolved, options), category)
            }
            Artifact::Types => FileEntry::from_generated(&Types::new(resolved), category),
            Artifact::Store => FileEntry::from_generated(&Store::new(resolved, options), category),
            Artifact::Model => FileEntry::from_generated(&Model::new(resolved), category),
            Artifact::Controller => {
                FileEntry::from_generated(&Controller::new(resolved, options), category)
            }
            Artifact::Route => FileEntry::from_generated(&Route::new(resolved, options), category),
            Artifact::ItemRoute => {
                FileEntry::from_generated(&ItemRoute::new(resolved, options), category)
            }
            Artifact::Db => FileEntry::from_generated(&Db, category),
        }
    }
}

#[cfg(test)]
mod tests {
    use dashgen_core::Overwrite;

    use super::*;
    use crate::files::fixtures;

    #[test]
    fn test_registers_every_artifact() {
        let books = fixtures::books();
        let registry = Generator::new(&books).registry();
        assert_eq!(registry.len(), Artifact::ALL.len());
        assert!(registry.get("src/app/dashboard/books/components/HomeButton.tsx").is_some());
        assert!(registry.get("src/app/api/v1/books/[id]/route.ts").is_some());
    }

    #[test]
    fn test_only_selected_artifacts() {
        let books = fixtures::books();
        let generator = Generator::new(&books).only(vec![Artifact::Types, Artifact::HomeButton]);
        assert_eq!(
            generator.artifacts(),
            vec![Artifact::HomeButton, Artifact::Types]
        );
        assert_eq!(generator.preview().len(), 2);
    }

    #[test]
    fn test_db_helper_is_created_once() {
        let books = fixtures::books();
        let entry = Generator::new(&books).render(Artifact::Db);
        assert_eq!(entry.path, "src/lib/db.ts");
        assert_eq!(entry.overwrite, Overwrite::IfMissing);
    }

    #[test]
    fn test_models_come_first() {
        let books = fixtures::books();
        let preview = Generator::new(&books).preview();
        assert_eq!(preview[0].path, "src/models/Book.ts");
        assert_eq!(preview.last().map(|f| f.path.as_str()), Some("src/app/dashboard/books/all/page.tsx"));
    }
}
