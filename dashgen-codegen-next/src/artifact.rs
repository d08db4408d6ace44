//! Artifact kinds emitted by the Next.js generator.

use std::{fmt, str::FromStr};

use dashgen_codegen::generation::FileCategory;
use thiserror::Error;

/// One kind of generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Artifact {
    HomeButton,
    CustomLink,
    ServerComponent,
    Fields,
    ListPage,
    Types,
    Store,
    Model,
    Controller,
    Route,
    ItemRoute,
    /// Shared database connection helper, written once per project.
    Db,
}

/// An artifact name that does not match any [`Artifact`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown artifact '{name}' (expected one of: {})", Artifact::names().join(", "))]
pub struct UnknownArtifact {
    pub name: String,
}

impl Artifact {
    /// Every artifact, in generation order.
    pub const ALL: [Artifact; 12] = [
        Artifact::HomeButton,
        Artifact::CustomLink,
        Artifact::ServerComponent,
        Artifact::Fields,
        Artifact::ListPage,
        Artifact::Types,
        Artifact::Store,
        Artifact::Model,
        Artifact::Controller,
        Artifact::Route,
        Artifact::ItemRoute,
        Artifact::Db,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Artifact::HomeButton => "home-button",
            Artifact::CustomLink => "custom-link",
            Artifact::ServerComponent => "server-component",
            Artifact::Fields => "fields",
            Artifact::ListPage => "list-page",
            Artifact::Types => "types",
            Artifact::Store => "store",
            Artifact::Model => "model",
            Artifact::Controller => "controller",
            Artifact::Route => "route",
            Artifact::ItemRoute => "item-route",
            Artifact::Db => "db",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Artifact::as_str).collect()
    }

    /// Registry category, which fixes the write order.
    pub fn category(&self) -> FileCategory {
        match self {
            Artifact::Model | Artifact::Db => FileCategory::Model,
            Artifact::Controller | Artifact::Route | Artifact::ItemRoute => FileCategory::Api,
            Artifact::Types | Artifact::Store => FileCategory::State,
            Artifact::HomeButton
            | Artifact::CustomLink
            | Artifact::ServerComponent
            | Artifact::Fields => FileCategory::Component,
            Artifact::ListPage => FileCategory::Page,
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Artifact {
    type Err = UnknownArtifact;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|artifact| artifact.as_str() == s)
            .ok_or_else(|| UnknownArtifact {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_name() {
        for artifact in Artifact::ALL {
            assert_eq!(artifact.as_str().parse::<Artifact>(), Ok(artifact));
        }
    }

    #[test]
    fn test_unknown_artifact() {
        let err = "page".parse::<Artifact>().unwrap_err();
        assert_eq!(err.name, "page");
        assert!(err.to_string().contains("home-button, custom-link"));
    }

    #[test]
    fn test_categories() {
        assert_eq!(Artifact::Model.category(), FileCategory::Model);
        assert_eq!(Artifact::ItemRoute.category(), FileCategory::Api);
        assert_eq!(Artifact::ListPage.category(), FileCategory::Page);
    }
}
