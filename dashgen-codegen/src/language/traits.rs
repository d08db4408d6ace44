//! Target-agnostic code generation traits.

use std::path::Path;

use dashgen_core::{FieldKind, PersistenceError};

use crate::generation::FileRegistry;

/// Trait for target code generators.
///
/// A generator only describes its files through [`registry`](Self::registry);
/// preview and generation are derived from it.
pub trait LanguageCodegen {
    /// Language identifier (e.g. "typescript")
    fn language(&self) -> &'static str;

    /// Register every file this generator produces.
    fn registry(&self) -> FileRegistry;

    /// Preview generated files without writing to disk.
    fn preview(&self) -> Vec<PreviewFile> {
        self.registry()
            .preview()
            .into_iter()
            .map(|entry| PreviewFile {
                path: entry.path,
                content: entry.content,
            })
            .collect()
    }

    /// Generate all files into the specified output directory.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult, PersistenceError> {
        let stats = self.registry().write_all(output_dir)?;
        Ok(GenerateResult {
            written: stats.written_paths,
            skipped: stats.skipped_paths,
        })
    }
}

/// Result of code generation.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, relative to the output directory.
    pub written: Vec<String>,
    /// Files left untouched because they already existed.
    pub skipped: Vec<String>,
}

/// A generated file for preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    pub content: String,
}

/// Maps schema field kinds to type strings of one target.
pub trait TypeMapper {
    /// Name of the target type system (e.g. "typescript", "mongoose")
    fn target(&self) -> &'static str;

    fn map_kind(&self, kind: &FieldKind) -> String;
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::generation::FileEntry;

    struct Fixed;

    impl LanguageCodegen for Fixed {
        fn language(&self) -> &'static str {
            "typescript"
        }

        fn registry(&self) -> FileRegistry {
            let mut registry = FileRegistry::new();
            registry.register(FileEntry::page("app/page.tsx", "page"));
            registry.register(FileEntry::model("models/Book.ts", "model"));
            registry
        }
    }

    #[test]
    fn test_preview_in_category_order() {
        let preview = Fixed.preview();
        assert_eq!(preview[0].path, "models/Book.ts");
        assert_eq!(preview[1].content, "page");
    }

    #[test]
    fn test_generate_writes_registry() {
        let temp = TempDir::new().unwrap();
        let result = Fixed.generate(temp.path()).unwrap();
        assert_eq!(result.written, vec!["models/Book.ts", "app/page.tsx"]);
        assert!(temp.path().join("app/page.tsx").exists());
    }
}
