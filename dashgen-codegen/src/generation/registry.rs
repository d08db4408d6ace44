//! File registration pattern for declarative code generation.
//!
//! Generators register every artifact as a [`FileEntry`] and the registry
//! either previews them or writes them under an output directory.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//!
//! registry.register(FileEntry::model("src/models/Book.ts", model.render()));
//! registry.register(FileEntry::page("src/app/dashboard/books/all/page.tsx", page.render()));
//!
//! let stats = registry.write_all(&output_dir)?;
//! ```

use std::path::{Path, PathBuf};

use dashgen_core::{File, GeneratedFile, Overwrite, PersistenceError, WriteResult};
use log::debug;

/// Category of generated file, determining generation order.
///
/// Data layer first, UI last, so a partially written feature is missing
/// its pages rather than the model those pages depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileCategory {
    /// Mongoose models (`src/models/*`).
    Model,
    /// API controller and route handlers (`src/app/api/*`).
    Api,
    /// Client-side types and store.
    State,
    /// React components.
    Component,
    /// Next.js pages.
    Page,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Model => "model",
            FileCategory::Api => "api",
            FileCategory::State => "state",
            FileCategory::Component => "component",
            FileCategory::Page => "page",
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry in the file registry representing a file to be generated.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative path from output directory.
    pub path: String,
    pub content: String,
    pub category: FileCategory,
    pub overwrite: Overwrite,
}

impl FileEntry {
    /// Create a new file entry. Generated files always overwrite.
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        category: FileCategory,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
            overwrite: Overwrite::Always,
        }
    }

    pub fn model(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Model)
    }

    pub fn api(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Api)
    }

    pub fn state(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::State)
    }

    pub fn component(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Component)
    }

    pub fn page(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Page)
    }

    /// Render a [`GeneratedFile`] into an entry, keeping its path and rules.
    pub fn from_generated(file: &impl GeneratedFile, category: FileCategory) -> Self {
        let path = file.path(Path::new(""));
        Self::new(path.to_string_lossy(), file.render(), category)
            .with_overwrite(file.rules().overwrite)
    }

    /// Override the overwrite behavior.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn full_path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    /// Write this file to disk, creating parent directories.
    pub fn write(&self, base: &Path) -> Result<WriteResult, PersistenceError> {
        let file = File::new(self.full_path(base), self.content.as_str());
        let file = match self.overwrite {
            Overwrite::Always => file,
            Overwrite::IfMissing => file.create_once(),
        };
        file.write()
    }
}

/// Registry for collecting and managing generated files.
///
/// Files are produced in category order:
/// Model -> Api -> State -> Component -> Page
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: FileEntry) {
        debug!("registered {} ({})", entry.path, entry.category);
        self.entries.push(entry);
    }

    /// Get all registered entries, sorted by category.
    ///
    /// The sort is stable: entries of one category keep registration order.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.category);
        sorted.into_iter()
    }

    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep files that already exist on disk instead of overwriting them.
    pub fn keep_existing(&mut self) {
        for entry in &mut self.entries {
            entry.overwrite = Overwrite::IfMissing;
        }
    }

    /// Preview all files (path and content pairs).
    pub fn preview(&self) -> Vec<PreviewEntry> {
        self.entries()
            .map(|e| PreviewEntry {
                path: e.path.clone(),
                content: e.content.clone(),
                category: e.category,
            })
            .collect()
    }

    /// Write all files to the output directory.
    ///
    /// Stops at the first failure; files written before it stay on disk.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats, PersistenceError> {
        let mut stats = WriteStats::default();

        for entry in self.entries() {
            match entry.write(base)? {
                WriteResult::Written => {
                    stats.written += 1;
                    stats.written_paths.push(entry.path.clone());
                }
                WriteResult::Skipped => {
                    stats.skipped += 1;
                    stats.skipped_paths.push(entry.path.clone());
                }
            }
        }

        Ok(stats)
    }
}

/// A preview entry for displaying what would be generated.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    pub path: String,
    pub content: String,
    pub category: FileCategory,
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Number of files written.
    pub written: usize,
    /// Number of files skipped (already existed).
    pub skipped: usize,
    pub written_paths: Vec<String>,
    pub skipped_paths: Vec<String>,
}

impl WriteStats {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written + self.skipped
    }
}

#[cfg(test)]
mod tests {
    use dashgen_core::FileRules;
    use tempfile::TempDir;

    use super::*;

    struct DbHelper;

    impl GeneratedFile for DbHelper {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("src/lib/db.ts")
        }

        fn rules(&self) -> FileRules {
            FileRules::create_once()
        }

        fn render(&self) -> String {
            "export {};\n".to_string()
        }
    }

    #[test]
    fn test_from_generated_keeps_path_and_rules() {
        let entry = FileEntry::from_generated(&DbHelper, FileCategory::Model);
        assert_eq!(entry.path, "src/lib/db.ts");
        assert_eq!(entry.content, "export {};\n");
        assert_eq!(entry.overwrite, Overwrite::IfMissing);
    }

    #[test]
    fn test_registry_ordering() {
        let mut registry = FileRegistry::new();

        registry.register(FileEntry::page("page.tsx", ""));
        registry.register(FileEntry::component("a.tsx", ""));
        registry.register(FileEntry::model("Book.ts", ""));
        registry.register(FileEntry::component("b.tsx", ""));
        registry.register(FileEntry::api("route.ts", ""));

        let paths: Vec<_> = registry.entries().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["Book.ts", "route.ts", "a.tsx", "b.tsx", "page.tsx"]
        );
    }

    #[test]
    fn test_write_all_creates_directories() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::model("src/models/Book.ts", "model"));
        registry.register(FileEntry::page("src/app/dashboard/books/all/page.tsx", "page"));

        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.written, 2);
        assert_eq!(stats.total(), 2);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("src/app/dashboard/books/all/page.tsx"))
                .unwrap(),
            "page"
        );
    }

    #[test]
    fn test_generated_files_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("types.ts");
        std::fs::write(&path, "old").unwrap();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::state("types.ts", "new"));
        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.written, 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_keep_existing_skips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.ts");
        std::fs::write(&path, "user edits").unwrap();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::state("store.ts", "generated"));
        registry.register(FileEntry::state("types.ts", "generated"));
        registry.keep_existing();
        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.skipped_paths, vec!["store.ts".to_string()]);
        assert_eq!(stats.written_paths, vec!["types.ts".to_string()]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "user edits");
    }

    #[test]
    fn test_write_failure_reports_path() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("src"), "not a directory").unwrap();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::model("src/models/Book.ts", "model"));
        let err = registry.write_all(temp.path()).unwrap_err();

        assert!(err.path.starts_with(temp.path()));
    }

    #[test]
    fn test_preview_and_lookup() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::page("b.tsx", "content b"));
        registry.register(FileEntry::model("a.ts", "content a"));

        let preview = registry.preview();
        assert_eq!(preview[0].path, "a.ts");
        assert_eq!(preview[1].category, FileCategory::Page);
        assert_eq!(registry.get("b.tsx").map(|e| e.content.as_str()), Some("content b"));
        assert!(registry.get("missing").is_none());
    }
}
