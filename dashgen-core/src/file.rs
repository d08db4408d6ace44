//! Writing generated files to disk.

use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

/// A file or one of its parent directories could not be written.
#[derive(Debug, Error)]
#[error("failed to write '{}'", path.display())]
pub struct PersistenceError {
    /// The path that failed: the file itself or the directory that could
    /// not be created.
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// What to do when the target path already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Replace it. Generated code is never edited by hand.
    #[default]
    Always,
    /// Keep it. The file belongs to the user after the first write.
    IfMissing,
}

/// Rules applied when a file is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for files written once and then left to the user.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// Outcome of writing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// Kept an existing file ([`Overwrite::IfMissing`]).
    Skipped,
}

/// A file whose location and content are derived from its own data.
pub trait GeneratedFile {
    /// Location of the file under `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String;

    /// Write under `base`. Content is only rendered when it will be written.
    fn write(&self, base: &Path) -> Result<WriteResult, PersistenceError> {
        persist(&self.path(base), self.rules().overwrite, || self.render())
    }
}

/// A path and its content, written with [`FileRules`].
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// A file that overwrites whatever is at `path`.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Only write when nothing exists at the path yet.
    pub fn create_once(mut self) -> Self {
        self.rules = FileRules::create_once();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self) -> Result<WriteResult, PersistenceError> {
        persist(&self.path, self.rules.overwrite, || self.content.clone())
    }
}

fn persist(
    path: &Path,
    overwrite: Overwrite,
    content: impl FnOnce() -> String,
) -> Result<WriteResult, PersistenceError> {
    if overwrite == Overwrite::IfMissing && path.exists() {
        debug!("keeping existing {}", path.display());
        return Ok(WriteResult::Skipped);
    }
    write_file(path, &content())?;
    Ok(WriteResult::Written)
}

/// Write `content` to `path`, creating missing parent directories and
/// replacing any existing file.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<(), PersistenceError> {
    let failed = |path: &Path| {
        let path = path.to_path_buf();
        move |source| PersistenceError { path, source }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(failed(parent))?;
    }
    std::fs::write(path, content).map_err(failed(path))?;
    info!("wrote {}", path.display());
    Ok(())
}
