//! Key-value persistence ports.

#[cfg(test)]
use std::collections::HashMap;
use std::path::PathBuf;

use dashgen_core::File;
use eyre::{Context, Result};

/// Storage the store reads and writes its state through.
pub trait KeyValuePort {
    /// Get the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory port.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryPort {
    values: HashMap<String, String>,
}

#[cfg(test)]
impl MemoryPort {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValuePort for MemoryPort {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Port storing each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FilePort {
    dir: PathBuf,
}

impl FilePort {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValuePort for FilePort {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).wrap_err_with(|| format!("failed to read {}", path.display())),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        File::new(self.path(key), value).write()?;
        Ok(())
    }
}
