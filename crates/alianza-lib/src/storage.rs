//! Pluggable key-value storage for the record store.
//!
//! The store never touches the filesystem directly; it goes through the
//! [`Storage`] trait so tests can run against [`MemoryStorage`] while the
//! CLI uses [`FileStorage`].

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{IntakeError, Result};

/// String-keyed document storage.
///
/// Keys are flat names (no path separators); values are whole documents,
/// written and replaced as a unit.
pub trait Storage {
    /// Read a document, `None` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns `Storage` or `Io` if the medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write (or replace) a document.
    ///
    /// # Errors
    ///
    /// Returns `Storage` or `Io` if the medium cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a document. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `Storage` or `Io` if the medium cannot be written.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory storage backed by a `HashMap`.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create a new empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed storage: one JSON document per key under a data directory.
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a storage directory.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The underlying directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(IntakeError::Storage(format!("invalid storage key: {key}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(IntakeError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(value.as_bytes())?;
        file.flush()?;
        drop(file);

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(IntakeError::Io(e)),
        }
    }
}
