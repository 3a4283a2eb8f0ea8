//! Directory-backed key-value store
//!
//! One directory per origin, one `<key>.json` file per key. Writes go to a
//! sibling temp file first and are renamed into place.

use crate::error::StoreError;
use crate::KeyValueStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed store rooted at a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create store rooted at `root`; the directory is created on first write
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path holding `key`
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.root.join(format!("{file_stem}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(StoreError::AccessDenied),
            Err(e) => Err(StoreError::io_error(path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|e| StoreError::io_error(&self.root, e))?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| StoreError::io_error(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io_error(&path, e))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io_error(path, e)),
        }
    }
}
