//! File-based Key-Value Store Adapter
//!
//! Stores each key as `<key>.json` under a data directory. Writes go to a
//! sibling temp file first and are renamed over the target, so a crash
//! mid-write leaves the previous value intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::ports::{KeyValueStore, StoreError};

/// File-based storage for persisted collections
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file store rooted at a data directory.
    ///
    /// The directory is created lazily on first write.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a key
    fn file_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            return Err(StoreError::Unavailable(format!("invalid key: {:?}", key)));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.file_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.file_path(key)?;
        fs::create_dir_all(&self.base_path)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}
