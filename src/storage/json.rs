//! JSON file-based storage backend.
//!
//! Keeps every blob in one human-readable JSON document and uses atomic file
//! writes (write-to-temp + rename) so a crash never leaves a half-written
//! journal behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - the document is loaded into memory once
//! - **Write**: O(n) - the whole document is serialized on every write
//! - **Best for**: personal-scale data, a write per user action

use crate::domain::error::{JournalError, Result};
use crate::storage::backend::Storage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name of the journal document inside the data directory.
pub const JOURNAL_FILE_NAME: &str = "journal.json";

/// On-disk container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Blobs indexed by key.
    #[serde(default)]
    blobs: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            blobs: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// The document is cached in memory and written through on every change.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "blobs": {
///     "mood_entries": "[{\"id\":1704067200000,\"mood\":\"Good\", ...}]",
///     "theme": "dark"
///   }
/// }
/// ```
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the document.
    data: StorageData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonStorage {
    /// Creates or opens a JSON storage backend.
    ///
    /// If the file exists its blobs are loaded; otherwise the storage starts
    /// empty. Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mood_journal::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/mood-journal/journal.json"))?;
    /// # Ok::<(), mood_journal::JournalError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(blob_count = data.blobs.len(), "storage initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Opens `journal.json` inside `data_dir`.
    ///
    /// # Errors
    ///
    /// See [`JsonStorage::new`].
    pub fn in_dir(data_dir: &Path) -> Result<Self> {
        Self::new(data_dir.join(JOURNAL_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| JournalError::Storage(format!("failed to parse {}: {e}", path.display())))?;

        tracing::debug!(version = data.version, blobs = data.blobs.len(), "loaded storage data");
        Ok(data)
    }

    /// Saves the document using an atomic write.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| JournalError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let blob = self.data.blobs.get(key).cloned();
        tracing::trace!(key, found = blob.is_some(), "blob read");
        Ok(blob)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_write", key, len = value.len()).entered();

        if self.data.blobs.get(key).map(String::as_str) == Some(value) {
            tracing::trace!("blob unchanged");
            return Ok(());
        }

        self.data.blobs.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonStorage {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::backend::{MOOD_DATA_KEY, THEME_KEY};

    #[test]
    fn blobs_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut storage = JsonStorage::in_dir(dir.path()).unwrap();
            storage.write(MOOD_DATA_KEY, "[]").unwrap();
            storage.write(THEME_KEY, "dark").unwrap();
        }

        let storage = JsonStorage::in_dir(dir.path()).unwrap();
        assert_eq!(storage.read(MOOD_DATA_KEY).unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.read(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert!(!dir.path().join("journal.tmp").exists());
    }

    #[test]
    fn corrupted_document_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(JOURNAL_FILE_NAME), "{ not json").unwrap();
        assert!(matches!(JsonStorage::in_dir(dir.path()), Err(JournalError::Storage(_))));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut storage = JsonStorage::in_dir(&nested).unwrap();
        storage.write(THEME_KEY, "light").unwrap();
        assert!(nested.join(JOURNAL_FILE_NAME).exists());
    }
}
