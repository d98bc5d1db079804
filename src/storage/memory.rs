//! In-memory storage backend.
//!
//! Used by tests, and by the session as a stand-in when the on-disk journal
//! cannot be opened so the app keeps working for the current run.

use crate::domain::error::{JournalError, Result};
use crate::storage::backend::Storage;
use std::collections::HashMap;

/// Blob store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blobs: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a blob, e.g. a hand-written entries array.
    #[must_use]
    pub fn with_blob(mut self, key: &str, value: &str) -> Self {
        self.blobs.insert(key.to_string(), value.to_string());
        self
    }

    /// Makes every subsequent write fail, as a full disk or quota would.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(JournalError::Storage(format!("quota exceeded writing {key}")));
        }
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
