//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait over a flat key-value blob store.
//! Backends only move strings in and out; encoding entries and the theme into
//! those strings lives in the provided methods, so every backend persists the
//! same layout.
//!
//! # Keys
//!
//! - [`MOOD_DATA_KEY`]: JSON array of entries
//! - [`THEME_KEY`]: `"light"` or `"dark"`

use crate::domain::error::Result;
use crate::domain::MoodEntry;
use crate::storage::models::{decode_entries, encode_entries};
use crate::ui::theme::ThemeMode;

/// Key holding the JSON array of mood entries.
pub const MOOD_DATA_KEY: &str = "mood_entries";

/// Key holding the selected theme.
pub const THEME_KEY: &str = "theme";

/// Abstraction over persistent blob storage.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): single JSON document on disk with atomic writes
/// - [`MemoryStorage`](crate::storage::MemoryStorage): in-process map, used by tests and as a fallback
///
/// # Examples
///
/// ```
/// use mood_journal::storage::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::new();
/// storage.save_entries(&[])?;
/// assert!(storage.load_entries()?.is_empty());
/// # Ok::<(), mood_journal::JournalError>(())
/// ```
pub trait Storage: Send {
    /// Reads the blob stored under `key`, `Ok(None)` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (disk full, permissions).
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Loads the persisted entries; an absent key yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Storage`](crate::JournalError::Storage) if the
    /// blob is not a valid JSON array of entries.
    fn load_entries(&self) -> Result<Vec<MoodEntry>> {
        let _span = tracing::debug_span!("load_entries").entered();

        match self.read(MOOD_DATA_KEY)? {
            Some(blob) => {
                let entries = decode_entries(&blob)?;
                tracing::debug!(count = entries.len(), "entries loaded");
                Ok(entries)
            }
            None => {
                tracing::debug!("no stored entries");
                Ok(Vec::new())
            }
        }
    }

    /// Persists the full entry sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying write fails.
    fn save_entries(&mut self, entries: &[MoodEntry]) -> Result<()> {
        let _span = tracing::debug_span!("save_entries", count = entries.len()).entered();
        let blob = encode_entries(entries, false)?;
        self.write(MOOD_DATA_KEY, &blob)
    }

    /// Loads the persisted theme; unknown values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load_theme(&self) -> Result<Option<ThemeMode>> {
        Ok(self.read(THEME_KEY)?.and_then(|raw| {
            raw.parse()
                .map_err(|e| tracing::warn!(value = %raw, error = %e, "ignoring stored theme"))
                .ok()
        }))
    }

    /// Persists the theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    fn save_theme(&mut self, theme: ThemeMode) -> Result<()> {
        self.write(THEME_KEY, theme.name())
    }
}
