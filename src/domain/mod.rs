//! Domain layer for the mood journal.
//!
//! Core types and the entry store, independent of storage, rendering or the
//! command line.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`mood`]: The ranked five-valued mood scale
//! - [`entry`]: The mood entry model and note normalization
//! - [`tags`]: Tag normalization and the selected-tags buffer
//! - [`store`]: The in-memory entry store
//!
//! # Examples
//!
//! ```
//! use mood_journal::domain::{EntryStore, NewEntry, Mood};
//!
//! let mut store = EntryStore::new();
//! store.add(NewEntry::new(Mood::Amazing, "sunny day", ["outside"], chrono::Utc::now()));
//! assert_eq!(store.len(), 1);
//! ```

pub mod entry;
pub mod error;
pub mod mood;
pub mod store;
pub mod tags;

pub use entry::{MoodEntry, NewEntry, NOTE_MAX_CHARS};
pub use error::{JournalError, Result};
pub use mood::Mood;
pub use store::EntryStore;
pub use tags::{TagBuffer, MAX_TAGS};
