//! The entry store: sole owner of the in-memory entry sequence.
//!
//! The store is just an ordered `Vec`. New entries and imported batches are
//! prepended, so the natural order is newest-first, but nothing here depends on
//! that; presentation order is applied by the query pipeline.

use crate::domain::entry::{MoodEntry, NewEntry};
use std::collections::HashSet;

/// In-memory sequence of mood entries with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    entries: Vec<MoodEntry>,
}

impl EntryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-loaded sequence, repairing any duplicate ids.
    #[must_use]
    pub fn from_entries(entries: Vec<MoodEntry>) -> Self {
        let mut store = Self::new();
        store.import_batch(entries);
        store
    }

    /// Prepends a new entry and returns its id.
    ///
    /// The id is the timestamp in milliseconds, bumped past the largest
    /// existing id if that value is already taken. When the largest id is
    /// `i64::MAX` the highest free id below it is used instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use mood_journal::domain::{EntryStore, NewEntry};
    /// use mood_journal::Mood;
    ///
    /// let mut store = EntryStore::new();
    /// let now = chrono::Utc::now();
    /// let first = store.add(NewEntry::new(Mood::Good, "", Vec::<String>::new(), now));
    /// let second = store.add(NewEntry::new(Mood::Neutral, "", Vec::<String>::new(), now));
    /// assert_ne!(first, second);
    /// assert_eq!(store.entries()[0].id, second);
    /// ```
    pub fn add(&mut self, entry: NewEntry) -> i64 {
        let wanted = entry.timestamp.timestamp_millis();
        let id = if self.contains(wanted) {
            let taken: HashSet<i64> = self.entries.iter().map(|e| e.id).collect();
            free_id(&taken, self.next_free_id())
        } else {
            wanted
        };

        tracing::debug!(id, mood = %entry.mood, tags = entry.tags.len(), "adding entry");

        self.entries.insert(
            0,
            MoodEntry {
                id,
                mood: entry.mood,
                note: entry.note,
                tags: entry.tags,
                timestamp: entry.timestamp,
            },
        );
        id
    }

    /// Deletes the entry with the given id.
    ///
    /// Returns `false` (and changes nothing) when no such entry exists.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = before != self.entries.len();
        tracing::debug!(id, removed, "remove entry");
        removed
    }

    /// Empties the store, returning how many entries were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Prepends a validated batch ahead of the existing entries.
    ///
    /// The batch keeps its own relative order. Ids that collide with an
    /// existing entry, or with an earlier entry of the same batch, are
    /// reassigned. Returns the number of entries added.
    pub fn import_batch(&mut self, mut batch: Vec<MoodEntry>) -> usize {
        let _span = tracing::debug_span!("import_batch", batch = batch.len(), existing = self.entries.len()).entered();

        let mut taken: HashSet<i64> = self.entries.iter().map(|e| e.id).collect();
        let mut next = self.next_free_id();
        let mut reassigned = 0usize;

        for entry in &mut batch {
            if !taken.insert(entry.id) {
                next = free_id(&taken, next);
                entry.id = next;
                taken.insert(next);
                reassigned += 1;
            }
        }

        let count = batch.len();
        batch.append(&mut self.entries);
        self.entries = batch;

        tracing::debug!(count, reassigned, "batch imported");
        count
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&MoodEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    #[must_use]
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn next_free_id(&self) -> i64 {
        self.entries
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }
}

/// First id at or above `from` not in `taken`, or the highest free id below
/// `from` once the search upward runs out of `i64` range.
fn free_id(taken: &HashSet<i64>, from: i64) -> i64 {
    let mut candidate = from;
    while taken.contains(&candidate) {
        match candidate.checked_add(1) {
            Some(next) => candidate = next,
            None => {
                return (i64::MIN..from)
                    .rev()
                    .find(|id| !taken.contains(id))
                    .unwrap_or(i64::MIN)
            }
        }
    }
    candidate
}
