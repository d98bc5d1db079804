//! Presentation ordering for entry lists.
//!
//! Sorting never touches the store; it returns a new ordered view. The sort
//! is stable, so ties keep their incoming order.

use crate::domain::MoodEntry;
use std::fmt;

/// Ordering applied to the visible entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Descending by timestamp.
    #[default]
    Newest,
    /// Ascending by timestamp.
    Oldest,
    /// Descending by mood rank.
    MoodBest,
    /// Ascending by mood rank.
    MoodWorst,
    /// Incoming order; what any unrecognized mode name maps to.
    Unsorted,
}

impl SortMode {
    /// Parses a mode name (`newest`, `oldest`, `mood-best`, `mood-worst`).
    ///
    /// Unrecognized names map to [`SortMode::Unsorted`] rather than failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use mood_journal::query::SortMode;
    ///
    /// assert_eq!(SortMode::parse("mood-best"), SortMode::MoodBest);
    /// assert_eq!(SortMode::parse("alphabetical"), SortMode::Unsorted);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "newest" => Self::Newest,
            "oldest" => Self::Oldest,
            "mood-best" => Self::MoodBest,
            "mood-worst" => Self::MoodWorst,
            other => {
                tracing::debug!(mode = %other, "unrecognized sort mode, keeping incoming order");
                Self::Unsorted
            }
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::MoodBest => "mood-best",
            Self::MoodWorst => "mood-worst",
            Self::Unsorted => "unsorted",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the entries reordered according to `mode`.
pub fn sort_entries<'a>(entries: &[&'a MoodEntry], mode: SortMode) -> Vec<&'a MoodEntry> {
    let mut sorted = entries.to_vec();

    match mode {
        SortMode::Newest => sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortMode::Oldest => sorted.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        SortMode::MoodBest => sorted.sort_by(|a, b| b.mood.rank().cmp(&a.mood.rank())),
        SortMode::MoodWorst => sorted.sort_by(|a, b| a.mood.rank().cmp(&b.mood.rank())),
        SortMode::Unsorted => {}
    }

    tracing::trace!(mode = %mode, count = sorted.len(), "entries sorted");
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;
    use chrono::{TimeZone, Utc};

    fn entry(id: i64, mood: Mood) -> MoodEntry {
        MoodEntry {
            id,
            mood,
            note: String::new(),
            tags: vec![],
            timestamp: Utc.timestamp_opt(1_700_000_000 + id * 3600, 0).unwrap(),
        }
    }

    fn ids(entries: &[&MoodEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn newest_then_oldest_reverses() {
        let entries = vec![entry(2, Mood::Good), entry(5, Mood::Neutral), entry(1, Mood::Amazing)];
        let refs: Vec<&MoodEntry> = entries.iter().collect();

        let newest = sort_entries(&refs, SortMode::Newest);
        assert_eq!(ids(&newest), vec![5, 2, 1]);

        let oldest = sort_entries(&newest, SortMode::Oldest);
        let mut reversed = ids(&newest);
        reversed.reverse();
        assert_eq!(ids(&oldest), reversed);
    }

    #[test]
    fn mood_orders_by_rank() {
        let entries = vec![entry(1, Mood::Stressed), entry(2, Mood::Amazing), entry(3, Mood::Terrible), entry(4, Mood::Good)];
        let refs: Vec<&MoodEntry> = entries.iter().collect();

        assert_eq!(ids(&sort_entries(&refs, SortMode::MoodBest)), vec![2, 4, 1, 3]);
        assert_eq!(ids(&sort_entries(&refs, SortMode::MoodWorst)), vec![3, 1, 4, 2]);
    }

    #[test]
    fn unsorted_keeps_input_and_input_is_untouched() {
        let entries = vec![entry(3, Mood::Good), entry(1, Mood::Good), entry(2, Mood::Good)];
        let refs: Vec<&MoodEntry> = entries.iter().collect();

        assert_eq!(ids(&sort_entries(&refs, SortMode::parse("random"))), vec![3, 1, 2]);
        let _ = sort_entries(&refs, SortMode::Oldest);
        assert_eq!(ids(&refs), vec![3, 1, 2]);
    }
}
