//! Mood filter and free-text search.
//!
//! Filtering keeps the input order. The mood stage and the search stage
//! compose with a logical AND; an empty search term disables its stage.

use crate::domain::{Mood, MoodEntry};
use std::fmt;
use std::str::FromStr;

/// Mood-based filter with an explicit "everything" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodFilter {
    #[default]
    All,
    Only(Mood),
}

impl MoodFilter {
    /// Whether an entry passes the mood stage.
    #[must_use]
    pub fn matches(self, entry: &MoodEntry) -> bool {
        match self {
            Self::All => true,
            Self::Only(mood) => entry.mood == mood,
        }
    }
}

impl fmt::Display for MoodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(mood) => write!(f, "{mood}"),
        }
    }
}

impl FromStr for MoodFilter {
    type Err = crate::domain::JournalError;

    /// Parses `"all"` (any case) as [`MoodFilter::All`], anything else as a mood.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Case-folded search term; `None` when the trimmed term is empty.
#[must_use]
pub fn normalize_search(term: &str) -> Option<String> {
    let folded = fold_case(term.trim());
    if folded.is_empty() {
        None
    } else {
        Some(folded)
    }
}

/// Lowercases `text` one character at a time.
///
/// Search and match highlighting both fold through this, so a highlighted
/// range always corresponds to what matched.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Whether an entry matches an already-normalized search term.
///
/// Matches when the folded note, the folded mood name, or any tag contains
/// the term as a substring.
#[must_use]
pub fn matches_search(entry: &MoodEntry, folded_term: &str) -> bool {
    fold_case(&entry.note).contains(folded_term)
        || fold_case(entry.mood.name()).contains(folded_term)
        || entry.tags.iter().any(|tag| fold_case(tag).contains(folded_term))
}

/// Applies the mood filter and search term to a sequence of entries.
///
/// # Examples
///
/// ```
/// use mood_journal::query::{filter_entries, MoodFilter};
///
/// let entries = vec![];
/// assert!(filter_entries(&entries, MoodFilter::All, "").is_empty());
/// ```
pub fn filter_entries<'a>(entries: &'a [MoodEntry], mood_filter: MoodFilter, search_term: &str) -> Vec<&'a MoodEntry> {
    let term = normalize_search(search_term);

    let _span = tracing::debug_span!("filter_entries",
        total = entries.len(),
        mood_filter = %mood_filter,
        has_term = term.is_some()
    ).entered();

    let filtered: Vec<&MoodEntry> = entries
        .iter()
        .filter(|entry| mood_filter.matches(entry))
        .filter(|entry| term.as_deref().map_or(true, |t| matches_search(entry, t)))
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "filter applied");
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(id: i64, mood: Mood, note: &str, tags: &[&str]) -> MoodEntry {
        MoodEntry {
            id,
            mood,
            note: note.to_string(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            timestamp: Utc.timestamp_millis_opt(id * 1000).unwrap(),
        }
    }

    fn sample() -> Vec<MoodEntry> {
        vec![
            entry(1, Mood::Good, "Coffee with Sam", &["friends"]),
            entry(2, Mood::Stressed, "deadline at work", &["work"]),
            entry(3, Mood::Good, "", &["homework"]),
            entry(4, Mood::Terrible, "Flu", &[]),
        ]
    }

    fn ids(entries: &[&MoodEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn all_with_empty_term_is_identity() {
        let entries = sample();
        let filtered = filter_entries(&entries, MoodFilter::All, "   ");
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4]);
    }

    #[test]
    fn mood_filter_keeps_exact_matches() {
        let entries = sample();
        let filtered = filter_entries(&entries, MoodFilter::Only(Mood::Good), "");
        assert_eq!(ids(&filtered), vec![1, 3]);
        assert!(filtered.iter().all(|e| e.mood == Mood::Good));
    }

    #[test]
    fn search_covers_note_mood_and_tags() {
        let entries = sample();
        assert_eq!(ids(&filter_entries(&entries, MoodFilter::All, "COFFEE")), vec![1]);
        assert_eq!(ids(&filter_entries(&entries, MoodFilter::All, "stress")), vec![2]);
        assert_eq!(ids(&filter_entries(&entries, MoodFilter::All, "work")), vec![2, 3]);
    }

    #[test]
    fn stages_compose_with_and() {
        let entries = sample();
        let filtered = filter_entries(&entries, MoodFilter::Only(Mood::Good), "work");
        assert_eq!(ids(&filtered), vec![3]);
        assert!(filter_entries(&entries, MoodFilter::Only(Mood::Amazing), "work").is_empty());
    }

    #[test]
    fn parses_filter_names() {
        assert_eq!("ALL".parse::<MoodFilter>().unwrap(), MoodFilter::All);
        assert_eq!("neutral".parse::<MoodFilter>().unwrap(), MoodFilter::Only(Mood::Neutral));
        assert!("bogus".parse::<MoodFilter>().is_err());
    }
}
