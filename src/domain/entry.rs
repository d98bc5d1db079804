//! Mood entry domain model.
//!
//! A [`MoodEntry`] is one recorded observation: a mood, an optional note and a
//! handful of tags, stamped with the instant it was created. Calendar-day
//! questions (streaks, heat-strip buckets) are answered in local time through
//! [`MoodEntry::local_date`].

use crate::domain::mood::Mood;
use crate::domain::tags::TagBuffer;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Maximum note length, in characters.
pub const NOTE_MAX_CHARS: usize = 500;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// A recorded mood observation.
///
/// # Fields
///
/// - `id`: unique within the store, derived from the creation time in milliseconds
/// - `mood`: one of the five [`Mood`] values
/// - `note`: free text, at most [`NOTE_MAX_CHARS`] characters
/// - `tags`: lowercase, deduplicated, at most five
/// - `timestamp`: creation instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: i64,
    pub mood: Mood,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Input for [`EntryStore::add`](crate::domain::EntryStore::add).
///
/// The store assigns the id; everything else is normalized on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub mood: Mood,
    pub note: String,
    pub tags: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl NewEntry {
    /// Builds a normalized entry candidate.
    ///
    /// The note is trimmed and capped; tags go through [`TagBuffer`] rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use mood_journal::domain::NewEntry;
    /// use mood_journal::Mood;
    ///
    /// let entry = NewEntry::new(Mood::Good, "  walked the dog ", ["Outside", "outside"], chrono::Utc::now());
    /// assert_eq!(entry.note, "walked the dog");
    /// assert_eq!(entry.tags, vec!["outside".to_string()]);
    /// ```
    pub fn new<I, S>(mood: Mood, note: &str, tags: I, timestamp: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            mood,
            note: normalize_note(note),
            tags: tags.into_iter().collect::<TagBuffer>().into_vec(),
            timestamp,
        }
    }
}

/// Trims a note and truncates it to [`NOTE_MAX_CHARS`] characters.
#[must_use]
pub fn normalize_note(raw: &str) -> String {
    raw.trim().chars().take(NOTE_MAX_CHARS).collect()
}

impl MoodEntry {
    /// Calendar date of the entry in local time.
    #[must_use]
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Local).date_naive()
    }

    /// Returns a human-readable string describing how long ago the entry was made.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    ///
    /// # Examples
    ///
    /// ```
    /// use mood_journal::domain::MoodEntry;
    /// use mood_journal::Mood;
    /// use chrono::{Duration, Utc};
    ///
    /// let now = Utc::now();
    /// let entry = MoodEntry {
    ///     id: 1,
    ///     mood: Mood::Neutral,
    ///     note: String::new(),
    ///     tags: vec![],
    ///     timestamp: now - Duration::minutes(5),
    /// };
    /// assert_eq!(entry.time_ago(now), "5m ago");
    /// ```
    #[must_use]
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        let diff = (now - self.timestamp).num_seconds();

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }

    /// Local, human-oriented rendering of the timestamp, e.g. `Mon Jan  1 2024, 09:30`.
    #[must_use]
    pub fn display_time(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%a %b %e %Y, %H:%M")
            .to_string()
    }
}
