//! Summary statistics: totals, streak, most common mood and weekly count.

use crate::domain::{Mood, MoodEntry};
use chrono::{DateTime, Duration, Local, NaiveDate, Utc};

/// Aggregate numbers shown in the statistics panel.
///
/// Always computed over every entry, regardless of the active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Count of all entries.
    pub total: usize,
    /// Consecutive days with an entry, ending today.
    pub streak: u32,
    /// Most frequent mood; `None` when there are no entries.
    pub most_common: Option<Mood>,
    /// Entries from the last seven days (raw instant comparison).
    pub this_week: usize,
}

/// Counts consecutive local calendar days, ending at `today`, that have at
/// least one entry.
///
/// Distinct entry dates are walked newest first. A date equal to the date
/// being checked extends the streak and moves the check back a day; the first
/// date that falls before the check ends the walk. Dates after `today` are
/// ignored. No entry today means a streak of zero.
#[must_use]
pub fn compute_streak(entries: &[MoodEntry], today: NaiveDate) -> u32 {
    let mut dates: Vec<NaiveDate> = entries.iter().map(MoodEntry::local_date).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();

    let mut streak = 0;
    let mut check = today;

    for date in dates {
        if date > check {
            continue;
        }
        if date < check {
            break;
        }
        streak += 1;
        match check.pred_opt() {
            Some(previous) => check = previous,
            None => break,
        }
    }

    tracing::trace!(streak, %today, "streak computed");
    streak
}

/// Most frequent mood, breaking ties by enumeration order.
#[must_use]
pub fn most_common_mood(entries: &[MoodEntry]) -> Option<Mood> {
    let mut counts = [0usize; Mood::ALL.len()];
    for entry in entries {
        counts[entry.mood.index()] += 1;
    }

    let mut best: Option<(Mood, usize)> = None;
    for mood in Mood::ALL {
        let count = counts[mood.index()];
        if count > 0 && best.map_or(true, |(_, max)| count > max) {
            best = Some((mood, count));
        }
    }
    best.map(|(mood, _)| mood)
}

/// Entries at or after `now - 7 days`.
#[must_use]
pub fn count_since_week_ago(entries: &[MoodEntry], now: DateTime<Utc>) -> usize {
    let cutoff = now - Duration::days(7);
    entries.iter().filter(|e| e.timestamp >= cutoff).count()
}

/// Computes the full statistics panel.
///
/// # Examples
///
/// ```
/// use mood_journal::query::compute_stats;
///
/// let stats = compute_stats(&[], chrono::Local::now());
/// assert_eq!(stats.total, 0);
/// assert_eq!(stats.streak, 0);
/// assert!(stats.most_common.is_none());
/// ```
#[must_use]
pub fn compute_stats(entries: &[MoodEntry], now: DateTime<Local>) -> Stats {
    let _span = tracing::debug_span!("compute_stats", total = entries.len()).entered();

    Stats {
        total: entries.len(),
        streak: compute_streak(entries, now.date_naive()),
        most_common: most_common_mood(entries),
        this_week: count_since_week_ago(entries, now.with_timezone(&Utc)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_local_noon(date: NaiveDate) -> DateTime<Utc> {
        let naive = date.and_hms_opt(12, 0, 0).unwrap();
        Local.from_local_datetime(&naive).earliest().unwrap().with_timezone(&Utc)
    }

    fn entry(id: i64, mood: Mood, timestamp: DateTime<Utc>) -> MoodEntry {
        MoodEntry {
            id,
            mood,
            note: String::new(),
            tags: vec![],
            timestamp,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn days_ago(n: i64) -> DateTime<Utc> {
        at_local_noon(today() - Duration::days(n))
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let entries = vec![
            entry(1, Mood::Good, days_ago(0)),
            entry(2, Mood::Good, days_ago(1)),
            entry(3, Mood::Good, days_ago(3)),
        ];
        assert_eq!(compute_streak(&entries, today()), 2);
    }

    #[test]
    fn streak_is_zero_without_entry_today() {
        let entries = vec![entry(1, Mood::Good, days_ago(1)), entry(2, Mood::Good, days_ago(2))];
        assert_eq!(compute_streak(&entries, today()), 0);
    }

    #[test]
    fn streak_counts_days_not_entries() {
        let entries = vec![
            entry(1, Mood::Good, days_ago(0)),
            entry(2, Mood::Neutral, days_ago(0)),
            entry(3, Mood::Good, days_ago(1)),
            entry(4, Mood::Good, days_ago(2)),
            entry(5, Mood::Good, days_ago(-1)),
        ];
        assert_eq!(compute_streak(&entries, today()), 3);
    }

    #[test]
    fn most_common_breaks_ties_by_enumeration_order() {
        let entries = vec![
            entry(1, Mood::Terrible, days_ago(0)),
            entry(2, Mood::Good, days_ago(0)),
            entry(3, Mood::Terrible, days_ago(0)),
            entry(4, Mood::Good, days_ago(0)),
        ];
        assert_eq!(most_common_mood(&entries), Some(Mood::Good));
        assert_eq!(most_common_mood(&[]), None);
    }

    #[test]
    fn week_count_uses_inclusive_cutoff() {
        let now = at_local_noon(today());
        let entries = vec![
            entry(1, Mood::Good, now),
            entry(2, Mood::Good, now - Duration::days(7)),
            entry(3, Mood::Good, now - Duration::days(7) - Duration::seconds(1)),
        ];
        assert_eq!(count_since_week_ago(&entries, now), 2);
    }

    #[test]
    fn stats_cover_all_entries() {
        let now = at_local_noon(today()).with_timezone(&Local);
        let entries = vec![
            entry(1, Mood::Stressed, days_ago(0)),
            entry(2, Mood::Stressed, days_ago(1)),
            entry(3, Mood::Amazing, days_ago(20)),
        ];
        let stats = compute_stats(&entries, now);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.streak, 2);
        assert_eq!(stats.most_common, Some(Mood::Stressed));
        assert_eq!(stats.this_week, 2);
    }
}
