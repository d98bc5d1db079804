//! Per-day buckets backing the calendar heat-strip.

use crate::domain::{Mood, MoodEntry};
use chrono::{Duration, NaiveDate};

/// One cell of the heat-strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub entry_count: usize,
    /// Mood of the first entry found for the day, in store order.
    pub mood: Option<Mood>,
}

/// Entries whose local calendar date is `date`, in store order.
#[must_use]
pub fn compute_day_bucket(entries: &[MoodEntry], date: NaiveDate) -> Vec<&MoodEntry> {
    entries.iter().filter(|e| e.local_date() == date).collect()
}

/// Builds a strip of `days` consecutive days ending at `today`, oldest first.
///
/// The strip stops at [`NaiveDate::MIN`] when the window reaches past it.
///
/// # Examples
///
/// ```
/// use mood_journal::query::compute_calendar;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// let strip = compute_calendar(&[], today, 3);
/// assert_eq!(strip.len(), 3);
/// assert_eq!(strip[2].date, today);
/// assert!(strip.iter().all(|day| day.mood.is_none()));
/// ```
#[must_use]
pub fn compute_calendar(entries: &[MoodEntry], today: NaiveDate, days: u32) -> Vec<CalendarDay> {
    let _span = tracing::debug_span!("compute_calendar", total = entries.len(), days).entered();

    let available = (today - NaiveDate::MIN).num_days().saturating_add(1);
    let days = i64::from(days).min(available);

    (0..days)
        .rev()
        .filter_map(|offset| today.checked_sub_signed(Duration::days(offset)))
        .map(|date| {
            let bucket = compute_day_bucket(entries, date);
            CalendarDay {
                date,
                entry_count: bucket.len(),
                mood: bucket.first().map(|e| e.mood),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone, Utc};

    fn at_local(date: NaiveDate, hour: u32) -> DateTime<Utc> {
        let naive = date.and_hms_opt(hour, 0, 0).unwrap();
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

    #[test]
    fn bucket_keeps_store_order_and_first_entry_represents_day() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let entries = vec![
            entry(1, Mood::Stressed, at_local(day, 21)),
            entry(2, Mood::Amazing, at_local(day, 8)),
            entry(3, Mood::Good, at_local(day.pred_opt().unwrap(), 23)),
        ];

        let bucket = compute_day_bucket(&entries, day);
        assert_eq!(bucket.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2]);

        let strip = compute_calendar(&entries, day, 2);
        assert_eq!(strip[0].mood, Some(Mood::Good));
        assert_eq!(strip[1].mood, Some(Mood::Stressed));
        assert_eq!(strip[1].entry_count, 2);
    }

    #[test]
    fn strip_marks_empty_days() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let entries = vec![entry(1, Mood::Good, at_local(today, 12))];
        let strip = compute_calendar(&entries, today, 7);
        assert_eq!(strip.len(), 7);
        assert_eq!(strip.iter().filter(|d| d.entry_count == 0).count(), 6);
        assert_eq!(strip[0].date, NaiveDate::from_ymd_opt(2024, 5, 4).unwrap());
    }

    #[test]
    fn strip_stops_at_earliest_date() {
        let today = NaiveDate::MIN + Duration::days(2);
        let strip = compute_calendar(&[], today, u32::MAX);
        assert_eq!(strip.len(), 3);
        assert_eq!(strip[0].date, NaiveDate::MIN);
        assert_eq!(strip[2].date, today);
    }
}
