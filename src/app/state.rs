//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for one session: the entry
//! store, the user's query parameters, the entry form being filled in, the
//! theme and the calendar window. Nothing derived is cached here; every
//! render recomputes the query pipeline from scratch.
//!
//! # State Components
//!
//! - **Store**: every entry, in store order (newest logged first)
//! - **Query**: mood filter, search term and sort mode
//! - **Draft**: selected mood, note text and tag buffer of the entry form
//! - **Theme**: light or dark
//! - **Calendar days**: length of the heat-strip window
//!
//! # Example
//!
//! ```rust
//! use mood_journal::app::AppState;
//! use mood_journal::Mood;
//!
//! let mut state = AppState::default();
//! state.draft.mood = Some(Mood::Good);
//! state.draft.tags.add("Work");
//! let id = state.submit_draft(chrono::Utc::now())?;
//! assert_eq!(state.store.get(id).map(|e| e.tags.clone()), Some(vec!["work".to_string()]));
//! # Ok::<(), mood_journal::JournalError>(())
//! ```

use crate::domain::entry::normalize_note;
use crate::domain::error::{JournalError, Result};
use crate::domain::{EntryStore, Mood, MoodEntry, NewEntry, TagBuffer};
use crate::query::{self, MoodFilter, QueryParams};
use crate::ui::helpers::find_match_ranges;
use crate::ui::theme::ThemeMode;
use crate::ui::viewmodel::{
    CalendarCell, ChartBar, DisplayEntry, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, StatsInfo, UIViewModel,
};
use chrono::{DateTime, Local, Utc};

/// Default length of the calendar heat-strip, in days.
pub const DEFAULT_CALENDAR_DAYS: u32 = 30;

/// Longest calendar window accepted from config or the command line.
pub const MAX_CALENDAR_DAYS: u32 = 366;

const FOOTER_HINT: &str = "log <mood> [--note ..] [--tag ..]  ·  list [--search ..]  ·  stats  ·  chart  ·  calendar";

/// The entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodDraft {
    pub mood: Option<Mood>,
    pub note: String,
    pub tags: TagBuffer,
}

impl MoodDraft {
    /// Replaces the note, trimmed and capped at [`NOTE_MAX_CHARS`](crate::domain::NOTE_MAX_CHARS) characters.
    pub fn set_note(&mut self, note: &str) {
        self.note = normalize_note(note);
    }

    /// Clears the form after a successful submit.
    pub fn reset(&mut self) {
        self.mood = None;
        self.note.clear();
        self.tags.clear();
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every entry; the only place entries are mutated.
    pub store: EntryStore,

    /// Filter, search and sort chosen by the user.
    pub query: QueryParams,

    /// Entry form contents.
    pub draft: MoodDraft,

    /// Active theme, persisted separately from entries.
    pub theme: ThemeMode,

    /// Length of the calendar heat-strip window.
    pub calendar_days: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new(), ThemeMode::default())
    }
}

impl AppState {
    /// Creates state from loaded entries and theme.
    ///
    /// Colliding ids in `entries` are reassigned by the store.
    #[must_use]
    pub fn new(entries: Vec<MoodEntry>, theme: ThemeMode) -> Self {
        Self {
            store: EntryStore::from_entries(entries),
            query: QueryParams::default(),
            draft: MoodDraft::default(),
            theme,
            calendar_days: DEFAULT_CALENDAR_DAYS,
        }
    }

    /// Turns the draft into a stored entry and resets the draft.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Validation`] if no mood is selected. The draft
    /// is left untouched in that case.
    pub fn submit_draft(&mut self, timestamp: DateTime<Utc>) -> Result<i64> {
        let Some(mood) = self.draft.mood else {
            return Err(JournalError::Validation("Please select a mood before saving".to_string()));
        };

        let entry = NewEntry::new(mood, &self.draft.note, self.draft.tags.as_slice(), timestamp);
        let id = self.store.add(entry);
        self.draft.reset();

        tracing::debug!(id, mood = %mood, "entry submitted");
        Ok(id)
    }

    /// Computes the complete view model.
    ///
    /// Runs the query pipeline over the whole store, then formats the visible
    /// entries, stats, chart bars and calendar cells for display.
    ///
    /// # Parameters
    ///
    /// * `now` - Reference instant for the streak, weekly count, relative
    ///   times and the calendar window
    #[must_use]
    pub fn compute_viewmodel(&self, now: DateTime<Local>) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", total = self.store.len()).entered();

        let result = query::run(self.store.entries(), &self.query, now, self.calendar_days);
        let now_utc = now.with_timezone(&Utc);
        let today = now.date_naive();

        let entries: Vec<DisplayEntry> = result
            .visible
            .iter()
            .map(|entry| self.compute_display_entry(entry, now_utc))
            .collect();

        let chart = result
            .distribution
            .shares
            .iter()
            .map(|share| ChartBar {
                mood: share.mood,
                emoji: share.mood.emoji(),
                count: share.count,
                percent: share.percent,
            })
            .collect();

        let calendar = result
            .calendar
            .iter()
            .map(|day| CalendarCell {
                date: day.date,
                entry_count: day.entry_count,
                mood: day.mood,
                is_today: day.date == today,
            })
            .collect();

        UIViewModel {
            header: self.compute_header(entries.len()),
            footer: FooterInfo {
                hint: FOOTER_HINT.to_string(),
            },
            empty_state: self.compute_empty_state(entries.len()),
            search_bar: self.compute_search_bar(),
            entries,
            stats: StatsInfo {
                total: result.stats.total,
                streak: result.stats.streak,
                this_week: result.stats.this_week,
                most_common: result.stats.most_common,
            },
            chart,
            calendar,
        }
    }

    fn compute_display_entry(&self, entry: &MoodEntry, now: DateTime<Utc>) -> DisplayEntry {
        DisplayEntry {
            id: entry.id,
            mood: entry.mood,
            emoji: entry.mood.emoji(),
            when: entry.display_time(),
            ago: entry.time_ago(now),
            note: entry.note.clone(),
            tags: entry.tags.clone(),
            highlight_ranges: find_match_ranges(&entry.note, &self.query.search),
        }
    }

    fn compute_header(&self, visible: usize) -> HeaderInfo {
        let total = self.store.len();
        let noun = if total == 1 { "entry" } else { "entries" };
        let subtitle = if visible == total {
            format!("{total} {noun}")
        } else {
            format!("showing {visible} of {total} {noun}")
        };

        HeaderInfo {
            title: " Mood Journal ".to_string(),
            subtitle,
        }
    }

    fn compute_empty_state(&self, visible: usize) -> Option<EmptyState> {
        if visible > 0 {
            return None;
        }

        Some(if self.store.is_empty() {
            EmptyState {
                message: "No entries yet".to_string(),
                subtitle: "Log your first mood with: mood-journal log good".to_string(),
            }
        } else {
            EmptyState {
                message: "No entries match".to_string(),
                subtitle: "Try a different search or mood filter".to_string(),
            }
        })
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let searching = !self.query.search.trim().is_empty();
        let filtering = self.query.mood_filter != MoodFilter::All;

        (searching || filtering).then(|| SearchBarInfo {
            query: self.query.search.trim().to_string(),
            mood_filter: self.query.mood_filter.to_string(),
            sort: self.query.sort.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NOTE_MAX_CHARS;
    use chrono::{Duration, TimeZone};

    fn noon_today() -> DateTime<Local> {
        let date = Local::now().date_naive();
        Local.from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap()).earliest().unwrap()
    }

    fn log(state: &mut AppState, mood: Mood, note: &str, at: DateTime<Local>) -> i64 {
        state.draft.mood = Some(mood);
        state.draft.set_note(note);
        state.submit_draft(at.with_timezone(&Utc)).unwrap()
    }

    #[test]
    fn submit_without_mood_is_rejected() {
        let mut state = AppState::default();
        state.draft.set_note("forgot the mood");
        assert!(matches!(state.submit_draft(Utc::now()), Err(JournalError::Validation(_))));
        assert!(state.store.is_empty());
        assert_eq!(state.draft.note, "forgot the mood");
    }

    #[test]
    fn submit_resets_draft() {
        let mut state = AppState::default();
        state.draft.tags.add("gym");
        log(&mut state, Mood::Amazing, " ran 5k ", noon_today());

        assert_eq!(state.draft, MoodDraft::default());
        assert_eq!(state.store.entries()[0].note, "ran 5k");
        assert_eq!(state.store.entries()[0].tags, vec!["gym"]);
    }

    #[test]
    fn leading_whitespace_does_not_eat_into_note_cap() {
        let mut draft = MoodDraft::default();
        let body = "x".repeat(NOTE_MAX_CHARS);
        draft.set_note(&format!("   {body}"));
        assert_eq!(draft.note, body);
    }

    #[test]
    fn viewmodel_reflects_query() {
        let now = noon_today();
        let mut state = AppState::default();
        log(&mut state, Mood::Good, "Work was fine", now - Duration::days(1));
        log(&mut state, Mood::Stressed, "deadline at work", now);
        log(&mut state, Mood::Good, "park", now);

        state.query.search = "WORK".to_string();
        let vm = state.compute_viewmodel(now);

        assert_eq!(vm.entries.len(), 2);
        assert_eq!(vm.entries[0].mood, Mood::Stressed);
        assert_eq!(vm.entries[0].highlight_ranges, vec![(12, 16)]);
        assert_eq!(vm.header.subtitle, "showing 2 of 3 entries");
        assert!(vm.search_bar.is_some());
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.stats.total, 3);
        assert_eq!(vm.stats.streak, 2);
        assert_eq!(vm.stats.most_common, Some(Mood::Good));
        assert_eq!(vm.calendar.len(), DEFAULT_CALENDAR_DAYS as usize);
        assert!(vm.calendar.last().is_some_and(|cell| cell.is_today && cell.entry_count == 2));
    }

    #[test]
    fn empty_states_distinguish_no_data_from_no_match() {
        let now = noon_today();
        let mut state = AppState::default();
        let vm = state.compute_viewmodel(now);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("No entries yet".to_string()));

        log(&mut state, Mood::Neutral, "", now);
        state.query.mood_filter = MoodFilter::Only(Mood::Terrible);
        let vm = state.compute_viewmodel(now);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("No entries match".to_string()));
    }
}
