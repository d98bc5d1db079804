//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry
//! only display-ready data: formatted times, emoji, percentages and
//! pre-computed highlight ranges.

use crate::domain::Mood;
use chrono::NaiveDate;

/// Which part of the journal a render shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Filtered, sorted entry list.
    #[default]
    History,
    /// Stat cards.
    Stats,
    /// Mood distribution bars.
    Chart,
    /// Calendar heat-strip.
    Calendar,
}

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub footer: FooterInfo,

    /// Visible entries, in display order.
    pub entries: Vec<DisplayEntry>,

    /// Set when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// Active filter and search, if any.
    pub search_bar: Option<SearchBarInfo>,

    pub stats: StatsInfo,
    pub chart: Vec<ChartBar>,
    pub calendar: Vec<CalendarCell>,
}

/// Display information for one journal entry.
#[derive(Debug, Clone)]
pub struct DisplayEntry {
    pub id: i64,
    pub mood: Mood,
    pub emoji: &'static str,
    /// Local timestamp, e.g. `Mon Jan  1 2024, 09:30`.
    pub when: String,
    /// Relative age, e.g. `3h ago`.
    pub ago: String,
    pub note: String,
    pub tags: Vec<String>,

    /// Character ranges of `note` matching the search term.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    /// Count summary shown under the title.
    pub subtitle: String,
}

/// Usage hint printed under the view.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub hint: String,
}

/// Shown when no entries are visible.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Active query, shown above the list.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    pub mood_filter: String,
    pub sort: String,
}

#[derive(Debug, Clone)]
pub struct StatsInfo {
    pub total: usize,
    pub streak: u32,
    pub this_week: usize,
    /// `None` when the journal is empty.
    pub most_common: Option<Mood>,
}

/// One bar of the distribution chart.
#[derive(Debug, Clone)]
pub struct ChartBar {
    pub mood: Mood,
    pub emoji: &'static str,
    pub count: usize,
    pub percent: f64,
}

/// One day of the calendar heat-strip.
#[derive(Debug, Clone)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub entry_count: usize,
    pub mood: Option<Mood>,
    pub is_today: bool,
}
