//! The query pipeline: pure functions from entries and parameters to results.
//!
//! Every change to the store or to the filter/search/sort parameters triggers
//! a full recomputation over the whole list; there is no caching. Nothing in
//! this module mutates its input.
//!
//! # Modules
//!
//! - [`filter`]: Mood filter and free-text search
//! - [`sort`]: Presentation ordering
//! - [`stats`]: Totals, streak, most common mood, weekly count
//! - [`distribution`]: Percentage share of each mood
//! - [`calendar`]: Per-day buckets for the heat-strip
//!
//! # Example
//!
//! ```rust
//! use mood_journal::query::{run, QueryParams, MoodFilter, SortMode};
//!
//! let params = QueryParams {
//!     mood_filter: MoodFilter::All,
//!     search: "work".to_string(),
//!     sort: SortMode::Newest,
//! };
//! let result = run(&[], &params, chrono::Local::now(), 30);
//! assert!(result.visible.is_empty());
//! assert_eq!(result.calendar.len(), 30);
//! ```

pub mod calendar;
pub mod distribution;
pub mod filter;
pub mod sort;
pub mod stats;

pub use calendar::{compute_calendar, compute_day_bucket, CalendarDay};
pub use distribution::{compute_distribution, Distribution, MoodShare};
pub use filter::{filter_entries, MoodFilter};
pub use sort::{sort_entries, SortMode};
pub use stats::{compute_stats, compute_streak, Stats};

use crate::domain::MoodEntry;
use chrono::{DateTime, Local};

/// Filter, search and sort parameters chosen by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub mood_filter: MoodFilter,
    pub search: String,
    pub sort: SortMode,
}

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone)]
pub struct QueryResult<'a> {
    /// Filtered and sorted entries.
    pub visible: Vec<&'a MoodEntry>,
    /// Statistics over all entries.
    pub stats: Stats,
    /// Distribution over all entries.
    pub distribution: Distribution,
    /// Heat-strip over all entries, oldest day first.
    pub calendar: Vec<CalendarDay>,
}

/// Runs the whole pipeline.
#[must_use]
pub fn run<'a>(entries: &'a [MoodEntry], params: &QueryParams, now: DateTime<Local>, calendar_days: u32) -> QueryResult<'a> {
    let _span = tracing::debug_span!("query_run",
        total = entries.len(),
        mood_filter = %params.mood_filter,
        sort = %params.sort
    ).entered();

    let filtered = filter_entries(entries, params.mood_filter, &params.search);
    let visible = sort_entries(&filtered, params.sort);

    QueryResult {
        visible,
        stats: compute_stats(entries, now),
        distribution: compute_distribution(entries),
        calendar: compute_calendar(entries, now.date_naive(), calendar_days),
    }
}
