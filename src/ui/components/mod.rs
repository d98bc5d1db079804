//! Composable UI component renderers.
//!
//! Each component appends its part of the output to a `String`.
//!
//! # Components
//!
//! - [`header`]: Title and count summary
//! - [`footer`]: Usage hint
//! - [`search`]: Active query box
//! - [`history`]: Entry list with match highlighting
//! - [`stats`]: Headline numbers
//! - [`chart`]: Mood distribution bars
//! - [`calendar`]: Day-by-day heat-strip
//! - [`empty`]: Empty state message
//!
//! # Layouts
//!
//! Every view shares the frame:
//!
//! ```text
//! [Header]
//! [Border]
//! [View body]
//! [Border]
//! [Footer]
//! ```

mod calendar;
mod chart;
mod empty;
mod footer;
mod header;
mod history;
mod search;
mod stats;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{UIViewModel, View};
use std::fmt::{self, Write};

use calendar::render_calendar;
use chart::render_chart;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use history::render_entries;
use search::render_search_bar;
use stats::render_stats;

/// Renders a horizontal border line across `cols`.
fn render_border(out: &mut String, color: &str, theme: &Theme, cols: usize) -> fmt::Result {
    writeln!(out, "{}{}{}", theme.fg(color), "─".repeat(cols), theme.reset())
}

/// Renders `view` inside the shared frame.
///
/// # Errors
///
/// Propagates formatter errors from `out`.
pub fn render_view(out: &mut String, vm: &UIViewModel, view: View, theme: &Theme, cols: usize) -> fmt::Result {
    render_header(out, &vm.header, theme, cols)?;
    render_border(out, &theme.colors.border, theme, cols)?;

    match view {
        View::History => {
            if let Some(search) = &vm.search_bar {
                render_search_bar(out, search, theme, cols)?;
            }
            match &vm.empty_state {
                Some(empty) => render_empty_state(out, empty, theme, cols)?,
                None => render_entries(out, &vm.entries, theme)?,
            }
        }
        View::Stats => render_stats(out, &vm.stats, theme)?,
        View::Chart => render_chart(out, &vm.chart, theme, cols)?,
        View::Calendar => render_calendar(out, &vm.calendar, theme)?,
    }

    render_border(out, &theme.colors.border, theme, cols)?;
    render_footer(out, &vm.footer, theme, cols)
}
