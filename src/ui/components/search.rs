//! Query bar component renderer.
//!
//! Shows the active search term, mood filter and sort mode in a box above the
//! entry list. Only rendered when the query differs from the defaults.

use crate::ui::helpers::{char_len, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;
use std::fmt::{self, Write};

const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the query box, three lines tall.
///
/// # Layout
///
/// ```text
///   ┌──────────────────────────────────────────┐
///   │ Search: gym   Mood: Good   Sort: newest  │
///   └──────────────────────────────────────────┘
/// ```
///
/// # Errors
///
/// Propagates formatter errors from `out`.
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, theme: &Theme, cols: usize) -> fmt::Result {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = theme.fg(&theme.colors.border);

    writeln!(out, "{margin}{border}┌{}┐{}", "─".repeat(inner_width), theme.reset())?;

    let query = if search.query.is_empty() { "-" } else { search.query.as_str() };
    let text = truncate(
        &format!(" Search: {query}   Mood: {}   Sort: {}", search.mood_filter, search.sort),
        inner_width,
    );
    let padding = inner_width.saturating_sub(char_len(&text));

    writeln!(
        out,
        "{margin}{border}│{}{text}{}{border}│{}",
        theme.fg(&theme.colors.text_normal),
        " ".repeat(padding),
        theme.reset()
    )?;

    writeln!(out, "{margin}{border}└{}┘{}", "─".repeat(inner_width), theme.reset())
}
