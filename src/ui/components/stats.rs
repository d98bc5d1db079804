//! Stat card renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatsInfo;
use std::fmt::{self, Write};

/// Renders the four headline numbers, one per line.
///
/// # Errors
///
/// Propagates formatter errors from `out`.
pub fn render_stats(out: &mut String, stats: &StatsInfo, theme: &Theme) -> fmt::Result {
    let most_common = stats
        .most_common
        .map_or_else(|| "-".to_string(), |m| format!("{} {}", m.emoji(), m.name()));
    let streak_unit = if stats.streak == 1 { "day" } else { "days" };

    let rows = [
        ("Total entries", stats.total.to_string()),
        ("Current streak", format!("{} {streak_unit}", stats.streak)),
        ("This week", stats.this_week.to_string()),
        ("Most common", most_common),
    ];

    for (label, value) in rows {
        writeln!(
            out,
            "  {}{label:<16}{}{}{}{value}{}",
            theme.fg(&theme.colors.text_dim),
            theme.reset(),
            theme.bold(),
            theme.fg(&theme.colors.accent),
            theme.reset()
        )?;
    }
    Ok(())
}
