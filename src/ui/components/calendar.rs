//! Calendar heat-strip renderer.
//!
//! Days are laid out oldest first in rows of seven, each row labelled with
//! the date of its first day. A day takes the color of its representative
//! mood; days without entries use `calendar_empty`. Without color the mood's
//! initial stands in for the colored block.

use crate::domain::Mood;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CalendarCell;
use std::fmt::{self, Write};

const DAYS_PER_ROW: usize = 7;

/// Renders the strip followed by a one-line legend.
///
/// # Errors
///
/// Propagates formatter errors from `out`.
pub fn render_calendar(out: &mut String, cells: &[CalendarCell], theme: &Theme) -> fmt::Result {
    for row in cells.chunks(DAYS_PER_ROW) {
        let Some(first) = row.first() else { continue };
        write!(
            out,
            "  {}{}{}  ",
            theme.fg(&theme.colors.text_dim),
            first.date.format("%b %e"),
            theme.reset()
        )?;

        for cell in row {
            render_cell(out, cell, theme)?;
            out.push(' ');
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    write!(out, "  ")?;
    for mood in Mood::ALL {
        write!(out, "{}{}{} {}  ", theme.mood_fg(mood), glyph(Some(mood), theme), theme.reset(), mood.name())?;
    }
    writeln!(out)
}

fn render_cell(out: &mut String, cell: &CalendarCell, theme: &Theme) -> fmt::Result {
    let color = match cell.mood {
        Some(mood) => theme.mood_fg(mood),
        None => theme.fg(&theme.colors.calendar_empty),
    };
    let underline = if cell.is_today && theme.color { "\u{001b}[4m" } else { "" };

    write!(out, "{color}{underline}{}{}", glyph(cell.mood, theme), theme.reset())
}

fn glyph(mood: Option<Mood>, theme: &Theme) -> String {
    match (theme.color, mood) {
        (true, Some(_)) => "██".to_string(),
        (true, None) => "░░".to_string(),
        (false, Some(m)) => format!(" {}", m.name().chars().next().unwrap_or('?')),
        (false, None) => " ·".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeMode;
    use chrono::NaiveDate;

    #[test]
    fn plain_strip_uses_mood_initials() {
        let theme = Theme::for_mode(ThemeMode::Light).unwrap().with_color(false);
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let cells: Vec<CalendarCell> = (0..9)
            .map(|i| CalendarCell {
                date: start + chrono::Duration::days(i),
                entry_count: usize::from(i == 2),
                mood: (i == 2).then_some(Mood::Stressed),
                is_today: i == 8,
            })
            .collect();

        let mut out = String::new();
        render_calendar(&mut out, &cells, &theme).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "  Mar  1   ·  ·  S  ·  ·  ·  · ");
        assert_eq!(lines[1], "  Mar  8   ·  · ");
        assert!(lines[3].contains(" A Amazing"));
    }
}
