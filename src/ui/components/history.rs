//! Entry list renderer.
//!
//! Each entry takes up to three lines: the mood line with timestamp and id,
//! the note with search matches highlighted, and the tags.

use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayEntry;
use std::fmt::{self, Write};

const NOTE_INDENT: &str = "     ";

/// Renders all entries in display order, separated by blank lines.
///
/// # Errors
///
/// Propagates formatter errors from `out`.
pub fn render_entries(out: &mut String, entries: &[DisplayEntry], theme: &Theme) -> fmt::Result {
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        render_entry(out, entry, theme)?;
    }
    Ok(())
}

/// Renders a single entry.
///
/// # Layout
///
/// ```text
///  ● 🙂 Good       Mon Jan  1 2024, 09:30 (3h ago)  #1704067200000
///      walked the dog
///      #outside #pets
/// ```
fn render_entry(out: &mut String, entry: &DisplayEntry, theme: &Theme) -> fmt::Result {
    let mood_fg = theme.mood_fg(entry.mood);

    writeln!(
        out,
        " {mood_fg}●{} {} {}{mood_fg}{:<10}{} {}{} ({}){}  {}#{}{}",
        theme.reset(),
        entry.emoji,
        theme.bold(),
        entry.mood.name(),
        theme.reset(),
        theme.fg(&theme.colors.text_normal),
        entry.when,
        entry.ago,
        theme.reset(),
        theme.fg(&theme.colors.text_dim),
        entry.id,
        theme.reset(),
    )?;

    if !entry.note.is_empty() {
        let base = &theme.colors.text_normal;
        write!(out, "{NOTE_INDENT}{}", theme.fg(base))?;
        helpers::write_highlighted_text(out, &entry.note, &entry.highlight_ranges, theme, base)?;
        writeln!(out, "{}", theme.reset())?;
    }

    if !entry.tags.is_empty() {
        let tags: Vec<String> = entry.tags.iter().map(|t| format!("#{t}")).collect();
        writeln!(
            out,
            "{NOTE_INDENT}{}{}{}",
            theme.fg(&theme.colors.accent),
            tags.join(" "),
            theme.reset()
        )?;
    }

    Ok(())
}
