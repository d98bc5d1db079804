//! Empty state component renderer.

use crate::ui::helpers::center_padding;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;
use std::fmt::{self, Write};

/// Renders a centered two-line message.
///
/// Shown when the journal has no entries, or when the filter and search
/// leave nothing visible. The message uses `empty_state_fg`, the subtitle
/// `text_dim` with dim styling.
///
/// # Errors
///
/// Propagates formatter errors from `out`.
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) -> fmt::Result {
    writeln!(out)?;
    writeln!(
        out,
        "{}{}{}{}",
        " ".repeat(center_padding(&empty.message, cols)),
        theme.fg(&theme.colors.empty_state_fg),
        empty.message,
        theme.reset()
    )?;
    writeln!(
        out,
        "{}{}{}{}{}",
        " ".repeat(center_padding(&empty.subtitle, cols)),
        theme.dim(),
        theme.fg(&theme.colors.text_dim),
        empty.subtitle,
        theme.reset()
    )?;
    writeln!(out)
}
