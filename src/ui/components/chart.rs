//! Mood distribution bar chart.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::ChartBar;
use std::fmt::{self, Write};

/// Columns taken by the label and the percentage around each bar.
const LABEL_WIDTH: usize = 30;
const MIN_BAR_WIDTH: usize = 10;

/// Renders one horizontal bar per mood.
///
/// # Layout
///
/// ```text
///  😄 Amazing    ██████████░░░░░░░░░░░░░░  40.0% (4)
/// ```
///
/// # Errors
///
/// Propagates formatter errors from `out`.
pub fn render_chart(out: &mut String, bars: &[ChartBar], theme: &Theme, cols: usize) -> fmt::Result {
    let width = cols.saturating_sub(LABEL_WIDTH).max(MIN_BAR_WIDTH);

    for bar in bars {
        let filled = filled_cells(bar.percent, width);
        writeln!(
            out,
            " {} {:<10} {}{}{}{}{}{} {:>5.1}% ({}){}",
            bar.emoji,
            bar.mood.name(),
            theme.mood_fg(bar.mood),
            "█".repeat(filled),
            theme.fg(&theme.colors.calendar_empty),
            "░".repeat(width - filled),
            theme.reset(),
            theme.fg(&theme.colors.text_normal),
            bar.percent,
            bar.count,
            theme.reset(),
        )?;
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn filled_cells(percent: f64, width: usize) -> usize {
    let cells = (percent.clamp(0.0, 100.0) / 100.0 * width as f64).round();
    (cells as usize).min(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fill_is_proportional_and_bounded() {
        assert_eq!(filled_cells(0.0, 20), 0);
        assert_eq!(filled_cells(50.0, 20), 10);
        assert_eq!(filled_cells(100.0, 20), 20);
        assert_eq!(filled_cells(250.0, 20), 20);
    }
}
