//! Footer component renderer.

use crate::ui::helpers::{center_padding, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;
use std::fmt::{self, Write};

/// Renders the usage hint, dimmed and centered, truncated to `cols`.
///
/// # Errors
///
/// Propagates formatter errors from `out`.
pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) -> fmt::Result {
    let hint = truncate(&footer.hint, cols);
    let padding = center_padding(&hint, cols);

    writeln!(
        out,
        "{}{}{}{hint}{}",
        " ".repeat(padding),
        theme.dim(),
        theme.fg(&theme.colors.text_dim),
        theme.reset()
    )
}
