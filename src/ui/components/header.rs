//! Header component renderer.
//!
//! Renders the centered, bold title and the count summary underneath.

use crate::ui::helpers::{center_padding, char_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;
use std::fmt::{self, Write};

/// Renders the header block.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
/// [left padding] subtitle
/// ```
///
/// Padding is split evenly on both sides to center the title. If the width
/// cannot evenly divide, right padding is slightly larger.
///
/// # Errors
///
/// Propagates formatter errors from `out`.
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) -> fmt::Result {
    let padding = center_padding(&header.title, cols);

    write!(out, "{}{}", theme.bold(), theme.fg(&theme.colors.header_fg))?;
    out.push_str(&" ".repeat(padding));
    out.push_str(&header.title);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + char_len(&header.title))));
    writeln!(out, "{}", theme.reset())?;

    let sub_padding = center_padding(&header.subtitle, cols);
    writeln!(
        out,
        "{}{}{}{}",
        " ".repeat(sub_padding),
        theme.fg(&theme.colors.text_dim),
        header.subtitle,
        theme.reset()
    )
}
