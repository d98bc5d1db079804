//! Top-level rendering coordinator.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component for the chosen view
//!
//! Output is returned as a `String` so callers decide where it goes.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{UIViewModel, View};
use chrono::{DateTime, Local};

/// Renders one view of the journal.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `view` - Which part of the journal to show
/// * `theme` - Palette, usually `Theme::for_mode(state.theme)`
/// * `now` - Reference instant for streaks and relative times
/// * `cols` - Output width in columns
///
/// # Example
///
/// ```rust
/// use mood_journal::app::AppState;
/// use mood_journal::ui::{render, Theme, View};
///
/// let state = AppState::default();
/// let theme = Theme::for_mode(state.theme)?.with_color(false);
/// let text = render(&state, View::Stats, &theme, chrono::Local::now(), 60);
/// assert!(text.contains("Total entries"));
/// # Ok::<(), mood_journal::JournalError>(())
/// ```
#[must_use]
pub fn render(state: &AppState, view: View, theme: &Theme, now: DateTime<Local>, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(now);
    render_viewmodel(&viewmodel, view, theme, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, view: View, theme: &Theme, cols: usize) -> String {
    let _span = tracing::debug_span!("render", ?view, cols).entered();

    let mut out = String::new();
    if let Err(e) = components::render_view(&mut out, vm, view, theme, cols) {
        tracing::error!(error = %e, "render failed");
    }
    out
}
