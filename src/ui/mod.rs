//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled text through composable rendering
//! components, with light/dark theme support and search match highlighting.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, padding)
//! - [`theme`]: Palettes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::{Theme, ThemeMode};
pub use viewmodel::{
    CalendarCell, ChartBar, DisplayEntry, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, StatsInfo, UIViewModel,
    View,
};
