//! Session runtime: owns state and storage, executes actions.
//!
//! The handler stays pure; everything that touches storage or produces output
//! for the user happens here. Storage failures never abort a dispatch: they
//! turn into error notices and the in-memory state is kept.

use crate::app::actions::Notice;
use crate::app::handler::{handle_event, Event};
use crate::app::state::{AppState, DEFAULT_CALENDAR_DAYS};
use crate::app::Action;
use crate::query::SortMode;
use crate::storage::Storage;
use crate::ui::theme::ThemeMode;

/// Defaults applied when a session opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Theme used until one has been persisted.
    pub theme: ThemeMode,
    pub calendar_days: u32,
    pub default_sort: SortMode,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            calendar_days: DEFAULT_CALENDAR_DAYS,
            default_sort: SortMode::default(),
        }
    }
}

/// A file handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub contents: String,
}

/// What a dispatch produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub should_render: bool,
    pub notices: Vec<Notice>,
    pub downloads: Vec<Download>,
}

impl Outcome {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.notices.iter().any(Notice::is_error)
    }

    /// Folds a later outcome into this one.
    pub fn merge(&mut self, other: Self) {
        self.should_render |= other.should_render;
        self.notices.extend(other.notices);
        self.downloads.extend(other.downloads);
    }
}

/// Application state bound to a storage backend.
pub struct Session {
    state: AppState,
    storage: Box<dyn Storage>,
}

impl Session {
    /// Loads entries and theme from `storage`.
    ///
    /// A stored theme wins over `options.theme`. If the entries blob cannot be
    /// read the session starts empty and the returned outcome carries an error
    /// notice.
    pub fn open(storage: Box<dyn Storage>, options: SessionOptions) -> (Self, Outcome) {
        let _span = tracing::debug_span!("session_open").entered();
        let mut outcome = Outcome::default();

        let entries = storage.load_entries().unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to load entries");
            outcome
                .notices
                .push(Notice::error(format!("Could not load saved entries, starting empty: {e}")));
            Vec::new()
        });

        let theme = match storage.load_theme() {
            Ok(stored) => stored.unwrap_or(options.theme),
            Err(e) => {
                tracing::error!(error = %e, "failed to load theme");
                outcome.notices.push(Notice::error(format!("Could not load saved theme: {e}")));
                options.theme
            }
        };

        let mut state = AppState::new(entries, theme);
        state.calendar_days = options.calendar_days;
        state.query.sort = options.default_sort;

        tracing::debug!(entries = state.store.len(), theme = %state.theme, "session opened");
        (Self { state, storage }, outcome)
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable access for settings that bypass events, like the calendar window.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handles one event and executes the resulting actions.
    pub fn dispatch(&mut self, event: Event) -> Outcome {
        let _span = tracing::debug_span!("dispatch").entered();

        match handle_event(&mut self.state, &event) {
            Ok((should_render, actions)) => {
                let mut outcome = Outcome {
                    should_render,
                    ..Outcome::default()
                };
                for action in actions {
                    self.execute(action, &mut outcome);
                }
                outcome
            }
            Err(e) => {
                tracing::debug!(error = %e, "event failed");
                Outcome {
                    should_render: false,
                    notices: vec![Notice::error(e.to_string())],
                    downloads: vec![],
                }
            }
        }
    }

    /// Dispatches events in order, stopping after the first error notice.
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = Event>) -> Outcome {
        let mut outcome = Outcome::default();
        for event in events {
            outcome.merge(self.dispatch(event));
            if outcome.has_errors() {
                break;
            }
        }
        outcome
    }

    fn execute(&mut self, action: Action, outcome: &mut Outcome) {
        match action {
            Action::PersistEntries => {
                if let Err(e) = self.storage.save_entries(self.state.store.entries()) {
                    tracing::error!(error = %e, "failed to persist entries");
                    outcome.notices.push(Notice::error(format!("Could not save entries: {e}")));
                }
            }
            Action::PersistTheme => {
                if let Err(e) = self.storage.save_theme(self.state.theme) {
                    tracing::error!(error = %e, "failed to persist theme");
                    outcome.notices.push(Notice::error(format!("Could not save theme: {e}")));
                }
            }
            Action::Notify(notice) => outcome.notices.push(notice),
            Action::OfferDownload { file_name, contents } => {
                outcome.downloads.push(Download { file_name, contents });
            }
        }
    }
}
