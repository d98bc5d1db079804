//! Event handling and state transition logic.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the binary (one per user action)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and its store
//! 4. Actions are collected and returned for the session to execute
//!
//! # Event Types
//!
//! - **Entry form**: `SelectMood`, `SetNote`, `AddTag`, `RemoveTag`, `SubmitEntry`
//! - **Store**: `DeleteEntry`, `ClearAll`, `ImportLoaded`, `ImportFailed`
//! - **Query**: `SetMoodFilter`, `SetSearch`, `SetSort`
//! - **Other**: `ExportRequested`, `SetTheme`, `ToggleTheme`

use crate::app::actions::Notice;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Mood;
use crate::query::{MoodFilter, SortMode};
use crate::storage::models::{encode_entries, parse_import};
use crate::storage::EXPORT_FILE_NAME;
use crate::ui::theme::ThemeMode;
use chrono::Utc;

/// Events triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Picks the mood for the entry form.
    SelectMood(Mood),
    /// Replaces the entry form's note.
    SetNote(String),
    /// Adds a tag to the entry form.
    AddTag(String),
    /// Removes a tag from the entry form.
    RemoveTag(String),
    /// Saves the entry form as a new entry.
    SubmitEntry,
    DeleteEntry {
        id: i64,
    },
    ClearAll,

    /// An import file was read successfully.
    ///
    /// Parsing and validation happen in the handler so a bad payload never
    /// touches the store.
    ImportLoaded {
        contents: String,
    },

    /// An import file could not be read.
    ImportFailed {
        error: String,
    },

    ExportRequested,
    SetMoodFilter(MoodFilter),
    SetSearch(String),
    SetSort(SortMode),
    SetTheme(ThemeMode),
    ToggleTheme,
}

impl Event {
    /// Variant name, for spans and logs. Carries no user content.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SelectMood(_) => "SelectMood",
            Self::SetNote(_) => "SetNote",
            Self::AddTag(_) => "AddTag",
            Self::RemoveTag(_) => "RemoveTag",
            Self::SubmitEntry => "SubmitEntry",
            Self::DeleteEntry { .. } => "DeleteEntry",
            Self::ClearAll => "ClearAll",
            Self::ImportLoaded { .. } => "ImportLoaded",
            Self::ImportFailed { .. } => "ImportFailed",
            Self::ExportRequested => "ExportRequested",
            Self::SetMoodFilter(_) => "SetMoodFilter",
            Self::SetSearch(_) => "SetSearch",
            Self::SetSort(_) => "SetSort",
            Self::SetTheme(_) => "SetTheme",
            Self::ToggleTheme => "ToggleTheme",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `false` when the event left
/// the visible state unchanged.
///
/// # Errors
///
/// - [`JournalError::Validation`](crate::JournalError::Validation) when submitting without a mood
/// - [`JournalError::Storage`](crate::JournalError::Storage) if the export cannot be serialized
///
/// Import problems are not errors; they come back as notices.
///
/// # Example
///
/// ```rust
/// use mood_journal::app::{handle_event, Action, AppState, Event};
/// use mood_journal::Mood;
///
/// let mut state = AppState::default();
/// handle_event(&mut state, &Event::SelectMood(Mood::Good))?;
/// let (render, actions) = handle_event(&mut state, &Event::SubmitEntry)?;
/// assert!(render);
/// assert_eq!(actions[0], Action::PersistEntries);
/// # Ok::<(), mood_journal::JournalError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.kind()).entered();

    match event {
        Event::SelectMood(mood) => {
            state.draft.mood = Some(*mood);
            Ok((true, vec![]))
        }
        Event::SetNote(note) => {
            state.draft.set_note(note);
            Ok((true, vec![]))
        }
        Event::AddTag(tag) => {
            let changed = state.draft.tags.add(tag);
            if !changed {
                tracing::debug!(count = state.draft.tags.len(), "tag ignored");
            }
            Ok((changed, vec![]))
        }
        Event::RemoveTag(tag) => Ok((state.draft.tags.remove(tag), vec![])),
        Event::SubmitEntry => {
            let mood = state.draft.mood;
            let id = state.submit_draft(Utc::now())?;
            let label = mood.map_or("", Mood::name);
            Ok((
                true,
                vec![
                    Action::PersistEntries,
                    Action::Notify(Notice::info(format!("Logged {label} (id {id})"))),
                ],
            ))
        }
        Event::DeleteEntry { id } => {
            if state.store.remove(*id) {
                Ok((true, vec![Action::PersistEntries, Action::Notify(Notice::info("Entry deleted"))]))
            } else {
                tracing::debug!(id, "delete of unknown id");
                Ok((false, vec![Action::Notify(Notice::info(format!("No entry with id {id}")))]))
            }
        }
        Event::ClearAll => {
            let removed = state.store.clear();
            if removed == 0 {
                return Ok((false, vec![Action::Notify(Notice::info("Journal is already empty"))]));
            }
            Ok((
                true,
                vec![
                    Action::PersistEntries,
                    Action::Notify(Notice::info(format!("Cleared {removed} entries"))),
                ],
            ))
        }
        Event::ImportLoaded { contents } => Ok(handle_import(state, contents)),
        Event::ImportFailed { error } => {
            tracing::warn!(error = %error, "import file unreadable");
            Ok((false, vec![Action::Notify(Notice::error(format!("Could not read import file: {error}")))]))
        }
        Event::ExportRequested => {
            let contents = encode_entries(state.store.entries(), true)?;
            tracing::debug!(count = state.store.len(), bytes = contents.len(), "export prepared");
            Ok((
                false,
                vec![Action::OfferDownload {
                    file_name: EXPORT_FILE_NAME.to_string(),
                    contents,
                }],
            ))
        }
        Event::SetMoodFilter(filter) => Ok((replace(&mut state.query.mood_filter, *filter), vec![])),
        Event::SetSearch(term) => Ok((replace(&mut state.query.search, term.clone()), vec![])),
        Event::SetSort(sort) => Ok((replace(&mut state.query.sort, *sort), vec![])),
        Event::SetTheme(mode) => {
            state.theme = *mode;
            Ok((true, vec![Action::PersistTheme]))
        }
        Event::ToggleTheme => {
            state.theme = state.theme.toggle();
            Ok((true, vec![Action::PersistTheme]))
        }
    }
}

/// Parses, validates and prepends an import payload.
fn handle_import(state: &mut AppState, contents: &str) -> (bool, Vec<Action>) {
    let batch = match parse_import(contents) {
        Ok(batch) => batch,
        Err(e) => {
            tracing::warn!(error = %e, "import rejected");
            return (false, vec![Action::Notify(Notice::error(e.to_string()))]);
        }
    };

    let rejected = batch.rejected.len();
    let imported = state.store.import_batch(batch.entries);
    tracing::debug!(imported, rejected, "import applied");

    let mut actions = Vec::new();
    if imported > 0 {
        actions.push(Action::PersistEntries);
    }

    let notice = match (imported, batch.rejected.first()) {
        (0, None) => Notice::info("Nothing to import"),
        (n, None) => Notice::info(format!("Imported {n} entries")),
        (n, Some(first)) => Notice::warning(format!(
            "Imported {n} entries, rejected {rejected} (entry {}: {})",
            first.index, first.reason
        )),
    };
    actions.push(Action::Notify(notice));

    (imported > 0, actions)
}

/// Assigns `value` and reports whether it differed.
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::NoticeLevel;
    use crate::JournalError;

    fn notices(actions: &[Action]) -> Vec<&Notice> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Notify(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    fn logged(state: &mut AppState, mood: Mood) -> i64 {
        handle_event(state, &Event::SelectMood(mood)).unwrap();
        handle_event(state, &Event::SubmitEntry).unwrap();
        state.store.entries()[0].id
    }

    #[test]
    fn event_kind_omits_payload() {
        let event = Event::ImportLoaded {
            contents: "[{\"note\":\"private\"}]".into(),
        };
        assert_eq!(event.kind(), "ImportLoaded");
        assert_eq!(Event::SetNote("diary text".into()).kind(), "SetNote");
    }

    #[test]
    fn submit_without_mood_creates_nothing() {
        let mut state = AppState::default();
        let result = handle_event(&mut state, &Event::SubmitEntry);
        assert!(matches!(result, Err(JournalError::Validation(_))));
        assert!(state.store.is_empty());
    }

    #[test]
    fn tags_past_the_cap_are_ignored() {
        let mut state = AppState::default();
        for tag in ["a", "b", "c", "d", "e"] {
            assert!(handle_event(&mut state, &Event::AddTag(tag.into())).unwrap().0);
        }
        let (changed, _) = handle_event(&mut state, &Event::AddTag("f".into())).unwrap();
        assert!(!changed);
        let (changed, _) = handle_event(&mut state, &Event::AddTag("A".into())).unwrap();
        assert!(!changed);
        assert_eq!(state.draft.tags.len(), 5);
    }

    #[test]
    fn delete_unknown_id_is_not_an_error() {
        let mut state = AppState::default();
        logged(&mut state, Mood::Good);

        let (render, actions) = handle_event(&mut state, &Event::DeleteEntry { id: -1 }).unwrap();
        assert!(!render);
        assert!(!actions.contains(&Action::PersistEntries));
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn delete_and_clear_persist() {
        let mut state = AppState::default();
        let id = logged(&mut state, Mood::Good);
        logged(&mut state, Mood::Terrible);

        let (_, actions) = handle_event(&mut state, &Event::DeleteEntry { id }).unwrap();
        assert_eq!(actions[0], Action::PersistEntries);
        let (_, actions) = handle_event(&mut state, &Event::ClearAll).unwrap();
        assert_eq!(actions[0], Action::PersistEntries);
        assert!(state.store.is_empty());

        let (render, actions) = handle_event(&mut state, &Event::ClearAll).unwrap();
        assert!(!render);
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn invalid_import_leaves_store_untouched() {
        let mut state = AppState::default();
        logged(&mut state, Mood::Neutral);

        let (_, actions) = handle_event(&mut state, &Event::ImportLoaded { contents: "{\"a\":1}".into() }).unwrap();
        assert_eq!(state.store.len(), 1);
        assert_eq!(notices(&actions)[0].level, NoticeLevel::Error);

        let (_, actions) = handle_event(&mut state, &Event::ImportFailed { error: "denied".into() }).unwrap();
        assert_eq!(state.store.len(), 1);
        assert!(notices(&actions)[0].message.contains("denied"));
    }

    #[test]
    fn partial_import_warns_with_counts() {
        let mut state = AppState::default();
        let payload = r#"[
            {"id":1,"mood":"Good","note":"x","tags":[],"timestamp":"2024-01-01T00:00:00Z"},
            {"id":2,"mood":"Ecstatic","timestamp":"2024-01-02T00:00:00Z"}
        ]"#;

        let (render, actions) = handle_event(&mut state, &Event::ImportLoaded { contents: payload.into() }).unwrap();
        assert!(render);
        assert_eq!(actions[0], Action::PersistEntries);
        let notice = notices(&actions)[0];
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.message.contains("Imported 1 entries, rejected 1"));
        assert_eq!(state.store.entries()[0].id, 1);
    }

    #[test]
    fn export_offers_pretty_json() {
        let mut state = AppState::default();
        logged(&mut state, Mood::Amazing);

        let (_, actions) = handle_event(&mut state, &Event::ExportRequested).unwrap();
        let Action::OfferDownload { file_name, contents } = &actions[0] else {
            panic!("expected a download, got {actions:?}");
        };
        assert_eq!(file_name, "mood_entries.json");
        assert!(contents.starts_with("[\n"));
        assert!(contents.contains("\"mood\": \"Amazing\""));
    }

    #[test]
    fn query_events_report_changes() {
        let mut state = AppState::default();
        assert!(handle_event(&mut state, &Event::SetSearch("gym".into())).unwrap().0);
        assert!(!handle_event(&mut state, &Event::SetSearch("gym".into())).unwrap().0);
        assert!(handle_event(&mut state, &Event::SetSort(SortMode::MoodWorst)).unwrap().0);
        assert!(handle_event(&mut state, &Event::SetMoodFilter(MoodFilter::Only(Mood::Good))).unwrap().0);
    }

    #[test]
    fn theme_events_persist() {
        let mut state = AppState::default();
        let (_, actions) = handle_event(&mut state, &Event::ToggleTheme).unwrap();
        assert_eq!(state.theme, ThemeMode::Dark);
        assert_eq!(actions, vec![Action::PersistTheme]);
        handle_event(&mut state, &Event::SetTheme(ThemeMode::Light)).unwrap();
        assert_eq!(state.theme, ThemeMode::Light);
    }
}
