//! Mood Journal: a personal mood journal for the terminal.
//!
//! Record a mood with an optional note and tags, then browse the history with
//! search and filters, see statistics and streaks, a distribution chart and a
//! calendar heat-strip. Entries are persisted locally in a single JSON file.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Command Line (main.rs, cli.rs)                     │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Session runtime (persist, notify, download)      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Query Layer   │
//! │ (ui/)         │   │ (storage/)    │   │ (query/)      │
//! │ - Rendering   │   │ - JSON file   │   │ - Filter      │
//! │ - Theming     │   │ - Import      │   │ - Sort        │
//! │ - Components  │   │ - Export      │   │ - Stats       │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Mood, entries, tags, entry store (domain/)       │
//! │  - Platform paths (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - File-based OTLP export, stderr logging           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state, event handler and session runtime
//! - [`domain`]: Core domain types (Mood, MoodEntry, EntryStore, errors)
//! - [`query`]: Filter, search, sort and aggregate pipeline
//! - [`infrastructure`]: Platform-specific paths
//! - [`storage`]: Blob storage trait, JSON file backend, import/export formats
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Optional TOML file at `~/.config/mood-journal/config.toml`:
//!
//! ```toml
//! data_dir = "~/Documents/mood"
//! theme = "dark"
//! trace_level = "debug"
//! calendar_days = 28
//! default_sort = "newest"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use mood_journal::app::{Event, Session, SessionOptions};
//! use mood_journal::storage::MemoryStorage;
//! use mood_journal::query::MoodFilter;
//! use mood_journal::{Config, Mood};
//!
//! let config = Config::default();
//! let (mut session, _) = Session::open(Box::new(MemoryStorage::new()), config.session_options());
//!
//! session.dispatch_all([
//!     Event::SelectMood(Mood::Good),
//!     Event::AddTag("work".to_string()),
//!     Event::SubmitEntry,
//!     Event::SetMoodFilter(MoodFilter::Only(Mood::Good)),
//! ]);
//!
//! let vm = session.state().compute_viewmodel(chrono::Local::now());
//! assert_eq!(vm.entries.len(), 1);
//! assert_eq!(vm.stats.streak, 1);
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod query;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Notice, NoticeLevel, Outcome, Session, SessionOptions};
pub use domain::{JournalError, Mood, MoodEntry, Result};
pub use ui::{Theme, ThemeMode};

use crate::app::{DEFAULT_CALENDAR_DAYS, MAX_CALENDAR_DAYS};
use crate::query::SortMode;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Application configuration.
///
/// # Fields
///
/// - `data_dir`: Where `journal.json` and trace files live (platform default when `None`)
/// - `theme`: Theme used until one is chosen and persisted
/// - `trace_level`: Enables OTLP trace export at this level
/// - `calendar_days`: Length of the heat-strip window
/// - `default_sort`: Initial sort for listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: Option<String>,
    pub theme: ThemeMode,
    pub trace_level: Option<String>,
    pub calendar_days: u32,
    pub default_sort: SortMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            theme: ThemeMode::default(),
            trace_level: None,
            calendar_days: DEFAULT_CALENDAR_DAYS,
            default_sort: SortMode::default(),
        }
    }
}

/// Raw TOML shape; every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    data_dir: Option<String>,
    theme: Option<String>,
    trace_level: Option<String>,
    calendar_days: Option<u32>,
    default_sort: Option<String>,
}

impl Config {
    /// Parses a TOML config document.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Config`] on TOML syntax errors, unknown keys,
    /// an unknown theme or sort name, or a calendar window outside
    /// `1..=MAX_CALENDAR_DAYS`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mood_journal::{Config, ThemeMode};
    ///
    /// let config = Config::from_toml_str("theme = \"dark\"\ncalendar_days = 14")?;
    /// assert_eq!(config.theme, ThemeMode::Dark);
    /// assert_eq!(config.calendar_days, 14);
    /// # Ok::<(), mood_journal::JournalError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(contents).map_err(|e| JournalError::Config(e.to_string()))?;
        let defaults = Self::default();

        let theme = file
            .theme
            .as_deref()
            .map(str::parse::<ThemeMode>)
            .transpose()
            .map_err(|e| JournalError::Config(e.to_string()))?
            .unwrap_or(defaults.theme);

        let default_sort = match file.default_sort.as_deref() {
            None => defaults.default_sort,
            Some(name) => parse_sort_strict(name)?,
        };

        let calendar_days = match file.calendar_days {
            Some(days) if (1..=MAX_CALENDAR_DAYS).contains(&days) => days,
            Some(days) => {
                return Err(JournalError::Config(format!(
                    "calendar_days must be between 1 and {MAX_CALENDAR_DAYS}, got {days}"
                )))
            }
            None => defaults.calendar_days,
        };

        Ok(Self {
            data_dir: file.data_dir,
            theme,
            trace_level: file.trace_level,
            calendar_days,
            default_sort,
        })
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Io`] if the file cannot be read, or the errors of
    /// [`Config::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            JournalError::Config(msg) => JournalError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Loads the first existing file among the standard config locations,
    /// or defaults when there is none.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn discover() -> Result<Self> {
        infrastructure::config_file_paths()
            .into_iter()
            .find(|p| p.exists())
            .map_or_else(|| Ok(Self::default()), |p| Self::load(&p))
    }

    /// Builds a config from a flat string map.
    ///
    /// Every field falls back to its default when missing or unparseable.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let theme = map
            .get("theme")
            .and_then(|s| {
                s.parse()
                    .map_err(|e| tracing::debug!(theme = %s, error = %e, "ignoring theme"))
                    .ok()
            })
            .unwrap_or(defaults.theme);

        let calendar_days = map
            .get("calendar_days")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|d| (1..=MAX_CALENDAR_DAYS).contains(d))
            .unwrap_or(defaults.calendar_days);

        let default_sort = map
            .get("default_sort")
            .and_then(|s| parse_sort_strict(s).ok())
            .unwrap_or(defaults.default_sort);

        Self {
            data_dir: map.get("data_dir").cloned().filter(|s| !s.trim().is_empty()),
            theme,
            trace_level: map.get("trace_level").cloned().filter(|s| !s.trim().is_empty()),
            calendar_days,
            default_sort,
        }
    }

    /// Data directory with `~` expanded, or the platform default.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        infrastructure::resolve_data_dir(self.data_dir.as_deref())
    }

    #[must_use]
    pub const fn session_options(&self) -> SessionOptions {
        SessionOptions {
            theme: self.theme,
            calendar_days: self.calendar_days,
            default_sort: self.default_sort,
        }
    }
}

/// Like [`SortMode::parse`] but rejects names it does not know.
fn parse_sort_strict(name: &str) -> Result<SortMode> {
    let mode = SortMode::parse(name);
    if mode == SortMode::Unsorted && !name.trim().eq_ignore_ascii_case("unsorted") {
        return Err(JournalError::Config(format!(
            "unknown sort '{name}', expected newest, oldest, mood-best or mood-worst"
        )));
    }
    Ok(mode)
}

/// Opens the JSON journal in the configured data directory and starts a session.
///
/// If the journal file cannot be opened (unreadable or corrupt) the session
/// runs against in-memory storage and the outcome carries an error notice;
/// the file on disk is left untouched.
pub fn initialize(config: &Config) -> (Session, Outcome) {
    let data_dir = config.resolved_data_dir();
    tracing::debug!(data_dir = %data_dir.display(), "initializing mood journal");

    let (storage, notice): (Box<dyn storage::Storage>, Option<Notice>) = match storage::JsonStorage::in_dir(&data_dir) {
        Ok(json) => (Box::new(json), None),
        Err(e) => {
            tracing::error!(error = %e, "falling back to in-memory storage");
            (
                Box::new(storage::MemoryStorage::new()),
                Some(Notice::error(format!("Could not open journal, changes will not be saved: {e}"))),
            )
        }
    };

    let (session, mut outcome) = Session::open(storage, config.session_options());
    if let Some(notice) = notice {
        outcome.notices.insert(0, notice);
    }
    (session, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_overrides_defaults() {
        let config = Config::from_toml_str(
            r#"
            data_dir = "/tmp/moods"
            theme = "dark"
            trace_level = "info"
            default_sort = "mood-worst"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir.as_deref(), Some("/tmp/moods"));
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.trace_level.as_deref(), Some("info"));
        assert_eq!(config.calendar_days, DEFAULT_CALENDAR_DAYS);
        assert_eq!(config.default_sort, SortMode::MoodWorst);
        assert_eq!(config.resolved_data_dir(), PathBuf::from("/tmp/moods"));
    }

    #[test]
    fn toml_rejects_bad_values() {
        assert!(matches!(Config::from_toml_str("theme = \"sepia\""), Err(JournalError::Config(_))));
        assert!(matches!(Config::from_toml_str("default_sort = \"random\""), Err(JournalError::Config(_))));
        assert!(matches!(Config::from_toml_str("calendar_days = 0"), Err(JournalError::Config(_))));
        assert!(matches!(Config::from_toml_str("calendar_days = 367"), Err(JournalError::Config(_))));
        assert!(matches!(Config::from_toml_str("calendar_days = 4294967295"), Err(JournalError::Config(_))));
        assert_eq!(Config::from_toml_str("calendar_days = 366").unwrap().calendar_days, MAX_CALENDAR_DAYS);
        assert!(matches!(Config::from_toml_str("colour = true"), Err(JournalError::Config(_))));
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn map_falls_back_per_field() {
        let map: BTreeMap<String, String> = [
            ("theme", "sepia"),
            ("calendar_days", "14"),
            ("default_sort", "oldest"),
            ("trace_level", ""),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_map(&map);
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.calendar_days, 14);
        assert_eq!(config.default_sort, SortMode::Oldest);
        assert_eq!(config.trace_level, None);

        let oversized: BTreeMap<String, String> =
            [("calendar_days".to_string(), "4294967295".to_string())].into_iter().collect();
        assert_eq!(Config::from_map(&oversized).calendar_days, DEFAULT_CALENDAR_DAYS);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(Config::load(&dir.path().join("nope.toml")), Err(JournalError::Io(_))));
    }

    #[test]
    fn initialize_survives_corrupt_journal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(storage::json::JOURNAL_FILE_NAME), "garbage").unwrap();
        let config = Config {
            data_dir: Some(dir.path().display().to_string()),
            ..Config::default()
        };

        let (session, outcome) = initialize(&config);
        assert!(outcome.has_errors());
        assert!(session.state().store.is_empty());
        assert_eq!(std::fs::read_to_string(dir.path().join("journal.json")).unwrap(), "garbage");
    }
}
