//! Application layer coordinating state, events, and actions.
//!
//! Sits between the binary and the domain/storage/ui layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                                                    (Session)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands and user-facing notices
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`session`]: Runtime that binds state to storage and executes actions
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use mood_journal::app::{Event, Session, SessionOptions};
//! use mood_journal::storage::MemoryStorage;
//! use mood_journal::Mood;
//!
//! let (mut session, _) = Session::open(Box::new(MemoryStorage::new()), SessionOptions::default());
//! let outcome = session.dispatch_all([Event::SelectMood(Mood::Good), Event::SubmitEntry]);
//! assert!(!outcome.has_errors());
//! assert_eq!(session.state().store.len(), 1);
//! ```

pub mod actions;
pub mod handler;
pub mod session;
pub mod state;

pub use actions::{Action, Notice, NoticeLevel};
pub use handler::{handle_event, Event};
pub use session::{Download, Outcome, Session, SessionOptions};
pub use state::{AppState, MoodDraft, DEFAULT_CALENDAR_DAYS, MAX_CALENDAR_DAYS};
