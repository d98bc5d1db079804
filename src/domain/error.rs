//! Error types for the mood journal.
//!
//! This module defines the centralized error type [`JournalError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for mood journal operations.
///
/// Consolidates every failure the journal can report, from blob storage to
/// import parsing and form validation. I/O errors convert automatically via
/// `#[from]`; the remaining variants carry a human-readable description.
///
/// # Examples
///
/// ```
/// use mood_journal::JournalError;
///
/// fn submit(mood: Option<&str>) -> Result<(), JournalError> {
///     mood.map(|_| ()).ok_or_else(|| JournalError::Validation("please select a mood".to_string()))
/// }
///
/// assert!(submit(None).is_err());
/// ```
#[derive(Debug, Error)]
pub enum JournalError {
    /// Reading or writing the persisted blob store failed.
    ///
    /// Covers corrupted blobs as well as serialization failures. The string
    /// describes what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An import payload could not be parsed as a JSON array of entries.
    #[error("Import error: {0}")]
    Import(String),

    /// User input did not satisfy the entry form's requirements.
    ///
    /// Raised when an entry is submitted without a mood, or a mood name
    /// cannot be recognized.
    #[error("{0}")]
    Validation(String),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A theme name could not be recognized.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for mood journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;
