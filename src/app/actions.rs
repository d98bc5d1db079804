//! Actions representing side effects to be executed by the session runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event, so
//! several side effects can be queued for one state transition. The
//! [`Session`](crate::app::Session) executes them in order.

use std::fmt;

/// Commands representing side effects to be executed by the session runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Writes the full entry sequence to storage.
    PersistEntries,

    /// Writes the current theme to storage.
    PersistTheme,

    /// Surfaces a message to the user.
    Notify(Notice),

    /// Hands a file to the user; the binary writes it to disk or stdout.
    OfferDownload {
        /// Suggested file name.
        file_name: String,
        /// File contents.
        contents: String,
    },
}

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// User-facing message produced by the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}
