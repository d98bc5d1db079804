//! Storage layer for persisted journal state.
//!
//! State lives in a flat key-value blob store with two independent keys: the
//! entries array and the theme. The [`Storage`] trait hides where the blobs
//! actually go.
//!
//! # Modules
//!
//! - `backend`: Storage trait and blob keys
//! - `json`: JSON file-based implementation with atomic writes
//! - `memory`: In-memory implementation
//! - `models`: Entry wire formats, import validation and export encoding

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::{Storage, MOOD_DATA_KEY, THEME_KEY};
pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use models::{parse_import, ImportBatch, Rejection, EXPORT_FILE_NAME};
