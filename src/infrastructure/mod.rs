//! Infrastructure layer for filesystem and environment interactions.

pub mod paths;

pub use paths::{config_file_paths, expand_tilde, get_data_dir, resolve_data_dir};
