//! Platform path resolution for journal data and configuration.
//!
//! Data lives under the platform data directory:
//! - macOS:   `~/Library/Application Support/mood-journal`
//! - Linux:   `$XDG_DATA_HOME/mood-journal` or `~/.local/share/mood-journal`
//! - Windows: `%APPDATA%\mood-journal`
//!
//! When no home directory can be determined, `./.mood-journal` is used.

use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Directory name used under the platform data and config roots.
pub const APP_DIR_NAME: &str = "mood-journal";

/// Returns the default data directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    BaseDirs::new().map_or_else(
        || PathBuf::from(".").join(format!(".{APP_DIR_NAME}")),
        |base| base.data_dir().join(APP_DIR_NAME),
    )
}

/// Candidate config file locations, in priority order.
///
/// `~/.config/mood-journal/config.toml` comes first on every platform, then
/// the native config directory.
#[must_use]
pub fn config_file_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(base) = BaseDirs::new() {
        paths.push(base.home_dir().join(".config").join(APP_DIR_NAME).join("config.toml"));
        let native = base.config_dir().join(APP_DIR_NAME).join("config.toml");
        if !paths.contains(&native) {
            paths.push(native);
        }
    }
    paths
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when the home directory is
/// unknown, are returned unchanged.
///
/// # Examples
///
/// ```
/// use mood_journal::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// assert_eq!(expand_tilde("relative/~"), PathBuf::from("relative/~"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = BaseDirs::new().map(|b| b.home_dir().to_path_buf());
    expand_tilde_with(path, home.as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    match (home, path.strip_prefix('~')) {
        (Some(home), Some("")) => home.to_path_buf(),
        (Some(home), Some(rest)) if rest.starts_with('/') || rest.starts_with('\\') => {
            home.join(&rest[1..])
        }
        _ => PathBuf::from(path),
    }
}

/// Picks the data directory: explicit override first, then the platform default.
#[must_use]
pub fn resolve_data_dir(explicit: Option<&str>) -> PathBuf {
    explicit
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map_or_else(get_data_dir, expand_tilde)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_against_home() {
        let home = Path::new("/home/ana");
        assert_eq!(expand_tilde_with("~", Some(home)), PathBuf::from("/home/ana"));
        assert_eq!(expand_tilde_with("~/journal", Some(home)), PathBuf::from("/home/ana/journal"));
        assert_eq!(expand_tilde_with("~other/x", Some(home)), PathBuf::from("~other/x"));
        assert_eq!(expand_tilde_with("~/journal", None), PathBuf::from("~/journal"));
    }

    #[test]
    fn explicit_data_dir_wins() {
        assert_eq!(resolve_data_dir(Some("/tmp/mj")), PathBuf::from("/tmp/mj"));
        assert_eq!(resolve_data_dir(Some("  ")), get_data_dir());
    }
}
