//! Path utilities: expand `~` in user supplied paths.

use std::path::PathBuf;

/// Expand a leading `~/` to the home directory. Other paths, including
/// relative ones, are returned untouched and resolve against the working
/// directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
