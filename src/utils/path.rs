//! Path utilities: expand ~ in configured and user supplied paths.

use std::path::PathBuf;

/// `~` and `~/...` resolve against the home directory; any other path,
/// relative ones included, is returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    match (path, dirs::home_dir()) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
