//! Path utilities for the Zellij sandbox.

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "FACET_MENU_DATA_DIR";

/// Returns the directory holding trace files.
///
/// Defaults to `/host/.local/share/zellij/facet-menu`; `FACET_MENU_DATA_DIR`
/// takes precedence when set and non-empty.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    std::env::var(DATA_DIR_ENV)
        .ok()
        .filter(|dir| !dir.is_empty())
        .map_or_else(
            || PathBuf::from("/host/.local/share/zellij").join("facet-menu"),
            PathBuf::from,
        )
}

/// Expands a leading `~` to the sandbox's `/host` mount.
///
/// ```
/// use facet_menu::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
