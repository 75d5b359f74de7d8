//! Where keyseq keeps its files
//!
//! ```text
//! <config dir>/keyseq/
//! ├── config.yaml   Settings (leader, max_map_depth)
//! ├── keymap.yaml   user keymap layer
//! └── logs/         daily rolling log files
//! ```
//!
//! The config dir is `$XDG_CONFIG_HOME` or `~/.config` on Unix and macOS,
//! `%APPDATA%` on Windows.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "keyseq";

/// `<config dir>/keyseq`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")));

    base.map(|base| base.join(APP_DIR))
}

fn app_path(name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(name))
}

/// Settings file read by [`crate::config::Settings::load`]
pub fn config_file() -> Option<PathBuf> {
    app_path("config.yaml")
}

/// Keymap layered over the defaults by [`crate::keymap::load_default_keymap`]
pub fn keymap_file() -> Option<PathBuf> {
    app_path("keymap.yaml")
}

pub fn logs_dir() -> Option<PathBuf> {
    app_path("logs")
}

/// Create the logs dir if needed, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
