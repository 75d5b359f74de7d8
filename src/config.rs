//! Translator settings
//!
//! Stored in `~/.config/keyseq/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::feed::DEFAULT_MAX_DEPTH;
use crate::keymap::Keystroke;
use crate::translator::DEFAULT_LEADER;

/// Settings shared by every translator instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Key that is also looked up as `<Leader>` (vim's `mapleader`)
    #[serde(default = "default_leader")]
    pub leader: Keystroke,

    /// Maximum nesting of recursive remappings (vim's `maxmapdepth`)
    #[serde(default = "default_max_map_depth")]
    pub max_map_depth: usize,
}

fn default_leader() -> Keystroke {
    DEFAULT_LEADER
}

fn default_max_map_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            leader: default_leader(),
            max_map_depth: default_max_map_depth(),
        }
    }
}

impl Settings {
    /// Load settings from the user config, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load settings from `path`, or return defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(settings) => {
                    tracing::info!("Loaded config from {}", path.display());
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.leader, Keystroke::char('\\'));
        assert_eq!(settings.max_map_depth, 1000);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("leader: \",\"").unwrap();
        assert_eq!(settings.leader, Keystroke::char(','));
        assert_eq!(settings.max_map_depth, 1000);
    }

    #[test]
    fn test_leader_accepts_notation() {
        let settings: Settings = serde_yaml::from_str("leader: \"<Space>\"").unwrap();
        assert_eq!(settings.leader, Keystroke::char(' '));
    }
}
