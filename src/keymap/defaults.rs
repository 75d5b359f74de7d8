//! Default mappings
//!
//! The standard mappings that ship with the crate. Loaded from keymap.yaml at
//! the project root, or falls back to hardcoded defaults.

use std::path::Path;

use super::binding::Mapping;
use super::config::{load_keymap_file, parse_keymap_yaml, KeymapFile};
use super::fallback::FallbackMap;
use super::mode::Mode;
use super::types::{Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded default keymap YAML source
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and layer keymaps: defaults + project + user
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. keymap.yaml in current directory (project-local overrides)
/// 3. User config at ~/.config/keyseq/keymap.yaml
///
/// Entries with `unmap: true` remove mappings from earlier layers.
pub fn load_default_keymap() -> KeymapFile {
    let mut keymap = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(k) => {
            tracing::info!(
                "Loaded embedded default keymap ({} mappings)",
                k.mappings.len()
            );
            k
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            KeymapFile {
                mappings: default_mappings(),
                fallback: FallbackMap::defaults(),
            }
        }
    };

    // Project-local overrides, then the user's keymap
    merge_layer(&mut keymap, Path::new("keymap.yaml"), "project");
    if let Some(user_path) = crate::config_paths::keymap_file() {
        merge_layer(&mut keymap, &user_path, "user");
    }

    keymap
}

/// Merge the keymap at `path` into `keymap` if the file exists
///
/// A file that fails to load is skipped with a warning.
fn merge_layer(keymap: &mut KeymapFile, path: &Path, layer: &str) {
    if !path.exists() {
        return;
    }

    match load_keymap_file(path) {
        Ok(file) => {
            tracing::info!(
                "Merging {} keymap from {} ({} mappings)",
                layer,
                path.display(),
                file.mappings.len()
            );
            keymap.merge(file);
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load {} keymap from {}: {}",
                layer,
                path.display(),
                e
            );
        }
    }
}

/// Hardcoded defaults, used if the embedded YAML fails to parse
pub fn default_mappings() -> Vec<Mapping> {
    let ctrl = Modifiers::CTRL;
    let enter = Keystroke::key(super::types::KeyCode::Enter);
    let chars = |s: &str| s.chars().map(Keystroke::char).collect::<Vec<_>>();
    let with_enter = |s: &str| {
        let mut keys = chars(s);
        keys.push(enter);
        keys
    };

    vec![
        Mapping::noremap(chars("Y"), chars("y$")).in_modes(&[Mode::Normal]),
        Mapping::noremap(vec![Keystroke::leader(), Keystroke::char('w')], with_enter(":w"))
            .in_modes(&[Mode::Normal]),
        Mapping::noremap(
            vec![Keystroke::leader(), Keystroke::char(' ')],
            with_enter(":nohlsearch"),
        )
        .in_modes(&[Mode::Normal]),
        Mapping::noremap(chars("jk"), vec![Keystroke::escape()]).in_modes(&[Mode::Insert]),
        Mapping::noremap(
            vec![Keystroke::char_with_mods('h', ctrl)],
            vec![Keystroke::char_with_mods('w', ctrl), Keystroke::char('h')],
        )
        .in_modes(&[Mode::Normal]),
        Mapping::noremap(
            vec![Keystroke::char_with_mods('l', ctrl)],
            vec![Keystroke::char_with_mods('w', ctrl), Keystroke::char('l')],
        )
        .in_modes(&[Mode::Normal]),
    ]
}
