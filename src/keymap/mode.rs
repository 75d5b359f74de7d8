//! Editor modes and the per-mode mapping tables
//!
//! Mappings are declared per mode; the caller hands the translator the
//! automaton for whatever mode is active when a key arrives.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::binding::{MapAction, Mapping};
use super::trie::KeyMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Normal,
    Visual,
    OperatorPending,
    Insert,
    CommandLine,
}

impl Mode {
    /// Modes covered by a mapping that doesn't name any (vim's `:map`)
    pub const DEFAULT_MAP_MODES: [Mode; 3] = [Mode::Normal, Mode::Visual, Mode::OperatorPending];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Visual => "visual",
            Mode::OperatorPending => "operator_pending",
            Mode::Insert => "insert",
            Mode::CommandLine => "command_line",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" | "n" => Ok(Mode::Normal),
            "visual" | "v" | "x" => Ok(Mode::Visual),
            "operator_pending" | "operatorpending" | "o" => Ok(Mode::OperatorPending),
            "insert" | "i" => Ok(Mode::Insert),
            "command_line" | "commandline" | "cmdline" | "c" => Ok(Mode::CommandLine),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

/// One [`KeyMap`] per mode
#[derive(Debug, Clone, Default)]
pub struct ModeKeymaps {
    maps: HashMap<Mode, KeyMap>,
}

impl ModeKeymaps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build keymaps by applying mappings in order
    pub fn with_mappings(mappings: &[Mapping]) -> Self {
        let mut keymaps = Self::new();
        for mapping in mappings {
            keymaps.apply(mapping);
        }
        keymaps
    }

    /// Apply one mapping declaration to each of its modes
    pub fn apply(&mut self, mapping: &Mapping) {
        for &mode in &mapping.modes {
            let keymap = self.maps.entry(mode).or_default();
            match mapping.action {
                MapAction::Remap(ref remapping) => {
                    keymap.map(&mapping.keys, remapping.clone());
                }
                MapAction::Unmap => {
                    if keymap.unmap(&mapping.keys).is_none() {
                        tracing::debug!(
                            "unmap {} in {} mode: no such mapping",
                            mapping.display_string(),
                            mode
                        );
                    }
                }
            }
        }
    }

    /// The keymap for `mode`, empty if nothing was mapped there
    pub fn get(&self, mode: Mode) -> &KeyMap {
        static EMPTY: std::sync::OnceLock<KeyMap> = std::sync::OnceLock::new();
        self.maps
            .get(&mode)
            .unwrap_or_else(|| EMPTY.get_or_init(KeyMap::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::notation::parse_keys;
    use crate::keymap::remapping::Remapping;

    fn mapping(modes: &[Mode], keys: &str, to: &str) -> Mapping {
        Mapping::new(
            modes.to_vec(),
            parse_keys(keys).unwrap(),
            MapAction::Remap(Remapping::literal(parse_keys(to).unwrap())),
        )
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("normal".parse::<Mode>(), Ok(Mode::Normal));
        assert_eq!("i".parse::<Mode>(), Ok(Mode::Insert));
        assert_eq!("Operator_Pending".parse::<Mode>(), Ok(Mode::OperatorPending));
        assert!("bogus".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mappings_land_in_their_modes() {
        let keymaps = ModeKeymaps::with_mappings(&[
            mapping(&[Mode::Insert], "jj", "<Esc>"),
            mapping(&[Mode::Normal, Mode::Visual], "H", "^"),
        ]);

        let jj = parse_keys("jj").unwrap();
        let h = parse_keys("H").unwrap();
        assert!(keymaps.get(Mode::Insert).get(&jj).is_some());
        assert!(keymaps.get(Mode::Normal).get(&jj).is_none());
        assert!(keymaps.get(Mode::Normal).get(&h).is_some());
        assert!(keymaps.get(Mode::Visual).get(&h).is_some());
        assert!(keymaps.get(Mode::CommandLine).is_empty());
    }

    #[test]
    fn test_unmap_removes_earlier_mapping() {
        let keys = parse_keys("Y").unwrap();
        let keymaps = ModeKeymaps::with_mappings(&[
            mapping(&[Mode::Normal], "Y", "y$"),
            Mapping::new(vec![Mode::Normal], keys.clone(), MapAction::Unmap),
        ]);

        assert!(keymaps.get(Mode::Normal).get(&keys).is_none());
    }

    #[test]
    fn test_later_mapping_overrides() {
        let keys = parse_keys("Y").unwrap();
        let keymaps = ModeKeymaps::with_mappings(&[
            mapping(&[Mode::Normal], "Y", "yy"),
            mapping(&[Mode::Normal], "Y", "y$"),
        ]);

        let remap = keymaps.get(Mode::Normal).get(&keys).unwrap();
        assert_eq!(remap.display_string(), "y$");
    }
}
