//! Mapping declarations: a key sequence bound to a remapping in some modes

use super::mode::Mode;
use super::notation::format_keys;
use super::remapping::Remapping;
use super::types::Keystroke;

/// What a mapping declaration does to its key sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapAction {
    /// Bind the sequence to a remapping
    Remap(Remapping),
    /// Remove an earlier binding of the sequence
    Unmap,
}

/// A single mapping declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    /// Modes the declaration applies to
    pub modes: Vec<Mode>,
    /// The key sequence being mapped
    pub keys: Vec<Keystroke>,
    pub action: MapAction,
}

impl Mapping {
    pub fn new(modes: Vec<Mode>, keys: Vec<Keystroke>, action: MapAction) -> Self {
        Self {
            modes,
            keys,
            action,
        }
    }

    /// Non-recursive mapping in the default modes
    pub fn noremap(keys: Vec<Keystroke>, to: Vec<Keystroke>) -> Self {
        Self::new(
            Mode::DEFAULT_MAP_MODES.to_vec(),
            keys,
            MapAction::Remap(Remapping::literal(to)),
        )
    }

    /// Restrict this mapping to the given modes (builder pattern)
    pub fn in_modes(mut self, modes: &[Mode]) -> Self {
        self.modes = modes.to_vec();
        self
    }

    /// Key sequence in vim notation
    pub fn display_string(&self) -> String {
        format_keys(&self.keys)
    }
}
