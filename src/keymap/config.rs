//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into mapping declarations and a fallback map.

use std::path::Path;

use serde::Deserialize;

use super::binding::{MapAction, Mapping};
use super::fallback::FallbackMap;
use super::mode::Mode;
use super::notation::parse_keys;
use super::remapping::Remapping;

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    #[serde(default)]
    pub fallback: FallbackMap,
    #[serde(default)]
    pub mappings: Vec<MappingConfig>,
}

/// A single mapping entry from YAML
#[derive(Debug, Deserialize)]
pub struct MappingConfig {
    pub keys: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub modes: Option<Vec<Mode>>,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub unmap: bool,
}

/// Parsed contents of a keymap file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeymapFile {
    pub mappings: Vec<Mapping>,
    pub fallback: FallbackMap,
}

impl KeymapFile {
    /// Layer `other` on top of this file's contents
    pub fn merge(&mut self, other: KeymapFile) {
        self.mappings.extend(other.mappings);
        self.fallback.extend(other.fallback);
    }
}

/// Load a keymap from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<KeymapFile, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;

    parse_keymap_yaml(&content)
}

/// Parse a keymap from a YAML string
pub fn parse_keymap_yaml(yaml: &str) -> Result<KeymapFile, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let mut mappings = Vec::with_capacity(config.mappings.len());
    for entry in config.mappings {
        mappings.push(parse_mapping(entry)?);
    }

    Ok(KeymapFile {
        mappings,
        fallback: config.fallback,
    })
}

fn parse_mapping(entry: MappingConfig) -> Result<Mapping, KeymapError> {
    let keys = parse_keys(&entry.keys)?;
    if keys.is_empty() {
        return Err(KeymapError::EmptySequence(entry.keys));
    }

    let modes = entry
        .modes
        .unwrap_or_else(|| Mode::DEFAULT_MAP_MODES.to_vec());

    let action = if entry.unmap {
        MapAction::Unmap
    } else {
        let to = entry
            .to
            .ok_or_else(|| KeymapError::MissingTarget(entry.keys.clone()))?;
        MapAction::Remap(Remapping::new(parse_keys(&to)?, entry.recursive))
    };

    Ok(Mapping::new(modes, keys, action))
}

/// Errors that can occur when parsing keymaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    MissingTarget(String),
    EmptySequence(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::MissingTarget(k) => write!(f, "Mapping for {:?} has no target", k),
            KeymapError::EmptySequence(k) => write!(f, "Empty key sequence: {:?}", k),
        }
    }
}

impl std::error::Error for KeymapError {}
