//! Key mapping tables
//!
//! This module provides the data side of key-sequence resolution:
//! - Keystrokes and vim-style key notation (`<Leader>w`, `<C-w>`, `jj`)
//! - Remappings, with a recursive/non-recursive replay flag
//! - A prefix-trie automaton walked one keystroke at a time
//! - Per-mode mapping tables and a global fallback map
//! - YAML keymap files layered over embedded defaults
//!
//! # Architecture
//!
//! ```text
//! keymap.yaml → Vec<Mapping> → ModeKeymaps → KeyMap::press() → Transition
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Embedded defaults, then ./keymap.yaml, then the user's keymap
//! let file = load_default_keymap();
//! let keymaps = ModeKeymaps::with_mappings(&file.mappings);
//!
//! // Or a single file
//! let file = load_keymap_file(Path::new("keymap.yaml"))?;
//! ```

mod binding;
mod config;
mod defaults;
mod fallback;
mod mode;
mod notation;
mod remapping;
mod state;
mod trie;
mod types;

pub use binding::{MapAction, Mapping};
pub use config::{load_keymap_file, parse_keymap_yaml, KeymapError, KeymapFile};
pub use defaults::{default_mappings, get_default_keymap_yaml, load_default_keymap};
pub use fallback::FallbackMap;
pub use trie::{KeyMap, State};
pub use mode::{Mode, ModeKeymaps};
pub use notation::{format_keys, parse_key, parse_keys};
pub use remapping::{RemappedKeystroke, Remapping};
pub use state::{KeyMapping, KeyState, Transition};
pub use types::{KeyCode, Keystroke, Modifiers};
