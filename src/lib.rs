//! keyseq - incremental key-sequence resolution for modal editors
//!
//! This crate resolves a live stream of keystrokes against multi-key
//! mappings such as `jk` → `<Esc>` or `<Leader>w` → `:w<CR>`, one key at a
//! time and without lookahead.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod feed;
pub mod keymap;
pub mod tracing;
pub mod translator;

// Re-export commonly used types
pub use config::Settings;
pub use feed::{FeedError, FeedOutcome, KeyFeeder};
pub use keymap::{KeyMap, Keystroke, Mode, ModeKeymaps, Remapping};
pub use translator::KeystrokeTranslator;
