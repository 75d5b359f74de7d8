//! Command-line argument parsing
//!
//! Supports:
//! - Feeding a key notation string through the mappings of one mode
//! - Choosing the keymap file and leader key
//! - Listing a mode's mappings
//! - JSON lines output

use clap::Parser;
use std::path::PathBuf;

use crate::config::Settings;
use crate::keymap::{parse_key, parse_keys, KeymapError, Keystroke, Mode};

/// Resolve key sequences against vim-style mappings
#[derive(Parser, Debug)]
#[command(name = "keyseq", version, about = "Resolve key sequences against vim-style mappings")]
pub struct CliArgs {
    /// Keys to feed, in vim notation (e.g. "jk" or "<Leader>w")
    #[arg(value_name = "KEYS")]
    pub keys: Option<String>,

    /// Keymap YAML file (default: built-in, ./keymap.yaml and user keymap)
    #[arg(short = 'k', long, value_name = "PATH")]
    pub keymap: Option<PathBuf>,

    /// Mode whose mappings apply
    #[arg(short = 'm', long, default_value = "normal")]
    pub mode: Mode,

    /// Leader-setting key, overriding config.yaml
    #[arg(short = 'l', long, value_name = "KEY")]
    pub leader: Option<String>,

    /// Print one JSON object per keystroke
    #[arg(long)]
    pub json: bool,

    /// List the mode's mappings and exit
    #[arg(long)]
    pub list: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Errors turning arguments into a [`RunConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// `--leader` is not a single key
    InvalidLeader(KeymapError),
    /// KEYS is not valid key notation
    InvalidKeys(KeymapError),
    /// Neither KEYS nor `--list` was given
    NothingToDo,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::InvalidLeader(e) => write!(f, "Invalid --leader: {}", e),
            CliError::InvalidKeys(e) => write!(f, "Invalid KEYS: {}", e),
            CliError::NothingToDo => write!(f, "Give KEYS to feed or --list"),
        }
    }
}

impl std::error::Error for CliError {}

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the mappings of the mode
    List,
    /// Feed these keys one by one
    Feed(Vec<Keystroke>),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub action: Action,
    pub mode: Mode,
    pub keymap: Option<PathBuf>,
    pub settings: Settings,
    pub json: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self, mut settings: Settings) -> Result<RunConfig, CliError> {
        if let Some(ref leader) = self.leader {
            settings.leader = parse_key(leader).map_err(CliError::InvalidLeader)?;
        }

        let action = match (self.list, self.keys) {
            (true, _) => Action::List,
            (false, Some(keys)) => {
                Action::Feed(parse_keys(&keys).map_err(CliError::InvalidKeys)?)
            }
            (false, None) => return Err(CliError::NothingToDo),
        };

        Ok(RunConfig {
            action,
            mode: self.mode,
            keymap: self.keymap,
            settings,
            json: self.json,
        })
    }
}
