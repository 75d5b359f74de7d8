//! keyseq: feed key notation through vim-style mappings and print what it
//! resolves to, one line per keystroke.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use keyseq::cli::{Action, CliArgs, RunConfig};
use keyseq::config::Settings;
use keyseq::feed::KeyFeeder;
use keyseq::keymap::{
    format_keys, load_default_keymap, load_keymap_file, KeyMap, Keystroke, ModeKeymaps,
};
use keyseq::translator::KeystrokeTranslator;

/// One line of output
#[derive(Debug, Serialize)]
struct Step {
    /// Key fed, or `None` for the end-of-input flush
    key: Option<Keystroke>,
    absorbed: bool,
    succeeded: bool,
    pending: Option<String>,
    output: Vec<Keystroke>,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    keyseq::tracing::init(args.verbose);

    let config = args.into_config(Settings::load())?;

    let keymap_file = match config.keymap {
        Some(ref path) => load_keymap_file(path)
            .with_context(|| format!("Failed to load keymap {}", path.display()))?,
        None => load_default_keymap(),
    };
    let keymaps = ModeKeymaps::with_mappings(&keymap_file.mappings);
    let keymap = keymaps.get(config.mode);

    match config.action {
        Action::List => list(keymap),
        Action::Feed(ref keys) => {
            let translator =
                KeystrokeTranslator::new(config.settings.leader, Arc::new(keymap_file.fallback));
            let feeder = KeyFeeder::new(translator, config.settings.max_map_depth);
            feed(&config, feeder, keymap, keys)
        }
    }
}

fn list(keymap: &KeyMap) -> Result<()> {
    for (keys, remapping) in keymap.mappings() {
        let arrow = if remapping.is_recursive() { "=>" } else { "->" };
        println!("{:<16} {} {}", format_keys(&keys), arrow, remapping.display_string());
    }
    Ok(())
}

fn feed(
    config: &RunConfig,
    mut feeder: KeyFeeder<keyseq::keymap::State>,
    keymap: &KeyMap,
    keys: &[Keystroke],
) -> Result<()> {
    for &key in keys {
        let outcome = feeder
            .feed(keymap, key)
            .with_context(|| format!("Failed to resolve {}", key))?;
        let translator = feeder.translator();
        print_step(
            config,
            &Step {
                key: Some(key),
                absorbed: outcome.absorbed,
                succeeded: translator.did_mapping_succeed(),
                pending: translator.pending_display(),
                output: outcome.keys,
            },
        )?;
    }

    // End of input behaves like a mapping timeout
    if feeder.translator().is_pending() {
        let output = feeder
            .timeout(keymap)
            .context("Failed to resolve pending keys")?;
        print_step(
            config,
            &Step {
                key: None,
                absorbed: true,
                succeeded: feeder.translator().did_mapping_succeed(),
                pending: None,
                output,
            },
        )?;
    }

    Ok(())
}

fn print_step(config: &RunConfig, step: &Step) -> Result<()> {
    if config.json {
        println!("{}", serde_json::to_string(step)?);
        return Ok(());
    }

    let key = step
        .key
        .map(|k| k.to_string())
        .unwrap_or_else(|| "<timeout>".to_string());
    let status = match (step.absorbed, &step.pending) {
        (false, _) => "unmapped".to_string(),
        (true, Some(pending)) => format!("pending {}", pending),
        (true, None) if step.succeeded => "mapped".to_string(),
        (true, None) => "dead end".to_string(),
    };
    println!("{:<10} {:<16} {}", key, status, format_keys(&step.output));
    Ok(())
}
