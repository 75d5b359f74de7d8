//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::Arc;

use keyseq::keymap::{
    format_keys, parse_keys, FallbackMap, KeyMap, Keystroke, RemappedKeystroke, Remapping, State,
};
use keyseq::translator::{KeystrokeTranslator, DEFAULT_LEADER};

/// Parse key notation, panicking on bad test input
pub fn keys(notation: &str) -> Vec<Keystroke> {
    parse_keys(notation).expect("valid key notation")
}

/// Parse a single key
pub fn key(notation: &str) -> Keystroke {
    keyseq::keymap::parse_key(notation).expect("valid key notation")
}

/// Build a keymap from (keys, replacement, recursive) triples
pub fn keymap(entries: &[(&str, &str, bool)]) -> KeyMap {
    let mut map = KeyMap::new();
    for &(from, to, recursive) in entries {
        map.map(&keys(from), Remapping::new(keys(to), recursive));
    }
    map
}

/// Translator with the default leader and no fallbacks
pub fn translator() -> KeystrokeTranslator<State> {
    KeystrokeTranslator::new(DEFAULT_LEADER, Arc::new(FallbackMap::new()))
}

/// Translator with the default leader and the given fallbacks
pub fn translator_with_fallback(entries: &[(&str, &str)]) -> KeystrokeTranslator<State> {
    let fallback: FallbackMap = entries.iter().map(|&(from, to)| (key(from), key(to))).collect();
    KeystrokeTranslator::new(DEFAULT_LEADER, Arc::new(fallback))
}

/// Feed every key of `notation`, returning what each call returned
pub fn press_all(
    translator: &mut KeystrokeTranslator<State>,
    map: &KeyMap,
    notation: &str,
) -> Vec<bool> {
    keys(notation)
        .into_iter()
        .map(|k| translator.process_keystroke(map, k))
        .collect()
}

/// Render keystrokes as notation, ignoring recursive flags
pub fn notation(strokes: impl IntoIterator<Item = RemappedKeystroke>) -> String {
    let keys: Vec<_> = strokes.into_iter().map(|s| s.key).collect();
    format_keys(&keys)
}

/// Recursive flags of a keystroke sequence
pub fn flags(strokes: impl IntoIterator<Item = RemappedKeystroke>) -> Vec<bool> {
    strokes.into_iter().map(|s| s.recursive).collect()
}
