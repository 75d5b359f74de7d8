//! Vim-style key notation
//!
//! Parses strings like `jj`, `<Leader>w` or `<C-w>h` into keystroke sequences
//! and formats sequences back.

use super::config::KeymapError;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Parse a key notation string into a keystroke sequence
///
/// A `<` with no closing `>` is taken literally. An unknown name inside
/// `<...>` is an error.
pub fn parse_keys(notation: &str) -> Result<Vec<Keystroke>, KeymapError> {
    let mut keys = Vec::new();
    let mut rest = notation;

    while let Some(c) = rest.chars().next() {
        if c == '<' {
            if let Some(end) = rest.find('>') {
                // "<>" is two literal characters
                if end > 1 {
                    keys.push(parse_bracketed(&rest[1..end])?);
                    rest = &rest[end + 1..];
                    continue;
                }
            }
        }
        keys.push(Keystroke::char(c));
        rest = &rest[c.len_utf8()..];
    }

    Ok(keys)
}

/// Parse notation that must describe exactly one keystroke
pub fn parse_key(notation: &str) -> Result<Keystroke, KeymapError> {
    let keys = parse_keys(notation)?;
    match keys.as_slice() {
        [key] => Ok(*key),
        [] => Err(KeymapError::EmptySequence(notation.to_string())),
        _ => Err(KeymapError::InvalidKey(format!(
            "Expected a single key: {}",
            notation
        ))),
    }
}

/// Format a keystroke sequence as notation
pub fn format_keys(keys: &[Keystroke]) -> String {
    keys.iter().map(|k| k.to_string()).collect()
}

/// Parse the inside of a `<...>` group, e.g. `C-S-Tab`
fn parse_bracketed(inner: &str) -> Result<Keystroke, KeymapError> {
    let mut mods = Modifiers::NONE;
    let mut name = inner;

    // Modifier prefixes; a trailing "-" as in "<C-->" is the key itself
    while name.len() > 2 && name.as_bytes()[1] == b'-' {
        let modifier = match name.as_bytes()[0].to_ascii_lowercase() {
            b'c' => Modifiers::CTRL,
            b's' => Modifiers::SHIFT,
            b'a' | b'm' => Modifiers::ALT,
            b'd' => Modifiers::META,
            _ => break,
        };
        mods = mods | modifier;
        name = &name[2..];
    }

    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if !mods.is_empty() {
            return Ok(Keystroke::char_with_mods(c, mods));
        }
    }

    let key = parse_key_name(name)
        .ok_or_else(|| KeymapError::InvalidKey(format!("Unknown key: <{}>", inner)))?;
    Ok(Keystroke::new(key, mods))
}

/// Parse a named key, case-insensitively
fn parse_key_name(name: &str) -> Option<KeyCode> {
    let lower = name.to_ascii_lowercase();
    let key = match lower.as_str() {
        "leader" => KeyCode::Leader,
        "esc" | "escape" => KeyCode::Escape,
        "cr" | "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "bs" | "backspace" => KeyCode::Backspace,
        "del" | "delete" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        "lt" => KeyCode::Char('<'),
        "gt" => KeyCode::Char('>'),
        "bslash" => KeyCode::Char('\\'),
        "bar" => KeyCode::Char('|'),

        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,

        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "insert" | "ins" => KeyCode::Insert,

        _ => {
            let n: u8 = lower.strip_prefix('f')?.parse().ok()?;
            if !(1..=24).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
    };
    Some(key)
}
