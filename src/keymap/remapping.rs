//! Remapping values stored at terminal automaton nodes

use serde::Serialize;

use super::notation::format_keys;
use super::types::Keystroke;

/// The replacement produced when a mapped key sequence completes
///
/// Recursive remappings are fed back through the translator so they can
/// trigger further mappings; non-recursive ones are final output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remapping {
    keystrokes: Vec<Keystroke>,
    recursive: bool,
}

impl Remapping {
    pub fn new(keystrokes: Vec<Keystroke>, recursive: bool) -> Self {
        Self {
            keystrokes,
            recursive,
        }
    }

    /// Non-recursive remapping (vim's `noremap`)
    pub fn literal(keystrokes: Vec<Keystroke>) -> Self {
        Self::new(keystrokes, false)
    }

    /// Recursive remapping (vim's `map`)
    pub fn recursive(keystrokes: Vec<Keystroke>) -> Self {
        Self::new(keystrokes, true)
    }

    pub fn keystrokes(&self) -> &[Keystroke] {
        &self.keystrokes
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    /// Replacement keys in vim notation
    pub fn display_string(&self) -> String {
        format_keys(&self.keystrokes)
    }
}

/// A keystroke tagged with whether it should be fed through mappings again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RemappedKeystroke {
    pub key: Keystroke,
    pub recursive: bool,
}

impl RemappedKeystroke {
    pub const fn new(key: Keystroke, recursive: bool) -> Self {
        Self { key, recursive }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_and_recursive_constructors() {
        let keys = vec![Keystroke::escape()];
        assert!(!Remapping::literal(keys.clone()).is_recursive());
        assert!(Remapping::recursive(keys).is_recursive());
    }

    #[test]
    fn test_display_string() {
        let remap = Remapping::literal(vec![
            Keystroke::char(':'),
            Keystroke::char('w'),
            Keystroke::key(crate::keymap::KeyCode::Enter),
        ]);
        assert_eq!(remap.display_string(), ":w<CR>");
    }
}
