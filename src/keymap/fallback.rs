//! Global single-key fallback map
//!
//! Applied only to keys stranded when a mapping attempt dead-ends, never to
//! keys that completed a mapping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::{Keystroke, Modifiers};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FallbackMap(HashMap<Keystroke, Keystroke>);

impl FallbackMap {
    /// Create an empty fallback map
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in fallbacks: `<C-[>` behaves as `<Esc>`
    pub fn defaults() -> Self {
        let mut map = Self::new();
        map.insert(
            Keystroke::char_with_mods('[', Modifiers::CTRL),
            Keystroke::escape(),
        );
        map
    }

    pub fn insert(&mut self, from: Keystroke, to: Keystroke) -> Option<Keystroke> {
        self.0.insert(from, to)
    }

    pub fn get(&self, key: &Keystroke) -> Option<Keystroke> {
        self.0.get(key).copied()
    }

    /// The fallback for `key`, or `key` itself
    pub fn resolve(&self, key: Keystroke) -> Keystroke {
        self.get(&key).unwrap_or(key)
    }

    /// Add entries from `other`, overriding existing ones
    pub fn extend(&mut self, other: FallbackMap) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Keystroke, Keystroke)> for FallbackMap {
    fn from_iter<I: IntoIterator<Item = (Keystroke, Keystroke)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
