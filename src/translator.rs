//! Incremental key-sequence resolution
//!
//! [`KeystrokeTranslator`] is fed one keystroke at a time and walks a
//! [`KeyMapping`] automaton without lookahead. After each key it knows whether
//! the keys so far are a prefix of a longer mapping, a completed mapping, a
//! completed mapping that may still extend, or a dead end.
//!
//! # Flow
//!
//! ```text
//! key → process_keystroke() → true?  → resulting_keystrokes() → dispatch
//!                           → false  → key is not mapped, dispatch as-is
//! ```
//!
//! The leader-setting key (`\` by default) is also looked up as the symbolic
//! `<Leader>` key, and both walks are merged. Keys stranded by a dead end go
//! through the global [`FallbackMap`] before being emitted.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::keymap::{
    format_keys, FallbackMap, KeyMapping, KeyState, Keystroke, RemappedKeystroke, Remapping,
    Transition,
};

/// Leader-setting key used when none is configured
pub const DEFAULT_LEADER: Keystroke = Keystroke::char('\\');

/// Stateful resolver of multi-key mappings
///
/// `S` is the walk state of the automaton being fed, e.g.
/// [`crate::keymap::State`] for [`crate::keymap::KeyMap`].
#[derive(Debug, Clone)]
pub struct KeystrokeTranslator<S> {
    /// Physical key that also counts as `<Leader>`
    leader: Keystroke,
    fallback: Arc<FallbackMap>,
    /// Walk position; `None` when no mapping attempt is open
    current: Option<S>,
    /// Last completed remapping, not flushed yet
    pending: Option<Remapping>,
    unconsumed: Vec<RemappedKeystroke>,
    resulting: VecDeque<RemappedKeystroke>,
    succeeded: bool,
}

impl<S: KeyState> KeystrokeTranslator<S> {
    pub fn new(leader: Keystroke, fallback: Arc<FallbackMap>) -> Self {
        Self {
            leader,
            fallback,
            current: None,
            pending: None,
            unconsumed: Vec::new(),
            resulting: VecDeque::new(),
            succeeded: false,
        }
    }

    /// Feed one keystroke
    ///
    /// Returns `false` if `key` starts no mapping and no attempt is open; the
    /// translator is left untouched and the caller should handle `key`
    /// literally. Otherwise returns `true` and any resolved output is
    /// available from [`Self::resulting_keystrokes`].
    ///
    /// `map` may differ between calls (e.g. on a mode switch). An open walk
    /// continues from its stored position.
    pub fn process_keystroke<M>(&mut self, map: &M, key: Keystroke) -> bool
    where
        M: KeyMapping<State = S>,
    {
        let leader_trans = if key == self.leader {
            self.press(map, &Keystroke::leader())
        } else {
            None
        };
        let trans = self.press(map, &key);

        if self.current.is_none() {
            if trans.is_none() && leader_trans.is_none() {
                return false;
            }
            // New attempt: anything left from the previous one is stale
            self.resulting.clear();
            self.unconsumed.clear();
            self.succeeded = false;
        }

        match Transition::union(trans, leader_trans) {
            Some(Transition { value, next }) => {
                if let Some(value) = value {
                    tracing::trace!("{}: completes {}", key, value.display_string());
                    self.pending = Some(value);
                    self.unconsumed.push(RemappedKeystroke::new(key, false));
                    self.succeeded = true;
                } else {
                    // Only keys after the first, or after a completed prefix,
                    // are replayed through mappings on a dead end
                    let recursive = !self.unconsumed.is_empty() || self.pending.is_some();
                    self.unconsumed.push(RemappedKeystroke::new(key, recursive));
                }

                match next {
                    None => {
                        tracing::trace!("{}: mapping resolved", key);
                        self.prepend_pending();
                        self.unconsumed.clear();
                        self.current = None;
                    }
                    Some(next) => {
                        tracing::trace!("{}: awaiting more keys", key);
                        self.current = Some(next);
                    }
                }
            }
            None => {
                tracing::trace!("{}: dead end after {}", key, self.unconsumed.len());
                self.unconsumed.push(RemappedKeystroke::new(key, true));
                self.abandon();
            }
        }

        true
    }

    /// Resolve an open attempt as a dead end without a breaking key
    ///
    /// For callers implementing a mapping timeout. Returns `false` if no
    /// attempt was open.
    pub fn flush(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }
        tracing::trace!("flushing {} pending keys", self.unconsumed.len());
        self.abandon();
        true
    }

    /// Keys pressed in the open attempt that are not resolved yet
    pub fn original_keystrokes(&self) -> VecDeque<RemappedKeystroke> {
        self.unconsumed.iter().copied().collect()
    }

    /// Snapshot of the resolved output
    ///
    /// Non-destructive: the buffer is only cleared when the next attempt
    /// starts.
    pub fn resulting_keystrokes(&self) -> VecDeque<RemappedKeystroke> {
        self.resulting.clone()
    }

    /// Take the resolved output, leaving the buffer empty
    pub fn drain_resulting_keystrokes(&mut self) -> VecDeque<RemappedKeystroke> {
        std::mem::take(&mut self.resulting)
    }

    /// Whether the most recent attempt completed a mapping
    pub fn did_mapping_succeed(&self) -> bool {
        self.succeeded
    }

    /// Whether a mapping attempt is open, waiting for more keys
    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }

    /// Keys of the open attempt in vim notation (for a status line)
    pub fn pending_display(&self) -> Option<String> {
        if self.current.is_none() {
            return None;
        }
        let keys: Vec<Keystroke> = self.unconsumed.iter().map(|k| k.key).collect();
        Some(format_keys(&keys))
    }

    pub fn leader(&self) -> Keystroke {
        self.leader
    }

    fn press<M>(&self, map: &M, key: &Keystroke) -> Option<Transition<S>>
    where
        M: KeyMapping<State = S>,
    {
        match self.current {
            Some(ref state) => state.press(key),
            None => map.press(key),
        }
    }

    /// End the open attempt, emitting the last completed value followed by
    /// the unconsumed keys
    fn abandon(&mut self) {
        self.prepend_unconsumed();
        self.prepend_pending();
        self.current = None;
        self.succeeded = false;
    }

    /// Move unconsumed keys to the front of the output, through the fallback map
    fn prepend_unconsumed(&mut self) {
        for stroke in self.unconsumed.drain(..).rev() {
            let stroke = match self.fallback.get(&stroke.key) {
                Some(key) => RemappedKeystroke::new(key, false),
                None => stroke,
            };
            self.resulting.push_front(stroke);
        }
    }

    fn prepend_pending(&mut self) {
        let Some(value) = self.pending.take() else {
            return;
        };
        let recursive = value.is_recursive();
        for &key in value.keystrokes().iter().rev() {
            self.resulting.push_front(RemappedKeystroke::new(key, recursive));
        }
    }
}

impl<S: KeyState> Default for KeystrokeTranslator<S> {
    fn default() -> Self {
        Self::new(DEFAULT_LEADER, Arc::new(FallbackMap::defaults()))
    }
}
