//! Replaying translator output
//!
//! Resolved keys tagged recursive must go through the mappings again, which
//! can chain (`a` → `b`, `b` → `c`) or loop forever (`a` → `a`). [`KeyFeeder`]
//! does the replay and bounds its depth.

use crate::keymap::{KeyMapping, KeyState, Keystroke};
use crate::translator::KeystrokeTranslator;

/// Replay depth used when none is configured (vim's `maxmapdepth`)
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Result of feeding one physical keystroke
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedOutcome {
    /// Whether the key took part in mapping resolution
    pub absorbed: bool,
    /// Keys to execute, in order
    pub keys: Vec<Keystroke>,
}

/// Errors from replaying recursive mappings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// Recursive remappings nested deeper than the limit
    RecursionLimit { key: Keystroke, depth: usize },
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::RecursionLimit { key, depth } => {
                write!(f, "Recursive mapping too deep at {} (depth {})", key, depth)
            }
        }
    }
}

impl std::error::Error for FeedError {}

/// Drives a [`KeystrokeTranslator`] and replays recursive output
#[derive(Debug, Clone)]
pub struct KeyFeeder<S> {
    translator: KeystrokeTranslator<S>,
    max_depth: usize,
}

impl<S: KeyState> KeyFeeder<S> {
    pub fn new(translator: KeystrokeTranslator<S>, max_depth: usize) -> Self {
        Self {
            translator,
            max_depth,
        }
    }

    /// Feed one keystroke and collect the keys it resolves to
    ///
    /// Keys of a mapping that is still open are held back until a later key
    /// or [`Self::timeout`] resolves it.
    pub fn feed<M>(&mut self, map: &M, key: Keystroke) -> Result<FeedOutcome, FeedError>
    where
        M: KeyMapping<State = S>,
    {
        let mut keys = Vec::new();
        if !self.translator.process_keystroke(map, key) {
            keys.push(key);
            return Ok(FeedOutcome {
                absorbed: false,
                keys,
            });
        }

        self.replay(map, 0, &mut keys)?;
        Ok(FeedOutcome {
            absorbed: true,
            keys,
        })
    }

    /// Resolve open mapping attempts as abandoned and replay their keys
    ///
    /// Replayed keys can open a new attempt, so this flushes until none is
    /// left open.
    pub fn timeout<M>(&mut self, map: &M) -> Result<Vec<Keystroke>, FeedError>
    where
        M: KeyMapping<State = S>,
    {
        let mut keys = Vec::new();
        let mut depth = 0;
        while self.translator.flush() {
            self.replay(map, depth, &mut keys)?;
            depth += 1;
        }
        Ok(keys)
    }

    pub fn translator(&self) -> &KeystrokeTranslator<S> {
        &self.translator
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Replay the translator's output, depth first, until nothing is left
    fn replay<M>(&mut self, map: &M, depth: usize, out: &mut Vec<Keystroke>) -> Result<(), FeedError>
    where
        M: KeyMapping<State = S>,
    {
        let mut work = Vec::new();
        self.queue_output(depth, &mut work);

        while let Some(item) = work.pop() {
            let (key, depth) = match item {
                Replay::Emit(key) => {
                    out.push(key);
                    continue;
                }
                Replay::Feed(key, depth) => (key, depth),
            };

            if depth > self.max_depth {
                tracing::warn!("Recursive mapping exceeded depth {} at {}", self.max_depth, key);
                return Err(FeedError::RecursionLimit { key, depth });
            }

            if self.translator.process_keystroke(map, key) {
                self.queue_output(depth, &mut work);
            } else {
                out.push(key);
            }
        }
        Ok(())
    }

    /// Push the resolved output onto `work` so it pops in order
    fn queue_output(&mut self, depth: usize, work: &mut Vec<Replay>) {
        // Take the output first: replayed keys start new attempts of their own
        let output = self.translator.drain_resulting_keystrokes();
        for stroke in output.into_iter().rev() {
            work.push(if stroke.recursive {
                Replay::Feed(stroke.key, depth + 1)
            } else {
                Replay::Emit(stroke.key)
            });
        }
    }
}

/// Pending step of a replay
enum Replay {
    /// Output as-is
    Emit(Keystroke),
    /// Feed through the mappings again at this depth
    Feed(Keystroke, usize),
}

impl<S: KeyState> Default for KeyFeeder<S> {
    fn default() -> Self {
        Self::new(KeystrokeTranslator::default(), DEFAULT_MAX_DEPTH)
    }
}
