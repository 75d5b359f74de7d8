//! Prefix trie of key mappings and its walk state

use std::collections::HashMap;
use std::sync::Arc;

use super::remapping::Remapping;
use super::state::{KeyMapping, KeyState, Transition};
use super::types::Keystroke;

#[derive(Debug, Clone, Default)]
struct Node {
    value: Option<Remapping>,
    children: HashMap<Keystroke, Arc<Node>>,
}

/// A mapping table from keystroke sequences to remappings
///
/// Nodes are shared through `Arc`, so walk states stay valid independently of
/// the map. Editing a map whose nodes are shared copies the touched path;
/// walks already in progress keep seeing the old version.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    root: Arc<Node>,
    len: usize,
}

impl KeyMap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a key sequence, returning the remapping it replaced
    ///
    /// Empty sequences are ignored.
    pub fn map(&mut self, keys: &[Keystroke], remapping: Remapping) -> Option<Remapping> {
        if keys.is_empty() {
            tracing::warn!("Ignoring mapping with an empty key sequence");
            return None;
        }

        let replaced = insert(&mut self.root, keys, remapping);
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }

    /// Remove the mapping for a key sequence
    ///
    /// Longer mappings sharing the prefix are kept.
    pub fn unmap(&mut self, keys: &[Keystroke]) -> Option<Remapping> {
        if keys.is_empty() || self.get(keys).is_none() {
            return None;
        }

        let removed = remove(&mut self.root, keys);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Look up the remapping for an exact key sequence
    pub fn get(&self, keys: &[Keystroke]) -> Option<&Remapping> {
        let mut node = &self.root;
        for key in keys {
            node = node.children.get(key)?;
        }
        node.value.as_ref()
    }

    /// Number of mapped sequences
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All mappings, sorted by key sequence
    pub fn mappings(&self) -> Vec<(Vec<Keystroke>, Remapping)> {
        let mut result = Vec::with_capacity(self.len);
        let mut path = Vec::new();
        collect(&self.root, &mut path, &mut result);
        result.sort_by(|a, b| a.0.cmp(&b.0));
        result
    }
}

impl KeyMapping for KeyMap {
    type State = State;

    fn press(&self, key: &Keystroke) -> Option<Transition<State>> {
        step(std::slice::from_ref(&self.root), key)
    }
}

/// Walk position inside one or more [`KeyMap`] tries
///
/// Holds several nodes when a leader walk was merged with a literal one.
#[derive(Debug, Clone)]
pub struct State {
    nodes: Vec<Arc<Node>>,
}

impl KeyState for State {
    fn press(&self, key: &Keystroke) -> Option<Transition<Self>> {
        step(&self.nodes, key)
    }

    fn union(mut self, other: Self) -> Self {
        for node in other.nodes {
            if !self.nodes.iter().any(|n| Arc::ptr_eq(n, &node)) {
                self.nodes.push(node);
            }
        }
        self
    }
}

/// Follow `key` from every node; the first completed value wins
fn step(nodes: &[Arc<Node>], key: &Keystroke) -> Option<Transition<State>> {
    let mut matched = false;
    let mut value = None;
    let mut next = Vec::new();

    for child in nodes.iter().filter_map(|node| node.children.get(key)) {
        matched = true;
        if value.is_none() {
            value = child.value.clone();
        }
        if !child.children.is_empty() {
            next.push(Arc::clone(child));
        }
    }

    matched.then(|| Transition {
        value,
        next: (!next.is_empty()).then_some(State { nodes: next }),
    })
}

fn insert(node: &mut Arc<Node>, keys: &[Keystroke], remapping: Remapping) -> Option<Remapping> {
    let node = Arc::make_mut(node);
    match keys.split_first() {
        None => node.value.replace(remapping),
        Some((first, rest)) => insert(node.children.entry(*first).or_default(), rest, remapping),
    }
}

/// Remove the value at `keys`, pruning branches left empty
fn remove(node: &mut Arc<Node>, keys: &[Keystroke]) -> Option<Remapping> {
    let node = Arc::make_mut(node);
    let Some((first, rest)) = keys.split_first() else {
        return node.value.take();
    };

    let child = node.children.get_mut(first)?;
    let removed = remove(child, rest);
    if child.value.is_none() && child.children.is_empty() {
        node.children.remove(first);
    }
    removed
}

fn collect(node: &Node, path: &mut Vec<Keystroke>, out: &mut Vec<(Vec<Keystroke>, Remapping)>) {
    if let Some(ref value) = node.value {
        out.push((path.clone(), value.clone()));
    }
    for (key, child) in &node.children {
        path.push(*key);
        collect(child, path, out);
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::notation::parse_keys;

    fn keys(notation: &str) -> Vec<Keystroke> {
        parse_keys(notation).unwrap()
    }

    fn to(notation: &str) -> Remapping {
        Remapping::literal(keys(notation))
    }

    #[test]
    fn test_map_and_get() {
        let mut keymap = KeyMap::new();
        assert!(keymap.map(&keys("jj"), to("<Esc>")).is_none());

        assert_eq!(keymap.get(&keys("jj")), Some(&to("<Esc>")));
        assert_eq!(keymap.get(&keys("j")), None);
        assert_eq!(keymap.len(), 1);
    }

    #[test]
    fn test_map_replaces_existing() {
        let mut keymap = KeyMap::new();
        keymap.map(&keys("Y"), to("yy"));
        let replaced = keymap.map(&keys("Y"), to("y$"));

        assert_eq!(replaced, Some(to("yy")));
        assert_eq!(keymap.get(&keys("Y")), Some(&to("y$")));
        assert_eq!(keymap.len(), 1);
    }

    #[test]
    fn test_empty_sequence_is_ignored() {
        let mut keymap = KeyMap::new();
        assert!(keymap.map(&[], to("x")).is_none());
        assert!(keymap.is_empty());
    }

    #[test]
    fn test_press_unique_prefix() {
        let mut keymap = KeyMap::new();
        keymap.map(&keys("ab"), to("c"));

        let trans = keymap.press(&Keystroke::char('a')).unwrap();
        assert!(trans.value.is_none());
        let state = trans.next.unwrap();

        let trans = state.press(&Keystroke::char('b')).unwrap();
        assert_eq!(trans.value, Some(to("c")));
        assert!(trans.next.is_none());
    }

    #[test]
    fn test_press_terminal_and_extendable() {
        let mut keymap = KeyMap::new();
        keymap.map(&keys("a"), to("x"));
        keymap.map(&keys("ab"), to("y"));

        let trans = keymap.press(&Keystroke::char('a')).unwrap();
        assert_eq!(trans.value, Some(to("x")));
        assert!(trans.next.is_some());
    }

    #[test]
    fn test_press_no_edge() {
        let mut keymap = KeyMap::new();
        keymap.map(&keys("ab"), to("c"));

        assert!(keymap.press(&Keystroke::char('b')).is_none());
        let state = keymap.press(&Keystroke::char('a')).unwrap().next.unwrap();
        assert!(state.press(&Keystroke::char('x')).is_none());
    }

    #[test]
    fn test_unmap_keeps_longer_mappings() {
        let mut keymap = KeyMap::new();
        keymap.map(&keys("a"), to("x"));
        keymap.map(&keys("ab"), to("y"));

        assert_eq!(keymap.unmap(&keys("a")), Some(to("x")));
        assert_eq!(keymap.len(), 1);

        let trans = keymap.press(&Keystroke::char('a')).unwrap();
        assert!(trans.value.is_none());
        assert!(trans.next.is_some());
    }

    #[test]
    fn test_unmap_prunes_dead_branches() {
        let mut keymap = KeyMap::new();
        keymap.map(&keys("abc"), to("x"));

        assert_eq!(keymap.unmap(&keys("abc")), Some(to("x")));
        assert!(keymap.is_empty());
        assert!(keymap.press(&Keystroke::char('a')).is_none());
    }

    #[test]
    fn test_unmap_missing_is_none() {
        let mut keymap = KeyMap::new();
        keymap.map(&keys("ab"), to("x"));
        assert_eq!(keymap.unmap(&keys("a")), None);
        assert_eq!(keymap.unmap(&keys("zz")), None);
        assert_eq!(keymap.len(), 1);
    }

    #[test]
    fn test_state_survives_edit() {
        let mut keymap = KeyMap::new();
        keymap.map(&keys("ab"), to("old"));

        let state = keymap.press(&Keystroke::char('a')).unwrap().next.unwrap();
        keymap.map(&keys("ab"), to("new"));

        let trans = state.press(&Keystroke::char('b')).unwrap();
        assert_eq!(trans.value, Some(to("old")));
        assert_eq!(keymap.get(&keys("ab")), Some(&to("new")));
    }

    #[test]
    fn test_state_union_walks_both_branches() {
        let mut keymap = KeyMap::new();
        keymap.map(&keys("<Leader>w"), to("save"));
        keymap.map(&keys("\\q"), to("quit"));

        let leader = keymap.press(&Keystroke::leader()).unwrap().next.unwrap();
        let literal = keymap.press(&Keystroke::char('\\')).unwrap().next.unwrap();
        let both = literal.union(leader);

        let w = both.press(&Keystroke::char('w')).unwrap();
        assert_eq!(w.value, Some(to("save")));
        let q = both.press(&Keystroke::char('q')).unwrap();
        assert_eq!(q.value, Some(to("quit")));
    }

    #[test]
    fn test_mappings_listing_sorted() {
        let mut keymap = KeyMap::new();
        keymap.map(&keys("b"), to("2"));
        keymap.map(&keys("a"), to("1"));
        keymap.map(&keys("ab"), to("3"));

        let listed: Vec<_> = keymap
            .mappings()
            .into_iter()
            .map(|(k, v)| (crate::keymap::format_keys(&k), v.display_string()))
            .collect();
        assert_eq!(
            listed,
            vec![
                ("a".to_string(), "1".to_string()),
                ("ab".to_string(), "3".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }
}
