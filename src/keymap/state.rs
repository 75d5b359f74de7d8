//! Automaton interface walked by the translator
//!
//! A [`KeyMapping`] is the root of a prefix automaton over keystrokes; each
//! press yields a [`Transition`] that may complete a [`Remapping`], continue
//! into a further [`KeyState`], or both.

use super::remapping::Remapping;
use super::types::Keystroke;

/// Outcome of pressing one key at some automaton position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S> {
    /// Set when a mapping completes on this key
    pub value: Option<Remapping>,
    /// Set when longer mappings can still be reached from here
    pub next: Option<S>,
}

impl<S: KeyState> Transition<S> {
    /// Merge two parallel transitions into one
    ///
    /// The primary's completed value takes precedence. The merged next state
    /// continues along both branches.
    pub fn union(primary: Option<Self>, secondary: Option<Self>) -> Option<Self> {
        match (primary, secondary) {
            (None, None) => None,
            (Some(t), None) | (None, Some(t)) => Some(t),
            (Some(primary), Some(secondary)) => Some(Transition {
                value: primary.value.or(secondary.value),
                next: match (primary.next, secondary.next) {
                    (Some(a), Some(b)) => Some(a.union(b)),
                    (a, b) => a.or(b),
                },
            }),
        }
    }
}

/// An in-progress walk position
pub trait KeyState: Clone {
    /// Advance by one key, or `None` if there is no edge
    fn press(&self, key: &Keystroke) -> Option<Transition<Self>>;

    /// A state that continues along the edges of both `self` and `other`
    fn union(self, other: Self) -> Self;
}

/// The root of a key mapping automaton
pub trait KeyMapping {
    type State: KeyState;

    /// Start a walk with one key, or `None` if no mapping begins with it
    fn press(&self, key: &Keystroke) -> Option<Transition<Self::State>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk position that just records which branches were merged
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Branches(Vec<&'static str>);

    impl KeyState for Branches {
        fn press(&self, _key: &Keystroke) -> Option<Transition<Self>> {
            None
        }

        fn union(mut self, other: Self) -> Self {
            self.0.extend(other.0);
            self
        }
    }

    fn remap(c: char) -> Remapping {
        Remapping::literal(vec![Keystroke::char(c)])
    }

    #[test]
    fn test_union_of_nothing() {
        assert_eq!(Transition::<Branches>::union(None, None), None);
    }

    #[test]
    fn test_union_single_side_passes_through() {
        let t = Transition {
            value: Some(remap('x')),
            next: Some(Branches(vec!["leader"])),
        };
        assert_eq!(Transition::union(None, Some(t.clone())), Some(t.clone()));
        assert_eq!(Transition::union(Some(t.clone()), None), Some(t));
    }

    #[test]
    fn test_union_primary_value_wins() {
        let primary = Transition {
            value: Some(remap('p')),
            next: None::<Branches>,
        };
        let secondary = Transition {
            value: Some(remap('s')),
            next: None,
        };
        let merged = Transition::union(Some(primary), Some(secondary)).unwrap();
        assert_eq!(merged.value, Some(remap('p')));
    }

    #[test]
    fn test_union_takes_secondary_value_when_primary_pending() {
        let primary = Transition {
            value: None,
            next: Some(Branches(vec!["literal"])),
        };
        let secondary = Transition {
            value: Some(remap('s')),
            next: None,
        };
        let merged = Transition::union(Some(primary), Some(secondary)).unwrap();
        assert_eq!(merged.value, Some(remap('s')));
        assert_eq!(merged.next, Some(Branches(vec!["literal"])));
    }

    #[test]
    fn test_union_merges_both_next_states() {
        let primary = Transition {
            value: None,
            next: Some(Branches(vec!["literal"])),
        };
        let secondary = Transition {
            value: None,
            next: Some(Branches(vec!["leader"])),
        };
        let merged = Transition::union(Some(primary), Some(secondary)).unwrap();
        assert_eq!(merged.next, Some(Branches(vec!["literal", "leader"])));
    }
}
