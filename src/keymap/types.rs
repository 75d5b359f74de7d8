//! Core types for the keymap system: Keystroke, Modifiers, KeyCode

use std::fmt;

use serde::{Deserialize, Serialize};

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // <D-...> in vim notation

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Vim notation prefix, e.g. `C-S-` for ctrl+shift
    pub fn notation_prefix(self) -> String {
        let mut prefix = String::new();
        if self.ctrl() {
            prefix.push_str("C-");
        }
        if self.shift() {
            prefix.push_str("S-");
        }
        if self.alt() {
            prefix.push_str("A-");
        }
        if self.meta() {
            prefix.push_str("D-");
        }
        prefix
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// A key code representing a printable character or a named key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
    /// A printable character, case-sensitive
    Char(char),

    /// Symbolic leader key that mappings are declared against
    Leader,

    // Named keys
    Escape,
    Enter,
    Tab,
    Backspace,
    Delete,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,
    Insert,

    // Function keys
    F(u8), // F1-F24
}

impl KeyCode {
    /// Vim notation name for named keys, `None` for plain characters
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            KeyCode::Char(' ') => "Space",
            KeyCode::Char('<') => "lt",
            KeyCode::Char(_) => return None,
            KeyCode::Leader => "Leader",
            KeyCode::Escape => "Esc",
            KeyCode::Enter => "CR",
            KeyCode::Tab => "Tab",
            KeyCode::Backspace => "BS",
            KeyCode::Delete => "Del",
            KeyCode::Up => "Up",
            KeyCode::Down => "Down",
            KeyCode::Left => "Left",
            KeyCode::Right => "Right",
            KeyCode::Home => "Home",
            KeyCode::End => "End",
            KeyCode::PageUp => "PageUp",
            KeyCode::PageDown => "PageDown",
            KeyCode::Insert => "Insert",
            KeyCode::F(_) => return None,
        };
        Some(name)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Char(c) if self.name().is_none() => write!(f, "{}", c),
            _ => write!(f, "{}", self.name().unwrap_or_default()),
        }
    }
}

/// A single keystroke: a key with modifiers
///
/// Serialized as its vim notation (`"j"`, `"<C-w>"`, `"<Leader>"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    /// Create a new keystroke
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a keystroke with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    /// Create a keystroke for a character, preserving case
    pub const fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    /// Create a keystroke with a character and modifiers
    pub const fn char_with_mods(c: char, mods: Modifiers) -> Self {
        Self {
            key: KeyCode::Char(c),
            mods,
        }
    }

    /// The symbolic leader key
    pub const fn leader() -> Self {
        Self::key(KeyCode::Leader)
    }

    /// The escape key
    pub const fn escape() -> Self {
        Self::key(KeyCode::Escape)
    }

    /// Whether this keystroke needs `<...>` brackets in vim notation
    fn is_bracketed(&self) -> bool {
        !self.mods.is_empty() || !matches!(self.key, KeyCode::Char(_)) || self.key.name().is_some()
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bracketed() {
            let prefix = self.mods.notation_prefix();
            match self.key {
                // A bare ">" would close the group early
                KeyCode::Char('>') => write!(f, "<{}gt>", prefix),
                key => write!(f, "<{}{}>", prefix, key),
            }
        } else {
            write!(f, "{}", self.key)
        }
    }
}

impl From<Keystroke> for String {
    fn from(stroke: Keystroke) -> Self {
        stroke.to_string()
    }
}

impl TryFrom<String> for Keystroke {
    type Error = super::config::KeymapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        super::notation::parse_key(&value)
    }
}
