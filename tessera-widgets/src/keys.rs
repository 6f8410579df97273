//! Key input model.
//!
//! Widgets receive [`KeyCombo`]s from the host's input layer; hosts can
//! also parse combos from `"ctrl+alt+x"`-style configuration strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A key combination (key + modifiers)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add shift modifier
    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Add alt modifier
    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Character key
    Char(char),
    /// Function keys F1-F12
    F(u8),
    /// Enter/Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Tab
    Tab,
    /// Space
    Space,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Home
    Home,
    /// End
    End,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Insert
    Insert,
    /// Delete
    Delete,
}

impl Key {
    /// Create a character key
    pub const fn char(c: char) -> Self {
        Self::Char(c)
    }
}

/// Modifier keys held during a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    /// Control key held
    pub ctrl: bool,
    /// Shift key held
    pub shift: bool,
    /// Alt key held
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    /// Check if any modifier is active
    pub fn any(&self) -> bool {
        self.ctrl || self.shift || self.alt
    }
}

/// Error parsing a key combination from a configuration string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// Empty input
    #[error("empty key combination")]
    Empty,
    /// Segment before the key is not a known modifier
    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),
    /// Final segment is not a known key name
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

impl std::str::FromStr for KeyCombo {
    type Err = KeyParseError;

    /// Parse `"ctrl+alt+x"`-style strings: `+`-separated segments, the
    /// last one the key, the rest modifiers. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(KeyParseError::Empty);
        }

        let parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let (last, modifier_parts) = parts.split_last().ok_or(KeyParseError::Empty)?;

        let mut modifiers = Modifiers::NONE;
        for part in modifier_parts {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "shift" => modifiers.shift = true,
                "alt" => modifiers.alt = true,
                other => return Err(KeyParseError::UnknownModifier(other.to_string())),
            }
        }

        Ok(Self {
            key: parse_key(last)?,
            modifiers,
        })
    }
}

fn parse_key(s: &str) -> Result<Key, KeyParseError> {
    let lower = s.to_ascii_lowercase();
    let key = match lower.as_str() {
        "enter" | "return" => Key::Enter,
        "esc" | "escape" => Key::Escape,
        "backspace" => Key::Backspace,
        "tab" => Key::Tab,
        "space" => Key::Space,
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "insert" => Key::Insert,
        "delete" | "del" => Key::Delete,
        _ => {
            let mut chars = lower.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                Key::Char(c)
            } else if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok())
                && (1..=12).contains(&n)
            {
                Key::F(n)
            } else {
                return Err(KeyParseError::UnknownKey(s.to_string()));
            }
        }
    };
    Ok(key)
}
