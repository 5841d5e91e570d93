//! Generic input event types for cross-backend compatibility.

use std::fmt;
use std::path::PathBuf;

use super::modifiers::Modifiers;

/// Generic key representation for cross-backend compatibility.
///
/// Backend implementations map their native scancodes to these values.
/// Letter keys are always stored lowercase so that `Char('k')` names the
/// physical K key regardless of Shift or Caps Lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Tab key
    Tab,
    /// Space bar
    Space,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Left,
    Right,
    Up,
    Down,
    /// Function key F1-F24
    F(u8),
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// Command/Super modifier
    Cmd,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Builds a character key, normalizing letters to lowercase.
    pub fn char(c: char) -> Self {
        Key::Char(c.to_ascii_lowercase())
    }

    /// Returns true for the keys that contribute to [`Modifiers`].
    pub fn is_modifier(&self) -> bool {
        matches!(self, Key::Shift | Key::Ctrl | Key::Alt | Key::Cmd)
    }

    /// Looks up a named key such as `"Escape"`, `"PgUp"` or `"F10"`.
    ///
    /// Single letters and digits map to [`Key::Char`]. Other single characters
    /// are not physical keys and return `None`; chords match those through the
    /// produced character instead.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return c.is_ascii_alphanumeric().then(|| Key::char(c));
        }

        let lower = name.to_ascii_lowercase();
        let key = match lower.as_str() {
            "esc" | "escape" => Key::Escape,
            "enter" | "return" => Key::Return,
            "backspace" => Key::Backspace,
            "tab" => Key::Tab,
            "space" => Key::Space,
            "del" | "delete" => Key::Delete,
            "ins" | "insert" => Key::Insert,
            "home" => Key::Home,
            "end" => Key::End,
            "pgup" | "pageup" => Key::PageUp,
            "pgdn" | "pagedown" => Key::PageDown,
            "left" => Key::Left,
            "right" => Key::Right,
            "up" => Key::Up,
            "down" => Key::Down,
            "shift" => Key::Shift,
            "ctrl" | "control" => Key::Ctrl,
            "alt" => Key::Alt,
            "cmd" | "command" | "super" | "meta" => Key::Cmd,
            other => {
                let number = other.strip_prefix('f')?.parse::<u8>().ok()?;
                if !(1..=24).contains(&number) {
                    return None;
                }
                Key::F(number)
            }
        };
        Some(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Key::F(n) => write!(f, "F{n}"),
            Key::PageUp => f.write_str("PgUp"),
            Key::PageDown => f.write_str("PgDn"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// A single key-down event as delivered by the GUI event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Modifiers held when the key went down
    pub modifiers: Modifiers,
    /// Physical key that was pressed
    pub key: Key,
    /// Character produced by the keyboard layout, if any
    pub ch: Option<char>,
}

impl KeyEvent {
    pub fn new(modifiers: Modifiers, key: Key) -> Self {
        Self {
            modifiers,
            key,
            ch: None,
        }
    }

    /// Attaches the character the layout produced for this key press.
    pub fn with_char(mut self, ch: char) -> Self {
        self.ch = Some(ch);
        self
    }
}

/// Messages the GUI manager routes through the shortcut layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key went down while the application had keyboard focus
    KeyDown(KeyEvent),
    /// The window manager asked the application to close
    CloseApp,
    /// Files were dropped onto the application window
    DropFiles(Vec<PathBuf>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_normalized_to_lowercase() {
        assert_eq!(Key::char('K'), Key::Char('k'));
        assert_eq!(Key::from_name("K"), Some(Key::Char('k')));
        assert_eq!(Key::from_name("7"), Some(Key::Char('7')));
    }

    #[test]
    fn named_keys_are_case_insensitive() {
        assert_eq!(Key::from_name("escape"), Some(Key::Escape));
        assert_eq!(Key::from_name("Esc"), Some(Key::Escape));
        assert_eq!(Key::from_name("PGDN"), Some(Key::PageDown));
        assert_eq!(Key::from_name("f10"), Some(Key::F(10)));
    }

    #[test]
    fn punctuation_is_not_a_physical_key() {
        assert_eq!(Key::from_name("+"), None);
        assert_eq!(Key::from_name("F99"), None);
        assert_eq!(Key::from_name("Hyper"), None);
    }

    #[test]
    fn display_uses_chord_spelling() {
        assert_eq!(Key::Char('k').to_string(), "K");
        assert_eq!(Key::F(5).to_string(), "F5");
        assert_eq!(Key::Escape.to_string(), "Escape");
        assert_eq!(Key::PageUp.to_string(), "PgUp");
    }
}
