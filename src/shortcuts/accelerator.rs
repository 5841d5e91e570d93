//! Key chords and accelerators.
//!
//! A [`Chord`] is one modifier set plus either a physical key, a produced
//! character, or nothing (a modifier-only chord such as `Alt`). An
//! [`Accelerator`] is the growable set of chords that trigger one binding.

use std::fmt;

use thiserror::Error;

use crate::input::{Key, KeyEvent, KeyState, Modifiers};

/// Errors produced while parsing a chord string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordParseError {
    #[error("empty shortcut string")]
    Empty,
    #[error("missing key after '+' in '{0}'")]
    MissingKey(String),
    #[error("unknown key '{key}' in '{chord}'")]
    UnknownKey { key: String, chord: String },
}

/// A single key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    pub modifiers: Modifiers,
    /// Physical key, when the chord names one
    pub key: Option<Key>,
    /// Literal character, for keys that only exist as layout output (`+`, `[`)
    pub ch: Option<char>,
}

impl Chord {
    /// Parse a chord string like "Ctrl+Shift+K", "Alt" or "Shift++".
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    pub fn parse(s: &str) -> Result<Self, ChordParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ChordParseError::Empty);
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut modifiers = Modifiers::new();
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "shift" => modifiers.shift = true,
                "alt" => modifiers.alt = true,
                "cmd" | "command" | "super" | "meta" => modifiers.cmd = true,
                _ => key_parts.push(part),
            }
        }

        // Modifier-only chord ("Alt", "Ctrl+Shift")
        if key_parts.is_empty() {
            return Ok(Self {
                modifiers,
                key: None,
                ch: None,
            });
        }

        // "Shift++" splits into [.., "", ""]; joining restores the '+' key
        let key = key_parts.join("+");
        if key.is_empty() {
            return Err(ChordParseError::MissingKey(s.to_string()));
        }

        if let Some(key) = Key::from_name(&key) {
            return Ok(Self {
                modifiers,
                key: Some(key),
                ch: None,
            });
        }

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self {
                modifiers,
                key: None,
                ch: Some(c),
            }),
            _ => Err(ChordParseError::UnknownKey {
                key,
                chord: s.to_string(),
            }),
        }
    }

    /// Checks a key-down event against this chord.
    ///
    /// Key chords compare modifiers exactly. Character chords ignore Shift,
    /// since the layout already folds it into the produced character.
    /// Modifier-only chords never match a key-down; they are only polled.
    pub fn matches(&self, modifiers: Modifiers, key: Key, ch: Option<char>) -> bool {
        match (self.key, self.ch) {
            (Some(own), _) => self.modifiers == modifiers && own == normalize(key),
            (None, Some(own)) => {
                self.modifiers.eq_ignoring_shift(&modifiers)
                    && ch.is_some_and(|c| c.to_lowercase().eq(own.to_lowercase()))
            }
            (None, None) => false,
        }
    }

    /// Checks the chord against the set of keys currently held.
    ///
    /// Character chords cannot be polled and never match here.
    pub fn matches_key_state(&self, keys: &KeyState) -> bool {
        if keys.modifiers() != self.modifiers {
            return false;
        }
        match (self.key, self.ch) {
            (Some(key), _) => keys.is_pressed(key),
            (None, Some(_)) => false,
            (None, None) => true,
        }
    }

    /// Synthesizes the key-down event this chord describes.
    ///
    /// A modifier-only chord becomes the press of its last modifier key.
    pub fn to_event(&self) -> KeyEvent {
        let key = self.key.unwrap_or_else(|| match self.ch {
            Some(_) => Key::Unknown,
            None => self.modifier_key(),
        });
        let ch = self.ch.or(match key {
            Key::Char(c) if self.modifiers.shift => Some(c.to_ascii_uppercase()),
            Key::Char(c) => Some(c),
            Key::Space => Some(' '),
            _ => None,
        });
        KeyEvent {
            modifiers: self.modifiers,
            key,
            ch,
        }
    }

    /// Builds the held-key snapshot for this chord.
    pub fn to_key_state(&self) -> KeyState {
        let mut keys = KeyState::new();
        let held = [
            (self.modifiers.shift, Key::Shift),
            (self.modifiers.ctrl, Key::Ctrl),
            (self.modifiers.alt, Key::Alt),
            (self.modifiers.cmd, Key::Cmd),
        ];
        for (down, key) in held {
            if down {
                keys.press(key);
            }
        }
        if let Some(key) = self.key {
            keys.press(key);
        }
        keys
    }

    fn modifier_key(&self) -> Key {
        let m = self.modifiers;
        if m.shift {
            Key::Shift
        } else if m.cmd {
            Key::Cmd
        } else if m.alt {
            Key::Alt
        } else if m.ctrl {
            Key::Ctrl
        } else {
            Key::Unknown
        }
    }
}

fn normalize(key: Key) -> Key {
    match key {
        Key::Char(c) => Key::char(c),
        other => other,
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.modifiers.to_string();
        match (self.key, self.ch) {
            (Some(key), _) => write!(f, "{prefix}{key}"),
            (None, Some(ch)) => write!(f, "{prefix}{ch}"),
            (None, None) => f.write_str(prefix.trim_end_matches('+')),
        }
    }
}

/// The set of chords that trigger one binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accelerator {
    chords: Vec<Chord>,
}

impl Accelerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and appends a chord. Adding a chord twice keeps one copy.
    pub fn add_chord(&mut self, chord: &str) -> Result<(), ChordParseError> {
        let chord = Chord::parse(chord)?;
        self.push(chord);
        Ok(())
    }

    pub(crate) fn push(&mut self, chord: Chord) {
        if !self.chords.contains(&chord) {
            self.chords.push(chord);
        }
    }

    /// Returns true if any chord accepts the key-down event.
    pub fn matches(&self, modifiers: Modifiers, key: Key, ch: Option<char>) -> bool {
        self.chords.iter().any(|c| c.matches(modifiers, key, ch))
    }

    pub fn matches_event(&self, event: &KeyEvent) -> bool {
        self.matches(event.modifiers, event.key, event.ch)
    }

    /// Returns true if any chord is satisfied by the held keys.
    pub fn matches_key_state(&self, keys: &KeyState) -> bool {
        self.chords.iter().any(|c| c.matches_key_state(keys))
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Text for a menu label: the first chord, if any.
    pub fn label(&self) -> Option<String> {
        self.chords.first().map(Chord::to_string)
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chord) in self.chords.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{chord}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let chord = Chord::parse("Escape").unwrap();
        assert_eq!(chord.key, Some(Key::Escape));
        assert!(chord.modifiers.is_empty());
        assert_eq!(chord.ch, None);
    }

    #[test]
    fn test_parse_ctrl_shift_key() {
        let chord = Chord::parse("Ctrl+Shift+K").unwrap();
        assert_eq!(chord.key, Some(Key::Char('k')));
        assert!(chord.modifiers.ctrl);
        assert!(chord.modifiers.shift);
        assert!(!chord.modifiers.alt);
    }

    #[test]
    fn test_parse_modifier_order_independence() {
        let a = Chord::parse("Ctrl+Alt+Shift+W").unwrap();
        let b = Chord::parse("shift + alt + ctrl + w").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_modifier_only() {
        let chord = Chord::parse("Alt").unwrap();
        assert_eq!(chord.modifiers, Modifiers::alt());
        assert_eq!(chord.key, None);
        assert_eq!(chord.ch, None);
        assert_eq!(chord.to_string(), "Alt");
    }

    #[test]
    fn test_parse_plus_key() {
        let chord = Chord::parse("Ctrl+Shift++").unwrap();
        assert_eq!(chord.ch, Some('+'));
        assert!(chord.modifiers.ctrl && chord.modifiers.shift);

        let plain = Chord::parse("+").unwrap();
        assert_eq!(plain.ch, Some('+'));
        assert!(plain.modifiers.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Chord::parse("  "), Err(ChordParseError::Empty));
        assert!(matches!(
            Chord::parse("Ctrl+"),
            Err(ChordParseError::MissingKey(_))
        ));
        assert!(matches!(
            Chord::parse("Ctrl+Hyper"),
            Err(ChordParseError::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_key_chord_matching() {
        let chord = Chord::parse("Ctrl+Shift+W").unwrap();
        let mods = Modifiers {
            ctrl: true,
            shift: true,
            ..Modifiers::new()
        };
        assert!(chord.matches(mods, Key::Char('w'), Some('W')));
        assert!(chord.matches(mods, Key::Char('W'), None)); // Backend left it uppercase
        assert!(!chord.matches(Modifiers::shift(), Key::Char('w'), None)); // Missing ctrl
        assert!(!chord.matches(Modifiers::ctrl(), Key::Char('w'), None)); // Missing shift
        assert!(!chord.matches(mods, Key::Char('a'), None)); // Wrong key
    }

    #[test]
    fn test_char_chord_ignores_shift() {
        let chord = Chord::parse("+").unwrap();
        assert!(chord.matches(Modifiers::shift(), Key::Char('='), Some('+')));
        assert!(chord.matches(Modifiers::new(), Key::Unknown, Some('+')));
        assert!(!chord.matches(Modifiers::ctrl(), Key::Char('='), Some('+')));
        assert!(!chord.matches(Modifiers::new(), Key::Char('='), Some('=')));
    }

    #[test]
    fn test_modifier_only_chord_never_matches_key_down() {
        let chord = Chord::parse("Alt").unwrap();
        assert!(!chord.matches(Modifiers::alt(), Key::Alt, None));
        assert!(!chord.matches(Modifiers::alt(), Key::Char('a'), Some('a')));
        assert!(chord.matches_key_state(&KeyState::from_keys([Key::Alt])));
    }

    #[test]
    fn test_modifier_only_chord_event_presses_the_modifier() {
        let event = Chord::parse("Ctrl+Alt").unwrap().to_event();
        assert_eq!(event.key, Key::Alt);
        let ctrl_alt = Modifiers {
            ctrl: true,
            alt: true,
            ..Modifiers::new()
        };
        assert_eq!(event.modifiers, ctrl_alt);
        assert_eq!(event.ch, None);

        assert_eq!(Chord::parse("Shift").unwrap().to_event().key, Key::Shift);
    }

    #[test]
    fn test_key_state_ignores_char_case() {
        let chord = Chord::parse("Shift+Q").unwrap();
        let held = KeyState::from_keys([Key::Shift, Key::Char('Q')]);
        assert!(chord.matches(Modifiers::shift(), Key::Char('Q'), None));
        assert!(chord.matches_key_state(&held));
    }

    #[test]
    fn test_key_state_matching() {
        let space = Chord::parse("Space").unwrap();
        assert!(space.matches_key_state(&KeyState::from_keys([Key::Space])));
        assert!(!space.matches_key_state(&KeyState::from_keys([Key::Space, Key::Ctrl])));

        let ctrl = Chord::parse("Ctrl").unwrap();
        assert!(ctrl.matches_key_state(&KeyState::from_keys([Key::Ctrl])));
        assert!(!ctrl.matches_key_state(&KeyState::new()));

        let plus = Chord::parse("+").unwrap();
        assert!(!plus.matches_key_state(&KeyState::new()));
    }

    #[test]
    fn test_chord_round_trips_through_event_and_key_state() {
        let chord = Chord::parse("Ctrl+Shift+K").unwrap();
        let event = chord.to_event();
        assert!(chord.matches(event.modifiers, event.key, event.ch));
        assert_eq!(event.ch, Some('K'));
        assert!(chord.matches_key_state(&chord.to_key_state()));
    }

    #[test]
    fn test_accelerator_accumulates_unique_chords() {
        let mut accel = Accelerator::new();
        accel.add_chord("Ctrl+Y").unwrap();
        accel.add_chord("Ctrl+Shift+Z").unwrap();
        accel.add_chord("ctrl+y").unwrap();

        assert_eq!(accel.chords().len(), 2);
        assert!(accel.matches(Modifiers::ctrl(), Key::Char('y'), None));
        assert_eq!(accel.label().as_deref(), Some("Ctrl+Y"));
        assert_eq!(accel.to_string(), "Ctrl+Y, Ctrl+Shift+Z");
    }

    #[test]
    fn test_accelerator_rejects_bad_chord_without_changes() {
        let mut accel = Accelerator::new();
        assert!(accel.add_chord("Ctrl+").is_err());
        assert!(accel.is_empty());
    }
}
