//! Snapshot of the keys currently held down.

use std::collections::HashSet;

use super::events::Key;
use super::modifiers::Modifiers;

/// Keys held at the moment the event loop sampled the keyboard.
///
/// The event loop builds one snapshot per interaction tick and hands it to
/// quicktool polling, so polling never reads global keyboard state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    pressed: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from an iterator of held keys.
    pub fn from_keys<I: IntoIterator<Item = Key>>(keys: I) -> Self {
        Self {
            pressed: keys.into_iter().map(fold_case).collect(),
        }
    }

    /// Records a key going down.
    pub fn press(&mut self, key: Key) {
        self.pressed.insert(fold_case(key));
    }

    /// Records a key going up.
    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&fold_case(key));
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&fold_case(key))
    }

    /// Modifier set implied by the held modifier keys.
    pub fn modifiers(&self) -> Modifiers {
        Modifiers {
            shift: self.is_pressed(Key::Shift),
            ctrl: self.is_pressed(Key::Ctrl),
            alt: self.is_pressed(Key::Alt),
            cmd: self.is_pressed(Key::Cmd),
        }
    }

    /// Returns true when nothing is held.
    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }
}

// Character keys are stored lowercase, as chords and key events compare them
fn fold_case(key: Key) -> Key {
    match key {
        Key::Char(c) => Key::char(c),
        other => other,
    }
}
