//! Keyboard modifier state tracking.

use std::fmt;

/// Keyboard modifier state.
///
/// Tracks which modifier keys (Shift, Ctrl, Alt, Cmd) are held. Chords compare
/// modifier sets exactly, so `Ctrl+Z` does not fire while Shift is also held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt key pressed
    pub alt: bool,
    /// Cmd/Super key pressed
    pub cmd: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub const fn new() -> Self {
        Self {
            shift: false,
            ctrl: false,
            alt: false,
            cmd: false,
        }
    }

    pub const fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::new()
        }
    }

    pub const fn shift() -> Self {
        Self {
            shift: true,
            ..Self::new()
        }
    }

    pub const fn alt() -> Self {
        Self {
            alt: true,
            ..Self::new()
        }
    }

    /// Returns true when no modifier is held.
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    /// Compares two modifier sets while ignoring Shift.
    ///
    /// Used for character-based chords, where Shift is already folded into the
    /// produced character (`+` is Shift+`=` on most layouts).
    pub fn eq_ignoring_shift(&self, other: &Self) -> bool {
        self.ctrl == other.ctrl && self.alt == other.alt && self.cmd == other.cmd
    }
}

impl fmt::Display for Modifiers {
    /// Formats as the chord prefix, e.g. `Ctrl+Shift+`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        if self.cmd {
            f.write_str("Cmd+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        Ok(())
    }
}
