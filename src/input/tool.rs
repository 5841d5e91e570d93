//! Tool identities and inks.

use std::fmt;

/// Identity of a tool in the tool box (e.g. `pencil`, `rectangular_marquee`).
///
/// Tools are owned by the host's tool box; the shortcut engine only stores and
/// compares their identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToolId(String);

impl ToolId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ToolId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ink a tool applies while it is active.
///
/// Only the selection inks matter to shortcut resolution: they switch the
/// key context to Selection and give copy-selection priority over quicktools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// Regular painting ink (pencil, brush, shapes)
    Paint,
    /// Erases to the background
    Eraser,
    /// Adds to or replaces the selection mask (marquees, lassos, magic wand)
    Selection,
    /// Picks colors from the canvas
    Eyedropper,
    /// Scrolls the viewport (hand)
    Scroll,
    /// Moves pixels or the selection
    Move,
    /// Zooms the viewport
    Zoom,
    /// Blur/jumble style filters
    Effect,
}

impl Ink {
    pub fn is_selection(&self) -> bool {
        matches!(self, Ink::Selection)
    }
}
