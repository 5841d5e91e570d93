//! Collaborators the dispatcher consults and drives.
//!
//! The engine owns no GUI state. Hosts implement these traits over their tool
//! box, document model and window manager.

use crate::input::{Ink, ToolId};

use super::params::Params;

/// Runs commands by name.
pub trait CommandExecutor {
    /// Executes a command inline. Failures are reported by the executor.
    fn execute_command(&mut self, name: &str, params: &Params);
}

/// The tool box and its palette.
pub trait ToolBox {
    /// All tools in the tool box's stable order.
    fn tools(&self) -> Vec<ToolId>;
    fn current_tool(&self) -> Option<ToolId>;
    fn select_tool(&mut self, tool: &ToolId);
    /// Ink the tool currently paints with.
    fn ink(&self, tool: &ToolId) -> Ink;
    /// Whether the tool is currently shown in the palette.
    fn is_tool_visible(&self, tool: &ToolId) -> bool;
}

/// Active document and selection state.
pub trait DocumentState {
    fn has_active_document(&self) -> bool;
    fn is_mask_visible(&self) -> bool;
}

/// A top-level window as seen by the shortcut layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowInfo {
    /// The application's main window
    pub is_main: bool,
    /// Desktop windows sit below all floating windows
    pub is_desktop: bool,
    /// Foreground windows capture interaction (modal dialogs)
    pub is_foreground: bool,
}

impl WindowInfo {
    /// The main desktop window.
    pub const fn main() -> Self {
        Self {
            is_main: true,
            is_desktop: true,
            is_foreground: false,
        }
    }

    /// A modal dialog.
    pub const fn modal() -> Self {
        Self {
            is_main: false,
            is_desktop: false,
            is_foreground: true,
        }
    }

    /// A non-modal floating window (palettes, popups).
    pub const fn floating() -> Self {
        Self {
            is_main: false,
            is_desktop: false,
            is_foreground: false,
        }
    }
}

/// The window manager's stack of top-level windows.
pub trait WindowStack {
    /// Windows ordered from topmost to bottom.
    fn windows(&self) -> Vec<WindowInfo>;
    /// Closes any open popup menu.
    fn cancel_menu_loop(&mut self);
}

/// Everything the dispatcher needs from its host.
pub trait ShortcutHost: CommandExecutor + ToolBox + DocumentState + WindowStack {}

impl<T> ShortcutHost for T where
    T: CommandExecutor + ToolBox + DocumentState + WindowStack + ?Sized
{
}
