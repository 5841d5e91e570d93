//! Binding records.

use std::fmt;

use crate::input::{KeyEvent, KeyState, ToolId};

use super::accelerator::Accelerator;
use super::context::KeyContext;
use super::params::Params;

/// Category of intent a binding expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    ExecuteCommand,
    ChangeTool,
    EditorQuicktool,
    SpriteEditorAction,
}

/// What a binding does when its accelerator fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Run a command with a parameter snapshot
    Command { name: String, params: Params },
    /// Make a tool the active tool
    Tool(ToolId),
    /// Switch to a tool while the chord is held
    Quicktool(ToolId),
    /// Sprite-editor modifier (snap to grid, add selection, ...)
    SpriteEditor(String),
}

impl ShortcutAction {
    pub fn kind(&self) -> BindingKind {
        match self {
            ShortcutAction::Command { .. } => BindingKind::ExecuteCommand,
            ShortcutAction::Tool(_) => BindingKind::ChangeTool,
            ShortcutAction::Quicktool(_) => BindingKind::EditorQuicktool,
            ShortcutAction::SpriteEditor(_) => BindingKind::SpriteEditorAction,
        }
    }
}

impl fmt::Display for ShortcutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutAction::Command { name, params } if params.is_empty() => {
                write!(f, "command {name}")
            }
            ShortcutAction::Command { name, params } => write!(f, "command {name}({params})"),
            ShortcutAction::Tool(tool) => write!(f, "tool {tool}"),
            ShortcutAction::Quicktool(tool) => write!(f, "quicktool {tool}"),
            ShortcutAction::SpriteEditor(action) => write!(f, "editor action {action}"),
        }
    }
}

/// One registry entry: an action, the chords that trigger it, and the
/// context it is restricted to.
#[derive(Debug, Clone)]
pub struct Binding {
    action: ShortcutAction,
    accelerator: Accelerator,
    context: KeyContext,
}

impl Binding {
    pub(crate) fn new(action: ShortcutAction, context: KeyContext) -> Self {
        Self {
            action,
            accelerator: Accelerator::new(),
            context,
        }
    }

    pub fn action(&self) -> &ShortcutAction {
        &self.action
    }

    pub fn kind(&self) -> BindingKind {
        self.action.kind()
    }

    pub fn accelerator(&self) -> &Accelerator {
        &self.accelerator
    }

    pub(crate) fn accelerator_mut(&mut self) -> &mut Accelerator {
        &mut self.accelerator
    }

    pub fn context(&self) -> KeyContext {
        self.context
    }

    /// Returns true if the event triggers this binding in `current`.
    pub fn is_pressed(&self, event: &KeyEvent, current: KeyContext) -> bool {
        self.accelerator.matches_event(event) && self.context.accepts(current)
    }

    /// Returns true if the held keys trigger this binding in `current`.
    pub fn is_pressed_from_key_state(&self, keys: &KeyState, current: KeyContext) -> bool {
        self.accelerator.matches_key_state(keys) && self.context.accepts(current)
    }
}
