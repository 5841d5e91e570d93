//! Ordered registry of shortcut bindings.
//!
//! Registration is find-or-create: each (kind, payload) pair owns exactly one
//! binding, and registering it again only appends a chord. Insertion order is
//! kept because key-down dispatch takes the first match.

use crate::input::ToolId;

use super::accelerator::{Accelerator, Chord, ChordParseError};
use super::binding::{Binding, BindingKind, ShortcutAction};
use super::context::KeyContext;
use super::editor_action;
use super::params::Params;

#[derive(Debug, Clone, Default)]
pub struct ShortcutRegistry {
    bindings: Vec<Binding>,
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a chord to a command with a parameter snapshot.
    ///
    /// `params` of `None` is the empty snapshot. The context is fixed when the
    /// binding is first created; later registrations only add chords.
    pub fn register_command_shortcut(
        &mut self,
        chord: &str,
        command: &str,
        params: Option<&Params>,
        context: KeyContext,
    ) -> Result<&Accelerator, ChordParseError> {
        let action = ShortcutAction::Command {
            name: command.to_string(),
            params: params.cloned().unwrap_or_default(),
        };
        self.register(chord, action, context)
    }

    /// Binds a chord that makes `tool` the active tool.
    pub fn register_tool_shortcut(
        &mut self,
        chord: &str,
        tool: &ToolId,
    ) -> Result<&Accelerator, ChordParseError> {
        self.register(chord, ShortcutAction::Tool(tool.clone()), KeyContext::Any)
    }

    /// Binds a chord that activates `tool` while held.
    pub fn register_quicktool_shortcut(
        &mut self,
        chord: &str,
        tool: &ToolId,
    ) -> Result<&Accelerator, ChordParseError> {
        self.register(
            chord,
            ShortcutAction::Quicktool(tool.clone()),
            KeyContext::Any,
        )
    }

    /// Binds a chord to a sprite-editor modifier action.
    pub fn register_sprite_editor_action_shortcut(
        &mut self,
        chord: &str,
        action: &str,
    ) -> Result<&Accelerator, ChordParseError> {
        self.register(
            chord,
            ShortcutAction::SpriteEditor(action.to_string()),
            KeyContext::Any,
        )
    }

    fn register(
        &mut self,
        chord: &str,
        action: ShortcutAction,
        context: KeyContext,
    ) -> Result<&Accelerator, ChordParseError> {
        // Parse before touching the registry so a bad chord leaves no binding behind
        let chord = Chord::parse(chord)?;

        let index = match self.position(&action) {
            Some(index) => index,
            None => {
                log::debug!("New binding for {action} ({context:?})");
                self.bindings.push(Binding::new(action, context));
                self.bindings.len() - 1
            }
        };

        let binding = &mut self.bindings[index];
        log::debug!("Bound {chord} to {}", binding.action());
        binding.accelerator_mut().push(chord);
        Ok(binding.accelerator())
    }

    fn position(&self, action: &ShortcutAction) -> Option<usize> {
        self.bindings.iter().position(|b| b.action() == action)
    }

    fn find(&self, action: &ShortcutAction) -> Option<&Binding> {
        self.position(action).map(|index| &self.bindings[index])
    }

    /// Looks up the binding for a command and parameter snapshot.
    pub fn find_command_shortcut(
        &self,
        command: &str,
        params: Option<&Params>,
    ) -> Option<&Binding> {
        let empty = Params::new();
        let params = params.unwrap_or(&empty);
        self.bindings.iter().find(|b| {
            matches!(
                b.action(),
                ShortcutAction::Command { name, params: own } if name == command && own == params
            )
        })
    }

    pub fn find_tool_shortcut(&self, tool: &ToolId) -> Option<&Binding> {
        self.find(&ShortcutAction::Tool(tool.clone()))
    }

    pub fn find_quicktool_shortcut(&self, tool: &ToolId) -> Option<&Binding> {
        self.find(&ShortcutAction::Quicktool(tool.clone()))
    }

    pub fn find_sprite_editor_action_shortcut(&self, action: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| {
            matches!(b.action(), ShortcutAction::SpriteEditor(name) if name == action)
        })
    }

    /// Accelerator of a sprite-editor action, if one is bound.
    pub fn sprite_editor_accel(&self, action: &str) -> Option<&Accelerator> {
        self.find_sprite_editor_action_shortcut(action)
            .map(Binding::accelerator)
    }

    pub fn copy_selection_accel(&self) -> Option<&Accelerator> {
        self.sprite_editor_accel(editor_action::COPY_SELECTION)
    }

    pub fn snap_to_grid_accel(&self) -> Option<&Accelerator> {
        self.sprite_editor_accel(editor_action::SNAP_TO_GRID)
    }

    pub fn angle_snap_accel(&self) -> Option<&Accelerator> {
        self.sprite_editor_accel(editor_action::ANGLE_SNAP)
    }

    pub fn maintain_aspect_ratio_accel(&self) -> Option<&Accelerator> {
        self.sprite_editor_accel(editor_action::MAINTAIN_ASPECT_RATIO)
    }

    pub fn lock_axis_accel(&self) -> Option<&Accelerator> {
        self.sprite_editor_accel(editor_action::LOCK_AXIS)
    }

    pub fn add_selection_accel(&self) -> Option<&Accelerator> {
        self.sprite_editor_accel(editor_action::ADD_SELECTION)
    }

    pub fn subtract_selection_accel(&self) -> Option<&Accelerator> {
        self.sprite_editor_accel(editor_action::SUBTRACT_SELECTION)
    }

    /// Bindings in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of bindings of one kind.
    pub fn count(&self, kind: BindingKind) -> usize {
        self.bindings.iter().filter(|b| b.kind() == kind).count()
    }
}
