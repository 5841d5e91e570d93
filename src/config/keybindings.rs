//! Keymap configuration types and registration.
//!
//! This module defines the configurable keymap that populates the shortcut
//! registry at startup. Users specify bindings in config.toml as arrays of
//! tables, one per command, tool, quicktool or sprite-editor action:
//!
//! ```toml
//! [[keymap.commands]]
//! command = "Zoom"
//! keys = ["+"]
//! params = { action = "in" }
//!
//! [[keymap.tools]]
//! tool = "rectangular_marquee"
//! keys = ["M"]
//!
//! [[keymap.quicktools]]
//! tool = "hand"
//! keys = ["Space"]
//!
//! [[keymap.editor_actions]]
//! action = "SnapToGrid"
//! keys = ["Shift"]
//! ```

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::ToolId;
use crate::shortcuts::{ChordParseError, KeyContext, Params, ShortcutRegistry, editor_action};

/// A keymap entry whose chord could not be parsed.
#[derive(Debug, Error)]
#[error("invalid shortcut '{keys}' for {target}")]
pub struct KeymapError {
    pub target: String,
    pub keys: String,
    #[source]
    pub source: ChordParseError,
}

/// Chords that run a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CommandBinding {
    /// Command name, e.g. "Undo" or "Zoom"
    pub command: String,

    /// Chord strings such as "Ctrl+Z" or "Shift++"
    pub keys: Vec<String>,

    /// Context the binding is restricted to (normal, selection or any)
    #[serde(default)]
    pub context: KeyContext,

    /// Parameters passed to the command
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

/// Chords that select a tool, or activate it while held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolBinding {
    /// Tool identifier, e.g. "pencil" or "rectangular_marquee"
    pub tool: String,

    pub keys: Vec<String>,
}

/// Chords that drive a sprite-editor modifier action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EditorActionBinding {
    /// Action name, e.g. "SnapToGrid" or "CopySelection"
    pub action: String,

    pub keys: Vec<String>,
}

/// Configuration for all keyboard shortcuts.
///
/// Each section falls back to the built-in keymap when omitted. A section
/// that is present replaces the built-in entries of that section entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeymapConfig {
    #[serde(default = "default_commands")]
    pub commands: Vec<CommandBinding>,

    #[serde(default = "default_tools")]
    pub tools: Vec<ToolBinding>,

    #[serde(default = "default_quicktools")]
    pub quicktools: Vec<ToolBinding>,

    #[serde(default = "default_editor_actions")]
    pub editor_actions: Vec<EditorActionBinding>,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            commands: default_commands(),
            tools: default_tools(),
            quicktools: default_quicktools(),
            editor_actions: default_editor_actions(),
        }
    }
}

impl KeymapConfig {
    /// Drops entries that cannot bind anything and warns about names the
    /// sprite editor does not poll.
    pub(crate) fn validate(&mut self) {
        self.commands.retain(|entry| keep_entry(&entry.command, &entry.keys));
        self.tools.retain(|entry| keep_entry(&entry.tool, &entry.keys));
        self.quicktools.retain(|entry| keep_entry(&entry.tool, &entry.keys));
        self.editor_actions.retain(|entry| keep_entry(&entry.action, &entry.keys));

        for entry in &self.editor_actions {
            if !editor_action::is_known(&entry.action) {
                log::warn!(
                    "Unknown editor action '{}', the sprite editor will never poll it",
                    entry.action
                );
            }
        }
    }

    /// Registers every entry, in file order: commands, tools, quicktools,
    /// then editor actions.
    ///
    /// Returns the number of chords registered. Stops at the first chord that
    /// fails to parse; entries before it stay registered.
    pub fn apply_to(&self, registry: &mut ShortcutRegistry) -> Result<usize, KeymapError> {
        let mut count = 0;

        for entry in &self.commands {
            let params = Params::from(entry.params.clone());
            for keys in &entry.keys {
                registry
                    .register_command_shortcut(keys, &entry.command, Some(&params), entry.context)
                    .map_err(|source| invalid(format!("command {}", entry.command), keys, source))?;
                count += 1;
            }
        }

        for entry in &self.tools {
            let tool = ToolId::new(entry.tool.as_str());
            for keys in &entry.keys {
                registry
                    .register_tool_shortcut(keys, &tool)
                    .map_err(|source| invalid(format!("tool {}", entry.tool), keys, source))?;
                count += 1;
            }
        }

        for entry in &self.quicktools {
            let tool = ToolId::new(entry.tool.as_str());
            for keys in &entry.keys {
                registry
                    .register_quicktool_shortcut(keys, &tool)
                    .map_err(|source| invalid(format!("quicktool {}", entry.tool), keys, source))?;
                count += 1;
            }
        }

        for entry in &self.editor_actions {
            for keys in &entry.keys {
                registry
                    .register_sprite_editor_action_shortcut(keys, &entry.action)
                    .map_err(|source| {
                        invalid(format!("editor action {}", entry.action), keys, source)
                    })?;
                count += 1;
            }
        }

        log::debug!("Registered {count} chord(s) into {} binding(s)", registry.len());
        Ok(count)
    }

    /// Tool identifiers referenced by tool and quicktool entries.
    pub fn referenced_tools(&self) -> impl Iterator<Item = &str> {
        self.tools
            .iter()
            .chain(&self.quicktools)
            .map(|entry| entry.tool.as_str())
    }
}

fn keep_entry(name: &str, keys: &[String]) -> bool {
    if name.trim().is_empty() {
        log::warn!("Ignoring keymap entry without a name (keys: {keys:?})");
        return false;
    }
    if keys.is_empty() {
        log::warn!("Ignoring keymap entry '{name}' with no keys");
        return false;
    }
    true
}

fn invalid(target: String, keys: &str, source: ChordParseError) -> KeymapError {
    KeymapError {
        target,
        keys: keys.to_string(),
        source,
    }
}

// =============================================================================
// Default keymap
// =============================================================================

fn command(name: &str, keys: &[&str]) -> CommandBinding {
    CommandBinding {
        command: name.to_string(),
        keys: keys.iter().map(|k| k.to_string()).collect(),
        context: KeyContext::Any,
        params: BTreeMap::new(),
    }
}

fn command_with(name: &str, keys: &[&str], params: &[(&str, &str)]) -> CommandBinding {
    CommandBinding {
        params: params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        ..command(name, keys)
    }
}

fn tool(name: &str, keys: &[&str]) -> ToolBinding {
    ToolBinding {
        tool: name.to_string(),
        keys: keys.iter().map(|k| k.to_string()).collect(),
    }
}

fn action(name: &str, keys: &[&str]) -> EditorActionBinding {
    EditorActionBinding {
        action: name.to_string(),
        keys: keys.iter().map(|k| k.to_string()).collect(),
    }
}

fn default_commands() -> Vec<CommandBinding> {
    vec![
        command("NewFile", &["Ctrl+N"]),
        command("OpenFile", &["Ctrl+O"]),
        command("SaveFile", &["Ctrl+S"]),
        command("Exit", &["Ctrl+Q"]),
        command("Undo", &["Ctrl+Z"]),
        command("Redo", &["Ctrl+Y", "Ctrl+Shift+Z"]),
        command("Cut", &["Ctrl+X"]),
        command("Copy", &["Ctrl+C"]),
        command("Paste", &["Ctrl+V"]),
        CommandBinding {
            context: KeyContext::Selection,
            ..command("Clear", &["Delete", "Backspace"])
        },
        command("SelectAll", &["Ctrl+A"]),
        command("DeselectMask", &["Ctrl+D"]),
        command("FlipHorizontal", &["Shift+H"]),
        command("FlipVertical", &["Shift+V"]),
        command_with("Zoom", &["+"], &[("action", "in")]),
        command_with("Zoom", &["-"], &[("action", "out")]),
        command("ShowGrid", &["Ctrl+'"]),
    ]
}

fn default_tools() -> Vec<ToolBinding> {
    vec![
        tool("rectangular_marquee", &["M"]),
        tool("elliptical_marquee", &["M"]),
        tool("lasso", &["Q"]),
        tool("polygonal_lasso", &["Q"]),
        tool("magic_wand", &["W"]),
        tool("pencil", &["B"]),
        tool("spray", &["Shift+B"]),
        tool("eraser", &["E"]),
        tool("eyedropper", &["I"]),
        tool("zoom", &["Z"]),
        tool("hand", &["H"]),
        tool("move", &["V"]),
        tool("paint_bucket", &["G"]),
        tool("line", &["L"]),
        tool("curve", &["Shift+L"]),
        tool("rectangle", &["U"]),
        tool("filled_rectangle", &["U"]),
        tool("ellipse", &["Shift+U"]),
        tool("filled_ellipse", &["Shift+U"]),
        tool("contour", &["D"]),
        tool("polygon", &["Shift+D"]),
        tool("blur", &["R"]),
        tool("jumble", &["Shift+R"]),
    ]
}

fn default_quicktools() -> Vec<ToolBinding> {
    vec![
        tool("eyedropper", &["Alt"]),
        tool("hand", &["Space"]),
        tool("move", &["Ctrl"]),
    ]
}

fn default_editor_actions() -> Vec<EditorActionBinding> {
    vec![
        action(editor_action::COPY_SELECTION, &["Ctrl"]),
        action(editor_action::SNAP_TO_GRID, &["Shift"]),
        action(editor_action::ANGLE_SNAP, &["Shift"]),
        action(editor_action::MAINTAIN_ASPECT_RATIO, &["Shift"]),
        action(editor_action::LOCK_AXIS, &["Shift"]),
        action(editor_action::ADD_SELECTION, &["Shift"]),
        action(editor_action::SUBTRACT_SELECTION, &["Alt"]),
    ]
}
