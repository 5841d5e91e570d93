//! Process-wide shortcut registry.
//!
//! The application calls [`init`] once before loading its keymap and
//! [`shutdown`] when tearing down the GUI. Every other function here panics
//! outside that window: touching the registry before it exists or after it
//! has been released is a programming error, not a runtime condition.
//!
//! Registration takes the write lock and dispatch the read lock. Commands run
//! while the read lock is held, so they must not register shortcuts.

use parking_lot::RwLock;

use crate::input::{KeyEvent, KeyState, Message, ToolId};

use super::accelerator::{Accelerator, ChordParseError};
use super::context::KeyContext;
use super::dispatch::Dispatcher;
use super::host::ShortcutHost;
use super::params::Params;
use super::registry::ShortcutRegistry;

static REGISTRY: RwLock<Option<ShortcutRegistry>> = RwLock::new(None);

const NOT_INITIALIZED: &str = "shortcut registry used before init() or after shutdown()";

/// Creates the empty process-wide registry.
///
/// # Panics
/// If the registry is already initialized.
pub fn init() {
    let mut slot = REGISTRY.write();
    assert!(slot.is_none(), "shortcut registry initialized twice");
    *slot = Some(ShortcutRegistry::new());
    log::debug!("Shortcut registry initialized");
}

/// Releases every binding and returns the registry to the uninitialized state.
///
/// # Panics
/// If the registry was never initialized or is already shut down.
pub fn shutdown() {
    let mut slot = REGISTRY.write();
    match slot.take() {
        Some(registry) => log::debug!("Shortcut registry released {} binding(s)", registry.len()),
        None => panic!("{NOT_INITIALIZED}"),
    }
}

pub fn is_initialized() -> bool {
    REGISTRY.read().is_some()
}

/// Runs `f` with shared access to the registry.
pub fn with_registry<R>(f: impl FnOnce(&ShortcutRegistry) -> R) -> R {
    let slot = REGISTRY.read();
    match slot.as_ref() {
        Some(registry) => f(registry),
        None => panic!("{NOT_INITIALIZED}"),
    }
}

/// Runs `f` with exclusive access to the registry.
pub fn with_registry_mut<R>(f: impl FnOnce(&mut ShortcutRegistry) -> R) -> R {
    let mut slot = REGISTRY.write();
    match slot.as_mut() {
        Some(registry) => f(registry),
        None => panic!("{NOT_INITIALIZED}"),
    }
}

pub fn register_command_shortcut(
    chord: &str,
    command: &str,
    params: Option<&Params>,
    context: KeyContext,
) -> Result<Accelerator, ChordParseError> {
    with_registry_mut(|r| {
        r.register_command_shortcut(chord, command, params, context)
            .cloned()
    })
}

pub fn register_tool_shortcut(chord: &str, tool: &ToolId) -> Result<Accelerator, ChordParseError> {
    with_registry_mut(|r| r.register_tool_shortcut(chord, tool).cloned())
}

pub fn register_quicktool_shortcut(
    chord: &str,
    tool: &ToolId,
) -> Result<Accelerator, ChordParseError> {
    with_registry_mut(|r| r.register_quicktool_shortcut(chord, tool).cloned())
}

pub fn register_sprite_editor_action_shortcut(
    chord: &str,
    action: &str,
) -> Result<Accelerator, ChordParseError> {
    with_registry_mut(|r| r.register_sprite_editor_action_shortcut(chord, action).cloned())
}

/// Accelerator bound to a command, e.g. for a menu label.
pub fn accel_to_execute_command(command: &str, params: Option<&Params>) -> Option<Accelerator> {
    with_registry(|r| {
        r.find_command_shortcut(command, params)
            .map(|b| b.accelerator().clone())
    })
}

pub fn accel_to_change_tool(tool: &ToolId) -> Option<Accelerator> {
    with_registry(|r| r.find_tool_shortcut(tool).map(|b| b.accelerator().clone()))
}

pub fn accel_to_sprite_editor_action(action: &str) -> Option<Accelerator> {
    with_registry(|r| r.sprite_editor_accel(action).cloned())
}

pub fn dispatch_key_down<H: ShortcutHost + ?Sized>(event: &KeyEvent, host: &mut H) -> bool {
    with_registry(|r| Dispatcher::new(r).dispatch_key_down(event, host))
}

pub fn poll_quicktool<H: ShortcutHost + ?Sized>(
    current_tool: Option<&ToolId>,
    keys: &KeyState,
    host: &H,
) -> Option<ToolId> {
    with_registry(|r| Dispatcher::new(r).poll_quicktool(current_tool, keys, host))
}

pub fn process_message<H: ShortcutHost + ?Sized>(message: &Message, host: &mut H) -> bool {
    with_registry(|r| Dispatcher::new(r).process_message(message, host))
}
