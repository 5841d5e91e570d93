//! Turning key events and held keys into editor actions.

use crate::input::{KeyEvent, KeyState, Message, ToolId};

use super::binding::{Binding, ShortcutAction};
use super::context::{KeyContext, current_context};
use super::cycling::resolve_tool_cycle;
use super::host::{ShortcutHost, ToolBox, WindowStack};
use super::params::Params;
use super::registry::ShortcutRegistry;

/// Command run when the window manager asks the application to close.
pub const EXIT_COMMAND: &str = "Exit";
/// Command run once per file dropped on the main window.
pub const OPEN_FILE_COMMAND: &str = "OpenFile";

/// Resolves input against a registry and drives the host accordingly.
///
/// The dispatcher borrows the registry; it never mutates it.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r ShortcutRegistry,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r ShortcutRegistry) -> Self {
        Self { registry }
    }

    /// Handles one key-down event. Returns true if a shortcut consumed it.
    ///
    /// The first binding matching the event decides the outcome, even when
    /// that binding ends up doing nothing (a command blocked by a modal
    /// window does not let later bindings fire).
    pub fn dispatch_key_down<H>(&self, event: &KeyEvent, host: &mut H) -> bool
    where
        H: ShortcutHost + ?Sized,
    {
        if foreground_window_on_top(host) {
            log::debug!("Shortcuts suppressed: a modal window is on top");
            return false;
        }

        let context = current_context(host);
        let Some(binding) = self.first_pressed(event, context) else {
            return false;
        };

        // Close any popup menu before acting
        host.cancel_menu_loop();

        match binding.action() {
            ShortcutAction::Tool(tool) => {
                self.change_tool(tool, event, context, host);
                true
            }
            ShortcutAction::Command { name, params } => {
                execute_from_main_window(name, params, host)
            }
            // Quicktools are resolved by polling; the press itself is consumed
            ShortcutAction::Quicktool(_) => true,
            // Polled by the sprite editor while dragging
            ShortcutAction::SpriteEditor(_) => false,
        }
    }

    fn first_pressed(&self, event: &KeyEvent, context: KeyContext) -> Option<&'r Binding> {
        self.registry.iter().find(|b| b.is_pressed(event, context))
    }

    fn change_tool<H>(&self, pressed: &ToolId, event: &KeyEvent, context: KeyContext, host: &mut H)
    where
        H: ToolBox + ?Sized,
    {
        let candidates: Vec<ToolId> = self
            .registry
            .iter()
            .filter_map(|binding| match binding.action() {
                ShortcutAction::Tool(tool) if binding.is_pressed(event, context) => {
                    Some(tool.clone())
                }
                _ => None,
            })
            .collect();

        let selected = if candidates.len() >= 2 {
            let current = host.current_tool();
            resolve_tool_cycle(current.as_ref(), &candidates, |tool| {
                host.is_tool_visible(tool)
            })
            .cloned()
            .unwrap_or_else(|| pressed.clone())
        } else {
            pressed.clone()
        };

        log::debug!(
            "Selecting tool {selected} ({} candidate(s) share the chord)",
            candidates.len()
        );
        host.select_tool(&selected);
    }

    /// Returns the command a key-down event would run, without running it.
    pub fn command_for_key<H>(&self, event: &KeyEvent, host: &H) -> Option<(&'r str, &'r Params)>
    where
        H: ShortcutHost + ?Sized,
    {
        let context = current_context(host);
        self.registry
            .iter()
            .filter(|b| b.is_pressed(event, context))
            .find_map(|b| match b.action() {
                ShortcutAction::Command { name, params } => Some((name.as_str(), params)),
                _ => None,
            })
    }

    /// Resolves the quicktool selected by the held keys, if any.
    ///
    /// Called once per interaction tick. While a selection tool is active,
    /// holding the copy-selection chord disables quicktools entirely so the
    /// drag copies the selection instead.
    pub fn poll_quicktool<H>(
        &self,
        current_tool: Option<&ToolId>,
        keys: &KeyState,
        host: &H,
    ) -> Option<ToolId>
    where
        H: ShortcutHost + ?Sized,
    {
        if let Some(tool) = current_tool {
            let copying = host.ink(tool).is_selection()
                && self
                    .registry
                    .copy_selection_accel()
                    .is_some_and(|accel| accel.matches_key_state(keys));
            if copying {
                return None;
            }
        }

        let context = current_context(host);
        host.tools().into_iter().find(|tool| {
            self.registry
                .find_quicktool_shortcut(tool)
                .is_some_and(|binding| binding.is_pressed_from_key_state(keys, context))
        })
    }

    /// Routes a GUI manager message. Returns true if it was consumed.
    ///
    /// Close and drop requests run their command and still report false, so
    /// the host's default message handling sees them too.
    pub fn process_message<H>(&self, message: &Message, host: &mut H) -> bool
    where
        H: ShortcutHost + ?Sized,
    {
        match message {
            Message::KeyDown(event) => self.dispatch_key_down(event, host),
            Message::CloseApp => {
                log::info!("Close requested, running {EXIT_COMMAND}");
                host.execute_command(EXIT_COMMAND, &Params::new());
                false
            }
            Message::DropFiles(files) => {
                if !main_window_active(host) {
                    log::debug!(
                        "Ignoring {} dropped file(s): main window is not active",
                        files.len()
                    );
                    return false;
                }
                for file in files {
                    let params = Params::new().with("filename", file.display().to_string());
                    host.execute_command(OPEN_FILE_COMMAND, &params);
                }
                false
            }
        }
    }
}

/// A foreground window other than the main window is topmost.
fn foreground_window_on_top<H: WindowStack + ?Sized>(host: &H) -> bool {
    host.windows()
        .first()
        .is_some_and(|top| !top.is_main && top.is_foreground)
}

/// Walks the window stack from the top: the main desktop window must be
/// reached before any foreground window.
fn main_window_active<H: WindowStack + ?Sized>(host: &H) -> bool {
    for window in host.windows() {
        if window.is_foreground {
            return false;
        }
        if window.is_desktop && window.is_main {
            return true;
        }
    }
    false
}

fn execute_from_main_window<H>(name: &str, params: &Params, host: &mut H) -> bool
where
    H: ShortcutHost + ?Sized,
{
    if !main_window_active(host) {
        log::debug!(
            "Command {name} suppressed: a foreground window is in front of the main window"
        );
        return false;
    }

    log::debug!("Executing {name} from shortcut");
    host.execute_command(name, params);
    true
}
