//! In-memory editor session.
//!
//! A minimal stand-in for the sprite editor's tool box, document and window
//! manager. The CLI uses it to show what a keymap does, and tests use it as
//! the dispatcher's host.

use crate::input::{Ink, ToolId};
use crate::shortcuts::{
    CommandExecutor, DocumentState, EXIT_COMMAND, Params, ToolBox, WindowInfo, WindowStack,
};

/// Tool box contents in palette order.
pub const DEFAULT_TOOLS: &[(&str, Ink)] = &[
    ("rectangular_marquee", Ink::Selection),
    ("elliptical_marquee", Ink::Selection),
    ("lasso", Ink::Selection),
    ("polygonal_lasso", Ink::Selection),
    ("magic_wand", Ink::Selection),
    ("pencil", Ink::Paint),
    ("spray", Ink::Paint),
    ("eraser", Ink::Eraser),
    ("eyedropper", Ink::Eyedropper),
    ("zoom", Ink::Zoom),
    ("hand", Ink::Scroll),
    ("move", Ink::Move),
    ("paint_bucket", Ink::Paint),
    ("line", Ink::Paint),
    ("curve", Ink::Paint),
    ("rectangle", Ink::Paint),
    ("filled_rectangle", Ink::Paint),
    ("ellipse", Ink::Paint),
    ("filled_ellipse", Ink::Paint),
    ("contour", Ink::Paint),
    ("polygon", Ink::Paint),
    ("blur", Ink::Effect),
    ("jumble", Ink::Effect),
];

#[derive(Debug, Clone)]
struct ToolSlot {
    id: ToolId,
    ink: Ink,
    visible: bool,
}

/// A command the session was asked to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedCommand {
    pub name: String,
    pub params: Params,
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    tools: Vec<ToolSlot>,
    current_tool: Option<ToolId>,
    document_open: bool,
    mask_visible: bool,
    /// Top-level windows, topmost first
    windows: Vec<WindowInfo>,
    menu_loop_cancels: usize,
    executed: Vec<ExecutedCommand>,
    /// Set once the Exit command runs
    pub should_exit: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Creates a session with the default tool box, an open document, the
    /// pencil selected and only the main window on screen.
    pub fn new() -> Self {
        Self::with_tools(DEFAULT_TOOLS.iter().map(|(id, ink)| (ToolId::from(*id), *ink)))
    }

    /// Creates a session over a custom tool box, starting on the pencil if
    /// present and on the first tool otherwise.
    pub fn with_tools<I: IntoIterator<Item = (ToolId, Ink)>>(tools: I) -> Self {
        let tools: Vec<ToolSlot> = tools
            .into_iter()
            .map(|(id, ink)| ToolSlot {
                id,
                ink,
                visible: true,
            })
            .collect();

        let pencil = ToolId::from("pencil");
        let current_tool = if tools.iter().any(|slot| slot.id == pencil) {
            Some(pencil)
        } else {
            tools.first().map(|slot| slot.id.clone())
        };

        Self {
            tools,
            current_tool,
            document_open: true,
            mask_visible: false,
            windows: vec![WindowInfo::main()],
            menu_loop_cancels: 0,
            executed: Vec::new(),
            should_exit: false,
        }
    }

    /// Returns true if the tool box contains `tool`.
    pub fn has_tool(&self, tool: &ToolId) -> bool {
        self.slot(tool).is_some()
    }

    fn slot(&self, tool: &ToolId) -> Option<&ToolSlot> {
        self.tools.iter().find(|slot| slot.id == *tool)
    }

    pub fn set_current_tool(&mut self, tool: ToolId) {
        if !self.has_tool(&tool) {
            log::warn!("Unknown tool '{tool}' selected");
        }
        self.current_tool = Some(tool);
    }

    /// Shows or hides a tool in the palette.
    pub fn set_tool_visible(&mut self, tool: &ToolId, visible: bool) {
        match self.tools.iter_mut().find(|slot| slot.id == *tool) {
            Some(slot) => slot.visible = visible,
            None => log::warn!("Cannot change visibility of unknown tool '{tool}'"),
        }
    }

    pub fn set_document_open(&mut self, open: bool) {
        self.document_open = open;
    }

    pub fn set_mask_visible(&mut self, visible: bool) {
        self.mask_visible = visible;
    }

    /// Puts a window on top of the stack.
    pub fn push_window(&mut self, window: WindowInfo) {
        self.windows.insert(0, window);
    }

    /// Removes the topmost window unless it is the main window.
    pub fn pop_window(&mut self) -> Option<WindowInfo> {
        match self.windows.first() {
            Some(top) if !top.is_main => Some(self.windows.remove(0)),
            _ => None,
        }
    }

    /// Commands executed so far, oldest first.
    pub fn executed(&self) -> &[ExecutedCommand] {
        &self.executed
    }

    pub fn take_executed(&mut self) -> Vec<ExecutedCommand> {
        std::mem::take(&mut self.executed)
    }

    /// How many times a shortcut closed the popup menus.
    pub fn menu_loop_cancels(&self) -> usize {
        self.menu_loop_cancels
    }
}

impl CommandExecutor for EditorSession {
    fn execute_command(&mut self, name: &str, params: &Params) {
        log::info!("Executing command {name}");
        if name == EXIT_COMMAND {
            self.should_exit = true;
        }
        self.executed.push(ExecutedCommand {
            name: name.to_string(),
            params: params.clone(),
        });
    }
}

impl ToolBox for EditorSession {
    fn tools(&self) -> Vec<ToolId> {
        self.tools.iter().map(|slot| slot.id.clone()).collect()
    }

    fn current_tool(&self) -> Option<ToolId> {
        self.current_tool.clone()
    }

    fn select_tool(&mut self, tool: &ToolId) {
        log::info!("Active tool: {tool}");
        self.current_tool = Some(tool.clone());
    }

    fn ink(&self, tool: &ToolId) -> Ink {
        self.slot(tool).map_or(Ink::Paint, |slot| slot.ink)
    }

    fn is_tool_visible(&self, tool: &ToolId) -> bool {
        self.slot(tool).is_some_and(|slot| slot.visible)
    }
}

impl DocumentState for EditorSession {
    fn has_active_document(&self) -> bool {
        self.document_open
    }

    fn is_mask_visible(&self) -> bool {
        self.mask_visible
    }
}

impl WindowStack for EditorSession {
    fn windows(&self) -> Vec<WindowInfo> {
        self.windows.clone()
    }

    fn cancel_menu_loop(&mut self) {
        self.menu_loop_cancels += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_pencil_and_main_window() {
        let editor = EditorSession::new();
        assert_eq!(editor.current_tool(), Some(ToolId::from("pencil")));
        assert_eq!(editor.windows(), vec![WindowInfo::main()]);
        assert!(editor.has_active_document());
        assert!(!editor.is_mask_visible());
        assert_eq!(editor.tools().len(), DEFAULT_TOOLS.len());
    }

    #[test]
    fn custom_tool_box_starts_on_first_tool() {
        let editor = EditorSession::with_tools([
            (ToolId::from("brush"), Ink::Paint),
            (ToolId::from("lasso"), Ink::Selection),
        ]);
        assert_eq!(editor.current_tool(), Some(ToolId::from("brush")));
        assert_eq!(editor.ink(&ToolId::from("lasso")), Ink::Selection);
    }

    #[test]
    fn window_stack_never_pops_main_window() {
        let mut editor = EditorSession::new();
        editor.push_window(WindowInfo::modal());
        assert_eq!(editor.pop_window(), Some(WindowInfo::modal()));
        assert_eq!(editor.pop_window(), None);
        assert_eq!(editor.windows().len(), 1);
    }

    #[test]
    fn exit_command_requests_shutdown() {
        let mut editor = EditorSession::new();
        editor.execute_command("Undo", &Params::new());
        assert!(!editor.should_exit);
        editor.execute_command(EXIT_COMMAND, &Params::new());
        assert!(editor.should_exit);
        assert_eq!(editor.take_executed().len(), 2);
        assert!(editor.executed().is_empty());
    }

    #[test]
    fn hidden_tools_are_not_visible() {
        let mut editor = EditorSession::new();
        let spray = ToolId::from("spray");
        editor.set_tool_visible(&spray, false);
        assert!(!editor.is_tool_visible(&spray));
        assert!(editor.is_tool_visible(&ToolId::from("pencil")));
        assert!(!editor.is_tool_visible(&ToolId::from("unknown")));
    }
}
