//! Key context resolution.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::host::{DocumentState, ToolBox};

/// Interaction context a binding is restricted to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum KeyContext {
    /// No visible selection is being edited
    Normal,
    /// A selection tool is active over a visible selection mask
    Selection,
    /// Matches in every context
    #[default]
    Any,
}

impl KeyContext {
    /// Returns true if a binding restricted to `self` may fire in `current`.
    pub fn accepts(self, current: KeyContext) -> bool {
        self == KeyContext::Any || self == current
    }
}

/// Computes the context from live editor state.
///
/// Selection requires an active document with a visible selection mask while
/// the current tool paints with a selection ink. Not cached: selection
/// visibility and the active tool change independently of key events.
pub fn current_context<H>(host: &H) -> KeyContext
where
    H: DocumentState + ToolBox + ?Sized,
{
    let selecting = host.has_active_document()
        && host.is_mask_visible()
        && host
            .current_tool()
            .is_some_and(|tool| host.ink(&tool).is_selection());

    if selecting {
        KeyContext::Selection
    } else {
        KeyContext::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorSession;
    use crate::input::ToolId;

    #[test]
    fn any_accepts_every_context() {
        assert!(KeyContext::Any.accepts(KeyContext::Normal));
        assert!(KeyContext::Any.accepts(KeyContext::Selection));
        assert!(KeyContext::Normal.accepts(KeyContext::Normal));
        assert!(!KeyContext::Normal.accepts(KeyContext::Selection));
        assert!(!KeyContext::Selection.accepts(KeyContext::Normal));
    }

    #[test]
    fn selection_needs_document_mask_and_selection_ink() {
        let mut editor = EditorSession::new();
        editor.set_current_tool(ToolId::from("rectangular_marquee"));
        assert_eq!(current_context(&editor), KeyContext::Normal);

        editor.set_mask_visible(true);
        assert_eq!(current_context(&editor), KeyContext::Selection);

        editor.set_current_tool(ToolId::from("pencil"));
        assert_eq!(current_context(&editor), KeyContext::Normal);

        editor.set_current_tool(ToolId::from("lasso"));
        editor.set_document_open(false);
        assert_eq!(current_context(&editor), KeyContext::Normal);
    }
}
