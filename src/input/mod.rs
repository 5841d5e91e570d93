//! Input vocabulary shared by the shortcut engine and its hosts.
//!
//! This module defines the generic key codes, modifier state, key-down events,
//! held-key snapshots and tool identities that backends translate their native
//! input into before handing it to [`crate::shortcuts`].

pub mod events;
pub mod key_state;
pub mod modifiers;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, KeyEvent, Message};
pub use key_state::KeyState;
pub use modifiers::Modifiers;
pub use tool::{Ink, ToolId};
