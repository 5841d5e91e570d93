//! Keyboard shortcut registry and dispatch.
//!
//! Bindings map chords to one of four intents: run a command, change the
//! active tool, hold-to-use a quicktool, or drive a sprite-editor modifier.
//! The [`ShortcutRegistry`] stores them in registration order, and the
//! [`Dispatcher`] resolves key-down events and held-key snapshots against it,
//! consulting the host through the traits in [`host`].

pub mod accelerator;
pub mod binding;
pub mod context;
pub mod cycling;
pub mod dispatch;
pub mod editor_action;
pub mod global;
pub mod host;
pub mod params;
pub mod registry;

// Re-export commonly used types at module level
pub use accelerator::{Accelerator, Chord, ChordParseError};
pub use binding::{Binding, BindingKind, ShortcutAction};
pub use context::{KeyContext, current_context};
pub use cycling::resolve_tool_cycle;
pub use dispatch::{Dispatcher, EXIT_COMMAND, OPEN_FILE_COMMAND};
pub use host::{CommandExecutor, DocumentState, ShortcutHost, ToolBox, WindowInfo, WindowStack};
pub use params::Params;
pub use registry::ShortcutRegistry;
