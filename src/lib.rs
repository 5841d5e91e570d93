//! Library exports for the spritekeys shortcut engine.
//!
//! Exposes the shortcut registry and dispatcher alongside the input vocabulary
//! and configuration types they rely on, so that editors embedding the engine
//! and tools inspecting keymaps share the same parsing and matching code.

pub mod config;
pub mod editor;
pub mod input;
pub mod shortcuts;

pub use config::Config;
