//! # bc-core
//!
//! Core domain models and business logic for BlockClip.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod clipboard;
pub mod hotkey;
pub mod keys;
pub mod node;
pub mod plugin;
pub mod ports;
pub mod selection;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipboardItem, ClipboardPayload, MimeType};
pub use hotkey::{Hotkey, HotkeyParseError, KeyEvent, Modifiers};
pub use node::{ElementNode, Node, TextNode};
pub use plugin::{BlockSelectionOptions, ElementLayout, LayoutRect, SelectionOverlay};
pub use selection::{Path, SelectedBlock};
