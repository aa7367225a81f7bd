//! # bc-platform
//!
//! Platform adapters for BlockClip: the system-clipboard implementation of
//! the core clipboard port, with capability detection.

pub mod adapters;
pub mod capability;

pub use adapters::SystemClipboard;
pub use capability::{detect_clipboard_capability, ClipboardCapability};
