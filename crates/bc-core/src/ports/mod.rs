//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and the host editor / platform implementations. This follows Hexagonal
//! Architecture principles, allowing the core business logic to remain
//! independent of external dependencies.

mod ai_chat;
mod block_selection;
mod system_clipboard;

pub use ai_chat::AiChatPort;
pub use block_selection::BlockSelectionPort;
pub use system_clipboard::SystemClipboardPort;
