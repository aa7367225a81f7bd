//! Dependency grouping for kit construction.
//!
//! This is NOT a Builder pattern:
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;

use bc_core::ports::{AiChatPort, BlockSelectionPort, SystemClipboardPort};

/// Capabilities the block-selection kit needs from its host.
///
/// All dependencies are required - no defaults, no optional fields. The
/// host editor supplies the selection and AI-chat ports; the platform
/// layer supplies the clipboard port.
pub struct KitDeps {
    pub selection: Arc<dyn BlockSelectionPort>,
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub ai_chat: Arc<dyn AiChatPort>,
}
